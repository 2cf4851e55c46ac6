use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPosition;
use crate::model::NewCircle;
use crate::registry::CircleRegistry;
use tracing::info;

pub fn run(registry: &mut CircleRegistry, new: NewCircle) -> Result<CmdResult> {
    let record = registry.add(new)?;
    let position = DisplayPosition::from_zero_based(registry.len() - 1);
    info!(id = %record.id, %position, "circle added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Circle added ({}): {} {}",
        position, record.place, record.artist_name
    )));
    Ok(result.with_affected_circles(vec![record]))
}
