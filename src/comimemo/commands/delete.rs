use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPosition;
use crate::registry::CircleRegistry;
use std::collections::BTreeSet;
use tracing::info;

/// Removes the circles at the given zero-based positions, all at once.
pub fn run(registry: &mut CircleRegistry, positions: &BTreeSet<usize>) -> Result<CmdResult> {
    let removed = registry.remove_positions(positions)?;
    info!(count = removed.len(), "circles deleted");

    let mut result = CmdResult::default();
    if removed.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to delete"));
    }
    for (position, circle) in positions.iter().zip(&removed) {
        result.add_message(CmdMessage::success(format!(
            "Circle deleted ({}): {} {}",
            DisplayPosition::from_zero_based(*position),
            circle.place,
            circle.artist_name
        )));
    }

    Ok(result.with_affected_circles(removed))
}
