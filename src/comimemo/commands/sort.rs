use crate::commands::{CmdMessage, CmdResult};
use crate::registry::CircleRegistry;
use tracing::info;

pub fn run(registry: &mut CircleRegistry) -> CmdResult {
    registry.sort_by_priority();
    info!(count = registry.len(), "circles sorted by priority");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Sorted by priority"));
    result
}
