use crate::commands::CmdResult;
use crate::index::index_circles;
use crate::registry::CircleRegistry;

pub fn run(registry: &CircleRegistry) -> CmdResult {
    CmdResult::default().with_listed_circles(index_circles(registry.current_sequence()))
}
