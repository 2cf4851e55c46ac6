use crate::commands::{ChoiceGroup, CmdResult};
use crate::form::{DESK_NUMBERS, HALLS, POSITIONS, ROWS};
use crate::model::Priority;

fn strings(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

/// The picker options of the add form, in display order.
pub fn run() -> CmdResult {
    let groups = vec![
        ChoiceGroup {
            name: "hall",
            options: strings(&HALLS),
        },
        ChoiceGroup {
            name: "row",
            options: strings(&ROWS),
        },
        ChoiceGroup {
            name: "desk",
            options: DESK_NUMBERS.map(|n| n.to_string()).collect(),
        },
        ChoiceGroup {
            name: "position",
            options: strings(&POSITIONS),
        },
        ChoiceGroup {
            name: "priority",
            options: Priority::RANKED.iter().map(|p| p.to_string()).collect(),
        },
    ];
    CmdResult::default().with_choices(groups)
}
