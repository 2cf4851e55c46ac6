//! # Add Form
//!
//! A headless version of the "new circle" form. UIs bind their inputs to a
//! [`CircleDraft`], keep the confirm action disabled until [`CircleDraft::is_complete`]
//! returns true, and call [`CircleDraft::submit`] to get a [`NewCircle`] for the registry.
//!
//! The place code is never typed directly. It is composed from three pickers as
//! `{row}-{desk}{position}`, e.g. row `A`, desk `11`, position `a` gives `A-11a`. The hall
//! picker fills the record's `direction`.
//!
//! Picker options are fixed (see [`HALLS`], [`ROWS`], [`DESK_NUMBERS`], [`POSITIONS`]).
//! Halls may also be given by their Japanese labels (東, 西, 南); the record always stores
//! the English name.
//! Free text fields (artist name, reference) only need to be non-empty.

use crate::error::{CircleError, Result};
use crate::model::{NewCircle, Priority};
use std::ops::RangeInclusive;

pub const HALLS: [&str; 3] = ["East", "West", "South"];

/// Japanese hall labels, paired with [`HALLS`] by index.
pub const HALL_LABELS_JA: [&str; 3] = ["東", "西", "南"];

pub const ROWS: [&str; 22] = [
    "A", "B", "D", "E", "F", "G", "H", "K", "L", "M", "N", "P", "Q", "R", "S", "T", "U", "V",
    "W", "X", "Y", "Z",
];

pub const DESK_NUMBERS: RangeInclusive<u8> = 1..=64;

pub const POSITIONS: [&str; 3] = ["a", "b", "ab"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircleDraft {
    pub artist_name: String,
    pub reference_id: String,
    pub hall: String,
    pub row: String,
    pub desk_number: String,
    pub position: String,
    pub priority: String,
}

impl CircleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_fields(&self) -> Vec<String> {
        let fields = [
            ("artist name", &self.artist_name),
            ("reference", &self.reference_id),
            ("hall", &self.hall),
            ("row", &self.row),
            ("desk number", &self.desk_number),
            ("position", &self.position),
            ("priority", &self.priority),
        ];
        fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// True when every field has a value. Gate for the confirm action.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The composed place code, once row, desk and position are all set.
    pub fn place(&self) -> Option<String> {
        let parts = [&self.row, &self.desk_number, &self.position];
        if parts.iter().any(|p| p.trim().is_empty()) {
            return None;
        }
        Some(format!(
            "{}-{}{}",
            self.row.trim(),
            self.desk_number.trim(),
            self.position.trim()
        ))
    }

    /// Validates the draft and turns it into a circle ready to add.
    pub fn submit(&self) -> Result<NewCircle> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CircleError::IncompleteRecord { missing });
        }

        let hall = hall_name(&self.hall).ok_or_else(|| CircleError::InvalidChoice {
            field: "hall".to_string(),
            value: self.hall.clone(),
        })?;
        check_choice("row", &self.row, &ROWS)?;
        check_desk_number(&self.desk_number)?;
        check_choice("position", &self.position, &POSITIONS)?;
        let priority =
            Priority::parse_known(&self.priority).ok_or_else(|| CircleError::InvalidChoice {
                field: "priority".to_string(),
                value: self.priority.clone(),
            })?;

        let place = self.place().ok_or_else(|| CircleError::IncompleteRecord {
            missing: vec!["place".to_string()],
        })?;

        Ok(NewCircle::new(
            place,
            self.artist_name.trim(),
            self.reference_id.trim(),
            hall,
            priority,
        ))
    }

    /// Builds a circle from whatever the draft holds, without any checks.
    ///
    /// Used when the registry runs with `AddPolicy::Trusting`. The place keeps the
    /// `{row}-{desk}{position}` shape even when some pickers are empty.
    pub fn to_new_circle_unchecked(&self) -> NewCircle {
        let place = format!(
            "{}-{}{}",
            self.row.trim(),
            self.desk_number.trim(),
            self.position.trim()
        );
        let hall = hall_name(&self.hall).unwrap_or(self.hall.trim());
        NewCircle::new(
            place,
            self.artist_name.trim(),
            self.reference_id.trim(),
            hall,
            Priority::from(self.priority.trim()),
        )
    }
}

/// The English hall name for either an English or a Japanese hall label.
pub fn hall_name(value: &str) -> Option<&'static str> {
    let value = value.trim();
    HALLS
        .iter()
        .zip(HALL_LABELS_JA.iter())
        .find(|(en, ja)| **en == value || **ja == value)
        .map(|(en, _)| *en)
}

fn check_choice(field: &str, value: &str, options: &[&str]) -> Result<()> {
    if options.contains(&value.trim()) {
        Ok(())
    } else {
        Err(CircleError::InvalidChoice {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_desk_number(value: &str) -> Result<()> {
    match value.trim().parse::<u8>() {
        Ok(n) if DESK_NUMBERS.contains(&n) => Ok(()),
        _ => Err(CircleError::InvalidChoice {
            field: "desk number".to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CircleDraft {
        CircleDraft {
            artist_name: "Kilpakun".into(),
            reference_id: "12".into(),
            hall: "South".into(),
            row: "B".into(),
            desk_number: "12".into(),
            position: "b".into(),
            priority: "Medium".into(),
        }
    }

    #[test]
    fn empty_draft_is_incomplete() {
        let draft = CircleDraft::new();
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_fields().len(), 7);
        assert_eq!(draft.place(), None);
    }

    #[test]
    fn desk_number_is_required() {
        let mut draft = filled();
        draft.desk_number.clear();
        assert!(!draft.is_complete());
        assert_eq!(draft.missing_fields(), vec!["desk number"]);
    }

    #[test]
    fn composes_place_from_pickers() {
        assert_eq!(filled().place().as_deref(), Some("B-12b"));
    }

    #[test]
    fn submit_builds_new_circle() {
        let new = filled().submit().unwrap();
        assert_eq!(new.place, "B-12b");
        assert_eq!(new.artist_name, "Kilpakun");
        assert_eq!(new.reference_id, "12");
        assert_eq!(new.direction, "South");
        assert_eq!(new.priority, Priority::Medium);
    }

    #[test]
    fn submit_rejects_incomplete_draft() {
        let mut draft = filled();
        draft.artist_name = "   ".into();
        match draft.submit() {
            Err(CircleError::IncompleteRecord { missing }) => {
                assert_eq!(missing, vec!["artist name"]);
            }
            other => panic!("Expected IncompleteRecord, got {:?}", other),
        }
    }

    #[test]
    fn submit_rejects_values_outside_pickers() {
        let cases = [
            ("hall", CircleDraft { hall: "North".into(), ..filled() }),
            ("row", CircleDraft { row: "C".into(), ..filled() }),
            ("desk number", CircleDraft { desk_number: "65".into(), ..filled() }),
            ("desk number", CircleDraft { desk_number: "0".into(), ..filled() }),
            ("position", CircleDraft { position: "c".into(), ..filled() }),
            ("priority", CircleDraft { priority: "urgent".into(), ..filled() }),
        ];

        for (expected, draft) in cases {
            match draft.submit() {
                Err(CircleError::InvalidChoice { field, .. }) => assert_eq!(field, expected),
                other => panic!("Expected InvalidChoice for {}, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn unchecked_conversion_keeps_partial_values() {
        let draft = CircleDraft {
            artist_name: "Someone".into(),
            desk_number: "7".into(),
            priority: "whenever".into(),
            ..CircleDraft::new()
        };
        let new = draft.to_new_circle_unchecked();
        assert_eq!(new.place, "-7");
        assert_eq!(new.direction, "");
        assert_eq!(new.priority, Priority::Unranked("whenever".into()));

        assert_eq!(filled().to_new_circle_unchecked(), filled().submit().unwrap());
    }

    #[test]
    fn japanese_hall_labels_are_accepted() {
        assert_eq!(hall_name("東"), Some("East"));
        assert_eq!(hall_name(" 西 "), Some("West"));
        assert_eq!(hall_name("South"), Some("South"));
        assert_eq!(hall_name("北"), None);

        let new = CircleDraft { hall: "南".into(), ..filled() }.submit().unwrap();
        assert_eq!(new.direction, "South");

        let unchecked = CircleDraft { hall: "東".into(), ..filled() }.to_new_circle_unchecked();
        assert_eq!(unchecked.direction, "East");
    }

    #[test]
    fn unchecked_place_keeps_the_separator() {
        let draft = CircleDraft {
            desk_number: "40".into(),
            position: "a".into(),
            ..CircleDraft::new()
        };
        assert_eq!(draft.to_new_circle_unchecked().place, "-40a");
    }

    #[test]
    fn picker_options_match_the_floor_plan() {
        assert_eq!(ROWS.len(), 22);
        assert!(!ROWS.contains(&"C"));
        assert_eq!(DESK_NUMBERS.count(), 64);
        assert_eq!(POSITIONS, ["a", "b", "ab"]);
    }
}
