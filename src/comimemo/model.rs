//! # Domain Model
//!
//! The data types shared by every layer: [`CircleRecord`], [`NewCircle`] and [`Priority`].
//!
//! A circle is a booth at a convention. Each record carries where the booth is (`place`),
//! who runs it (`artist_name`), a free-form reference (a URL, a catalog number, ...), the
//! hall or facing label it sits in (`direction`) and how much the user cares about it
//! (`priority`).
//!
//! ## Identity
//!
//! Records are identified by a UUID assigned when the record enters a registry. Position in
//! the list is a display concern (see `index.rs`) and changes with every sort or removal;
//! the id never does.
//!
//! ## Priority Labels
//!
//! Only `High`, `Medium` and `Low` have a rank. Seed files are free-form JSON, so anything
//! else found there is kept verbatim as [`Priority::Unranked`] instead of being rejected.
//! Unranked circles sort after `Low`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Unranked(String),
}

/// Sort key given to anything without a rank.
const UNRANKED_KEY: u8 = 3;

impl Priority {
    /// The three ranked levels, highest first.
    pub const RANKED: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parses a label, returning `None` for anything that is not a known level.
    ///
    /// Accepts the English names (any case), their first letter, and the Japanese
    /// 高 / 中 / 低 labels.
    pub fn parse_known(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "high" | "h" | "高" => Some(Priority::High),
            "medium" | "m" | "中" => Some(Priority::Medium),
            "low" | "l" | "低" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Position in the High < Medium < Low ordering, `None` when unranked.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Priority::High => Some(0),
            Priority::Medium => Some(1),
            Priority::Low => Some(2),
            Priority::Unranked(_) => None,
        }
    }

    pub(crate) fn sort_key(&self) -> u8 {
        self.rank().unwrap_or(UNRANKED_KEY)
    }

    pub fn label(&self) -> &str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::Unranked(raw) => raw,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Priority::Unranked(raw) if raw.trim().is_empty())
    }
}

impl From<&str> for Priority {
    fn from(label: &str) -> Self {
        Priority::parse_known(label).unwrap_or_else(|| Priority::Unranked(label.to_string()))
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::parse_known(&label).unwrap_or(Priority::Unranked(label))
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Unranked(raw) => raw,
            ranked => ranked.label().to_string(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a circle needs except its identity.
///
/// This is what the add form produces and what seed files contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCircle {
    pub place: String,
    pub artist_name: String,
    pub reference_id: String,
    pub direction: String,
    pub priority: Priority,
}

impl NewCircle {
    pub fn new(
        place: impl Into<String>,
        artist_name: impl Into<String>,
        reference_id: impl Into<String>,
        direction: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            place: place.into(),
            artist_name: artist_name.into(),
            reference_id: reference_id.into(),
            direction: direction.into(),
            priority,
        }
    }

    /// Names of the fields that are empty (or whitespace only).
    pub fn missing_fields(&self) -> Vec<String> {
        let fields = [
            ("place", self.place.trim().is_empty()),
            ("artist name", self.artist_name.trim().is_empty()),
            ("reference", self.reference_id.trim().is_empty()),
            ("direction", self.direction.trim().is_empty()),
            ("priority", self.priority.is_empty()),
        ];
        fields
            .iter()
            .filter(|(_, empty)| *empty)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleRecord {
    pub id: Uuid,
    pub place: String,
    pub artist_name: String,
    pub reference_id: String,
    pub direction: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl CircleRecord {
    pub(crate) fn from_new(new: NewCircle) -> Self {
        Self {
            id: Uuid::new_v4(),
            place: new.place,
            artist_name: new.artist_name,
            reference_id: new.reference_id,
            direction: new.direction,
            priority: new.priority,
            created_at: Utc::now(),
        }
    }
}
