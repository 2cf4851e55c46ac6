//! # Display Positions
//!
//! Users see circles numbered from 1, in the order the registry currently holds them. The
//! registry itself works with zero-based positions. This module is the bridge.
//!
//! A [`DisplayPosition`] is only valid against the listing it was printed from: after a
//! sort or a removal, the same number points at a different circle.
//!
//! Selections accept single positions (`3`) and inclusive ranges (`2-4`). Ranges stay as
//! bounds until they are checked against the length of the list; only then are they
//! expanded and merged into one [`BTreeSet`] of zero-based positions, so duplicates
//! collapse and the set can be handed straight to `CircleRegistry::remove_positions`.

use crate::error::{CircleError, Result};
use crate::model::CircleRecord;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A one-based position as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayPosition(usize);

impl DisplayPosition {
    pub fn new(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    pub fn from_zero_based(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for DisplayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayPosition {
    type Err = CircleError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayPosition::new)
            .ok_or_else(|| CircleError::InvalidPosition(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCircle {
    pub circle: CircleRecord,
    pub position: DisplayPosition,
}

/// Numbers a sequence of circles for display.
pub fn index_circles(circles: &[CircleRecord]) -> Vec<DisplayCircle> {
    circles
        .iter()
        .enumerate()
        .map(|(i, circle)| DisplayCircle {
            circle: circle.clone(),
            position: DisplayPosition::from_zero_based(i),
        })
        .collect()
}

/// Parses a single input that may be a position or an inclusive range.
///
/// - Single: "3"
/// - Range: "2-4" (covers 2, 3, 4). Start must be <= end.
///
/// Whether the positions exist is checked later, against the list length.
pub fn parse_position_or_range(s: &str) -> Result<RangeInclusive<DisplayPosition>> {
    if let Some((start, end)) = s.split_once('-') {
        let start = DisplayPosition::from_str(start)?;
        let end = DisplayPosition::from_str(end)?;
        if start > end {
            return Err(CircleError::InvalidPosition(format!(
                "{} (start {} must be <= end {})",
                s, start, end
            )));
        }
        return Ok(start..=end);
    }

    DisplayPosition::from_str(s).map(|p| p..=p)
}

/// Parses every input and merges them into a set of zero-based positions within a list
/// of `len` circles.
///
/// Fails with `OutOfRange` naming the lowest zero-based position past the end, the same
/// position `CircleRegistry::remove_positions` would report.
pub fn parse_selection<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<BTreeSet<usize>> {
    let mut ranges = Vec::new();
    for input in inputs {
        for part in input.as_ref().split(',').filter(|p| !p.trim().is_empty()) {
            ranges.push(parse_position_or_range(part.trim())?);
        }
    }

    let first_out_of_range = ranges
        .iter()
        .filter(|range| range.end().zero_based() >= len)
        .map(|range| range.start().zero_based().max(len))
        .min();
    if let Some(position) = first_out_of_range {
        return Err(CircleError::OutOfRange { position, len });
    }

    Ok(ranges
        .into_iter()
        .flat_map(|range| range.start().zero_based()..=range.end().zero_based())
        .collect())
}
