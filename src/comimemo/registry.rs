//! # Circle Registry
//!
//! [`CircleRegistry`] owns the ordered list of circles and is the only place that mutates it.
//!
//! ## Ordering
//!
//! The list is kept in insertion order until [`CircleRegistry::sort_by_priority`] is called.
//! The sorted order then sticks until the next mutation: new circles are always appended at
//! the end, and nothing re-sorts automatically.
//!
//! Sorting is stable. Circles with the same priority keep their relative order, which is
//! what makes repeated sorts idempotent. Unranked priorities go after `Low`.
//!
//! ## Positions
//!
//! Removal is positional (zero-based here; the one-based display form lives in `index.rs`).
//! Positions are only meaningful against the sequence they were read from, so callers must
//! re-read [`CircleRegistry::current_sequence`] after every mutation.
//!
//! Multi-removal takes a set and removes from the highest position down, so earlier
//! removals never shift the positions still pending. The whole set is validated before
//! anything is removed.
//!
//! ## Threading
//!
//! Every operation is synchronous and takes `&self` / `&mut self`. Sharing a registry across
//! threads means wrapping it in a lock on the caller's side.

use crate::error::{CircleError, Result};
use crate::model::{CircleRecord, NewCircle};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// How `add` treats records with empty fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPolicy {
    /// Reject records with empty fields.
    #[default]
    Strict,
    /// Accept anything; completeness is the caller's job.
    Trusting,
}

#[derive(Debug, Default)]
pub struct CircleRegistry {
    records: Vec<CircleRecord>,
    policy: AddPolicy,
}

impl CircleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a seed list. Seed entries are taken as-is, in order.
    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = NewCircle>,
    {
        let records: Vec<CircleRecord> = seed.into_iter().map(CircleRecord::from_new).collect();
        debug!(count = records.len(), "seeded circle registry");
        Self {
            records,
            policy: AddPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AddPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AddPolicy {
        self.policy
    }

    /// Appends a new circle and returns it with its freshly assigned id.
    pub fn add(&mut self, new: NewCircle) -> Result<CircleRecord> {
        if self.policy == AddPolicy::Strict {
            let missing = new.missing_fields();
            if !missing.is_empty() {
                warn!(?missing, "rejected incomplete circle");
                return Err(CircleError::IncompleteRecord { missing });
            }
        }

        let record = CircleRecord::from_new(new);
        debug!(id = %record.id, place = %record.place, "added circle");
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<CircleRecord> {
        self.check_position(position)?;
        let removed = self.records.remove(position);
        debug!(position, id = %removed.id, "removed circle");
        Ok(removed)
    }

    /// Removes every position in the set. Nothing is removed if any position is out of range.
    ///
    /// Returns the removed circles in ascending position order.
    pub fn remove_positions(&mut self, positions: &BTreeSet<usize>) -> Result<Vec<CircleRecord>> {
        for &position in positions {
            self.check_position(position)?;
        }

        let mut removed: Vec<CircleRecord> = positions
            .iter()
            .rev()
            .map(|&position| self.records.remove(position))
            .collect();
        removed.reverse();

        debug!(count = removed.len(), "removed circles");
        Ok(removed)
    }

    /// Stable sort: High, Medium, Low, then unranked.
    pub fn sort_by_priority(&mut self) {
        self.records.sort_by_key(|record| record.priority.sort_key());
        debug!(count = self.records.len(), "sorted circles by priority");
    }

    pub fn current_sequence(&self) -> &[CircleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&CircleRecord> {
        self.records.get(position)
    }

    /// Looks a circle up by id, returning its current position alongside it.
    pub fn find(&self, id: &Uuid) -> Option<(usize, &CircleRecord)> {
        self.records
            .iter()
            .enumerate()
            .find(|(_, record)| &record.id == id)
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.records.len() {
            warn!(position, len = self.records.len(), "position out of range");
            return Err(CircleError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}
