// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-attempt search state.
//!
//! An [`AttemptContext`] is created fresh for every attempt and dropped
//! wholesale when the attempt dead-ends. It holds:
//! - the pool of recipients not yet drawn, as positions into the roster
//! - the assignments committed so far, in giver order
//!
//! The roster itself is borrowed and never modified.

use crate::roster::{Assignment, AssignmentSet, Participant, Roster};

/// Mutable state of one attempt.
#[derive(Debug)]
pub struct AttemptContext<'r> {
    roster: &'r Roster,

    /// Roster positions still available as recipients. Order is irrelevant.
    remaining: Vec<usize>,

    committed: AssignmentSet,
}

impl<'r> AttemptContext<'r> {
    /// Start an attempt with every participant available as a recipient.
    pub fn new(roster: &'r Roster) -> Self {
        Self {
            roster,
            remaining: (0..roster.len()).collect(),
            committed: AssignmentSet::with_capacity(roster.len()),
        }
    }

    pub fn roster(&self) -> &'r Roster {
        self.roster
    }

    /// Number of recipients not yet drawn.
    pub fn pool_len(&self) -> usize {
        self.remaining.len()
    }

    /// Recipient at `slot` in the pool.
    pub fn candidate(&self, slot: usize) -> &'r Participant {
        &self.roster.participants()[self.remaining[slot]]
    }

    pub fn committed(&self) -> &AssignmentSet {
        &self.committed
    }

    /// Record `giver -> pool[slot]` and take that recipient out of the pool.
    pub fn commit(&mut self, giver: &Participant, slot: usize) {
        let recipient = self.remaining.swap_remove(slot);
        let recipient = &self.roster.participants()[recipient];
        self.committed
            .push(Assignment::new(giver.name.clone(), recipient.name.clone()));
    }

    /// Whether every participant has a recipient.
    pub fn is_complete(&self) -> bool {
        self.committed.len() == self.roster.len()
    }

    pub fn into_assignments(self) -> AssignmentSet {
        self.committed
    }
}
