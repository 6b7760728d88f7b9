// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Giver to recipient pairs.

use serde::Serialize;

/// "`giver` is Santa for `recipient`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Assignment {
    pub giver: String,
    pub recipient: String,
}

impl Assignment {
    pub fn new(giver: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            recipient: recipient.into(),
        }
    }
}

/// The assignments of one run, in giver input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignmentSet {
    assignments: Vec<Assignment>,
}

impl AssignmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Who `giver` buys for, if assigned.
    pub fn recipient_of(&self, giver: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.giver == giver)
            .map(|a| a.recipient.as_str())
    }

    /// Whether `recipient` already gives to `giver`, i.e. adding
    /// `giver -> recipient` would close a mutual pair.
    pub fn has_reverse(&self, giver: &str, recipient: &str) -> bool {
        self.assignments
            .iter()
            .any(|a| a.giver == recipient && a.recipient == giver)
    }
}

impl From<Vec<Assignment>> for AssignmentSet {
    fn from(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }
}

impl<'a> IntoIterator for &'a AssignmentSet {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
