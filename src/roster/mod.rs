// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Participants, assignments and the validated roster.
//!
//! A [`Roster`] is the immutable input to the engine. It is built once from a
//! list of [`Participant`]s and rejects lists that the engine could never
//! reason about (duplicate names, partners who are not in the group, ...).
//!
//! Names are the identity of a participant: all comparisons go through the
//! name, never through the position or address of a `Participant`.

mod assignment;
mod participant;

pub use assignment::{Assignment, AssignmentSet};
pub use participant::Participant;

use std::collections::HashMap;

use crate::error::RosterError;

/// An ordered, validated list of participants.
#[derive(Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
    /// Name to position in `participants`.
    index: HashMap<String, usize>,
}

impl Roster {
    /// Validate `participants` and build a roster.
    ///
    /// Input order is preserved; givers are processed in this order.
    pub fn new(participants: Vec<Participant>) -> Result<Self, RosterError> {
        if participants.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut index = HashMap::with_capacity(participants.len());
        for (position, participant) in participants.iter().enumerate() {
            if participant.name.trim().is_empty() {
                return Err(RosterError::BlankName { position });
            }
            if index.insert(participant.name.clone(), position).is_some() {
                return Err(RosterError::DuplicateName(participant.name.clone()));
            }
        }

        for participant in &participants {
            if let Some(partner) = participant.excluded_partner.as_deref() {
                if partner == participant.name {
                    return Err(RosterError::SelfExclusion(participant.name.clone()));
                }
                if !index.contains_key(partner) {
                    return Err(RosterError::UnknownPartner {
                        participant: participant.name.clone(),
                        partner: partner.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            participants,
            index,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Look up a participant by name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.index.get(name).map(|&i| &self.participants[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `a` and `b` are declared partners.
    ///
    /// Symmetric: it is enough for either of the two to name the other.
    pub fn excludes(&self, a: &str, b: &str) -> bool {
        let names = |x: &str, y: &str| {
            self.get(x)
                .and_then(|p| p.excluded_partner.as_deref())
                .is_some_and(|partner| partner == y)
        };
        names(a, b) || names(b, a)
    }

    /// Names in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }
}
