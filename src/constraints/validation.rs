// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validation of a complete assignment set.
//!
//! Checks that the set is a permutation of the roster (every participant
//! gives once and receives once) and that no pair breaks a pairing rule.
//! Purely a function of its inputs.

use std::collections::{HashMap, HashSet};

use super::Violation;
use crate::roster::{AssignmentSet, Roster};

/// First violation found, or `Ok(())` if the set is a valid assignment for `roster`.
pub fn validate_assignments(roster: &Roster, set: &AssignmentSet) -> Result<(), Violation> {
    match all_violations(roster, set).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Every violation in `set`, in a stable order.
pub fn all_violations(roster: &Roster, set: &AssignmentSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    if set.len() != roster.len() {
        violations.push(Violation::LengthMismatch {
            expected: roster.len(),
            got: set.len(),
        });
    }

    let mut gives: HashMap<&str, usize> = HashMap::new();
    let mut receives: HashMap<&str, usize> = HashMap::new();
    let mut pairs: HashSet<(&str, &str)> = HashSet::new();
    let mut reported_unknown: HashSet<&str> = HashSet::new();

    for assignment in set {
        let giver = assignment.giver.as_str();
        let recipient = assignment.recipient.as_str();

        for name in [giver, recipient] {
            if !roster.contains(name) && reported_unknown.insert(name) {
                violations.push(Violation::UnknownName {
                    name: name.to_string(),
                });
            }
        }

        *gives.entry(giver).or_default() += 1;
        *receives.entry(recipient).or_default() += 1;

        if giver == recipient {
            violations.push(Violation::SelfAssignment {
                name: giver.to_string(),
            });
        } else if roster.excludes(giver, recipient) {
            violations.push(Violation::ExcludedPartner {
                giver: giver.to_string(),
                recipient: recipient.to_string(),
            });
        }

        // Report each mutual pair once, on its second half
        if pairs.contains(&(recipient, giver)) && giver != recipient {
            violations.push(Violation::MutualPair {
                giver: giver.to_string(),
                recipient: recipient.to_string(),
            });
        }
        pairs.insert((giver, recipient));
    }

    for name in roster.names() {
        match gives.get(name).copied().unwrap_or(0) {
            0 => violations.push(Violation::MissingGiver {
                name: name.to_string(),
            }),
            1 => {}
            _ => violations.push(Violation::DuplicateGiver {
                name: name.to_string(),
            }),
        }
        match receives.get(name).copied().unwrap_or(0) {
            0 => violations.push(Violation::MissingRecipient {
                name: name.to_string(),
            }),
            1 => {}
            _ => violations.push(Violation::DuplicateRecipient {
                name: name.to_string(),
            }),
        }
    }

    violations
}
