// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ways an assignment, or a whole assignment set, can be wrong.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// A broken invariant.
///
/// The first three are pairing rules, checked for every draw. The rest only
/// arise when validating a complete set.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum Violation {
    /// Giver drew themselves.
    SelfAssignment { name: String },

    /// Giver and recipient are declared partners.
    ExcludedPartner { giver: String, recipient: String },

    /// Recipient already gives to giver.
    MutualPair { giver: String, recipient: String },

    /// Participant never gives.
    MissingGiver { name: String },

    /// Participant gives more than once.
    DuplicateGiver { name: String },

    /// Participant never receives.
    MissingRecipient { name: String },

    /// Participant receives more than once.
    DuplicateRecipient { name: String },

    /// Assignment mentions someone not in the roster.
    UnknownName { name: String },

    /// Set size differs from roster size.
    LengthMismatch { expected: usize, got: usize },
}

impl Violation {
    /// Index into the statistics counters for this kind of violation.
    pub(crate) fn ordinal(&self) -> usize {
        match self {
            Violation::SelfAssignment { .. } => 0,
            Violation::ExcludedPartner { .. } => 1,
            Violation::MutualPair { .. } => 2,
            Violation::MissingGiver { .. } => 3,
            Violation::DuplicateGiver { .. } => 4,
            Violation::MissingRecipient { .. } => 5,
            Violation::DuplicateRecipient { .. } => 6,
            Violation::UnknownName { .. } => 7,
            Violation::LengthMismatch { .. } => 8,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SelfAssignment { name } => {
                write!(f, "{} is assigned to themselves", name)
            }
            Violation::ExcludedPartner { giver, recipient } => {
                write!(f, "{} and {} are partners", giver, recipient)
            }
            Violation::MutualPair { giver, recipient } => {
                write!(
                    f,
                    "{} and {} would be Santa for each other",
                    giver, recipient
                )
            }
            Violation::MissingGiver { name } => write!(f, "{} is not a Santa", name),
            Violation::DuplicateGiver { name } => {
                write!(f, "{} is Santa more than once", name)
            }
            Violation::MissingRecipient { name } => {
                write!(f, "{} has no Santa", name)
            }
            Violation::DuplicateRecipient { name } => {
                write!(f, "{} has more than one Santa", name)
            }
            Violation::UnknownName { name } => {
                write!(f, "{} is not in the roster", name)
            }
            Violation::LengthMismatch { expected, got } => {
                write!(f, "expected {} assignments, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for Violation {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_ordinals_are_dense() {
        let all = [
            Violation::SelfAssignment { name: "a".into() },
            Violation::ExcludedPartner { giver: "a".into(), recipient: "b".into() },
            Violation::MutualPair { giver: "a".into(), recipient: "b".into() },
            Violation::MissingGiver { name: "a".into() },
            Violation::DuplicateGiver { name: "a".into() },
            Violation::MissingRecipient { name: "a".into() },
            Violation::DuplicateRecipient { name: "a".into() },
            Violation::UnknownName { name: "a".into() },
            Violation::LengthMismatch { expected: 1, got: 0 },
        ];
        assert_eq!(all.len(), Violation::COUNT);
        for (i, v) in all.iter().enumerate() {
            assert_eq!(v.ordinal(), i);
        }
    }

    #[test]
    fn test_display() {
        let v = Violation::MutualPair {
            giver: "Kelly".into(),
            recipient: "Ryan".into(),
        };
        assert_eq!(v.to_string(), "Kelly and Ryan would be Santa for each other");
    }
}
