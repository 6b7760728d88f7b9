// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairing rules checked on every draw.
//!
//! Each rule looks at one candidate pair against the assignments already
//! committed in the current attempt. Rules never mutate anything, so the
//! same pair always gets the same verdict for the same committed set.

use std::fmt::Debug;

use super::Violation;
use crate::roster::{AssignmentSet, Roster};

/// A rule a single `giver -> recipient` pair must satisfy.
///
/// # Example
///
/// ```
/// use santa_picker::constraints::{Constraint, Violation};
/// use santa_picker::roster::{AssignmentSet, Roster};
///
/// /// Nobody gives to Toby.
/// #[derive(Debug)]
/// struct NotToby;
///
/// impl Constraint for NotToby {
///     fn check(
///         &self,
///         _roster: &Roster,
///         giver: &str,
///         recipient: &str,
///         _committed: &AssignmentSet,
///     ) -> Result<(), Violation> {
///         if recipient == "Toby" {
///             Err(Violation::ExcludedPartner {
///                 giver: giver.to_string(),
///                 recipient: recipient.to_string(),
///             })
///         } else {
///             Ok(())
///         }
///     }
///
///     fn name(&self) -> &str {
///         "NotToby"
///     }
/// }
/// ```
pub trait Constraint: Debug {
    /// `Ok(())` if the pair is allowed given `committed`.
    fn check(
        &self,
        roster: &Roster,
        giver: &str,
        recipient: &str,
        committed: &AssignmentSet,
    ) -> Result<(), Violation>;

    /// Name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Nobody is their own Santa.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSelfAssignment;

impl Constraint for NoSelfAssignment {
    fn check(
        &self,
        _roster: &Roster,
        giver: &str,
        recipient: &str,
        _committed: &AssignmentSet,
    ) -> Result<(), Violation> {
        if giver == recipient {
            Err(Violation::SelfAssignment {
                name: giver.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &str {
        "NoSelfAssignment"
    }
}

/// Partners are never paired, whichever of the two declared it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotExcludedPartner;

impl Constraint for NotExcludedPartner {
    fn check(
        &self,
        roster: &Roster,
        giver: &str,
        recipient: &str,
        _committed: &AssignmentSet,
    ) -> Result<(), Violation> {
        if roster.excludes(giver, recipient) {
            Err(Violation::ExcludedPartner {
                giver: giver.to_string(),
                recipient: recipient.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &str {
        "NotExcludedPartner"
    }
}

/// No two people are Santa for each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMutualPair;

impl Constraint for NoMutualPair {
    fn check(
        &self,
        _roster: &Roster,
        giver: &str,
        recipient: &str,
        committed: &AssignmentSet,
    ) -> Result<(), Violation> {
        if committed.has_reverse(giver, recipient) {
            Err(Violation::MutualPair {
                giver: giver.to_string(),
                recipient: recipient.to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &str {
        "NoMutualPair"
    }
}

/// The three standard rules, self check first.
pub fn default_constraints() -> Vec<Box<dyn Constraint>> {
    vec![
        Box::new(NoSelfAssignment),
        Box::new(NotExcludedPartner),
        Box::new(NoMutualPair),
    ]
}

/// Run `constraints` in order and return the first one broken, with its violation.
pub fn first_violation<'c>(
    constraints: &'c [Box<dyn Constraint>],
    roster: &Roster,
    giver: &str,
    recipient: &str,
    committed: &AssignmentSet,
) -> Option<(&'c dyn Constraint, Violation)> {
    constraints.iter().find_map(|c| {
        c.check(roster, giver, recipient, committed)
            .err()
            .map(|violation| (c.as_ref(), violation))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Assignment, Participant};

    fn office() -> Roster {
        Roster::new(vec![
            Participant::with_partner("Jim", "Pam"),
            Participant::with_partner("Pam", "Jim"),
            Participant::new("Dwight"),
            Participant::new("Angela"),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_self_assignment() {
        let roster = office();
        let empty = AssignmentSet::new();

        assert!(NoSelfAssignment.check(&roster, "Jim", "Jim", &empty).is_err());
        assert!(NoSelfAssignment.check(&roster, "Jim", "Dwight", &empty).is_ok());
    }

    #[test]
    fn test_not_excluded_partner() {
        let roster = office();
        let empty = AssignmentSet::new();

        assert_eq!(
            NotExcludedPartner.check(&roster, "Pam", "Jim", &empty),
            Err(Violation::ExcludedPartner {
                giver: "Pam".into(),
                recipient: "Jim".into()
            })
        );
        assert!(NotExcludedPartner.check(&roster, "Pam", "Angela", &empty).is_ok());
    }

    #[test]
    fn test_no_mutual_pair() {
        let roster = office();
        let committed = AssignmentSet::from(vec![Assignment::new("Dwight", "Angela")]);

        assert!(NoMutualPair.check(&roster, "Angela", "Dwight", &committed).is_err());
        assert!(NoMutualPair.check(&roster, "Angela", "Jim", &committed).is_ok());
        // Same direction again is not a mutual pair
        assert!(NoMutualPair.check(&roster, "Dwight", "Angela", &committed).is_ok());
    }

    #[test]
    fn test_first_violation_order() {
        let roster = office();
        let constraints = default_constraints();
        let empty = AssignmentSet::new();

        let (rule, violation) =
            first_violation(&constraints, &roster, "Jim", "Jim", &empty).unwrap();
        assert_eq!(rule.name(), "NoSelfAssignment");
        assert!(matches!(violation, Violation::SelfAssignment { .. }));

        let (rule, _) = first_violation(&constraints, &roster, "Jim", "Pam", &empty).unwrap();
        assert_eq!(rule.name(), "NotExcludedPartner");

        let committed = AssignmentSet::from(vec![Assignment::new("Angela", "Jim")]);
        let (rule, _) =
            first_violation(&constraints, &roster, "Jim", "Angela", &committed).unwrap();
        assert_eq!(rule.name(), "NoMutualPair");

        assert!(first_violation(&constraints, &roster, "Jim", "Angela", &empty).is_none());
    }
}
