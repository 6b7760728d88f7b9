// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use santa_picker::{AssignmentSet, Participant, Roster};

pub fn singles(names: &[&str]) -> Roster {
    Roster::new(names.iter().map(|n| Participant::new(*n)).collect()).unwrap()
}

/// Assert P1 through P5 directly, without going through the library's validator.
pub fn assert_valid(roster: &Roster, set: &AssignmentSet) {
    assert_eq!(set.len(), roster.len(), "one assignment per participant");

    let mut givers: Vec<_> = set.iter().map(|a| a.giver.as_str()).collect();
    let mut recipients: Vec<_> = set.iter().map(|a| a.recipient.as_str()).collect();
    let mut names: Vec<_> = roster.names().collect();
    givers.sort_unstable();
    recipients.sort_unstable();
    names.sort_unstable();
    assert_eq!(givers, names, "every participant gives exactly once");
    assert_eq!(recipients, names, "every participant receives exactly once");

    let pairs: HashSet<(&str, &str)> = set
        .iter()
        .map(|a| (a.giver.as_str(), a.recipient.as_str()))
        .collect();
    for a in set {
        assert_ne!(a.giver, a.recipient, "{} is their own Santa", a.giver);
        let partner = roster.get(&a.giver).and_then(|p| p.excluded_partner.as_deref());
        assert_ne!(partner, Some(a.recipient.as_str()), "{} drew their partner", a.giver);
        assert!(
            !pairs.contains(&(a.recipient.as_str(), a.giver.as_str())),
            "{} and {} are Santa for each other",
            a.giver,
            a.recipient
        );
    }
}
