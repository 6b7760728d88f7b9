// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end runs of the engine on small and reference rosters.

mod common;

use std::collections::HashSet;

use santa_picker::constraints::{validate_assignments, Infeasible};
use santa_picker::state::Counters;
use santa_picker::{config, EngineBuilder, EngineError, Participant, RetryPolicy, Roster};

#[test]
fn test_mutual_partners_fail_explicitly() {
    let roster = Roster::new(vec![
        Participant::with_partner("Alice", "Bob"),
        Participant::with_partner("Bob", "Alice"),
    ])
    .unwrap();

    // Rejected up front
    let mut engine = EngineBuilder::new().seed(1).build();
    assert_eq!(
        engine.generate(&roster),
        Err(EngineError::Infeasible(Infeasible::TooFew { count: 2 }))
    );

    // And without the precheck, the retry cap still terminates the run
    let mut engine = EngineBuilder::new()
        .seed(1)
        .precheck(false)
        .retry_policy(RetryPolicy::Bounded(100))
        .build();
    assert_eq!(
        engine.generate(&roster),
        Err(EngineError::NoValidAssignment { attempts: 100 })
    );
}

#[test]
fn test_office_roster_succeeds() {
    let roster = config::default_roster();

    for seed in 0..50 {
        let mut engine = EngineBuilder::new().seed(seed).build();
        let set = engine.generate(&roster).unwrap();

        common::assert_valid(&roster, &set);
        assert!(engine.last_attempts() >= 1);
    }
}

#[test]
fn test_office_roster_unbounded() {
    let roster = config::default_roster();
    let mut engine = EngineBuilder::new()
        .seed(31)
        .retry_policy(RetryPolicy::Unbounded)
        .build();

    let set = engine.generate(&roster).unwrap();

    common::assert_valid(&roster, &set);
    assert_eq!(
        engine.statistics().get(Counters::Attempts),
        engine.last_attempts()
    );
}

#[test]
fn test_three_singles_only_three_cycles() {
    let roster = common::singles(&["Kevin", "Oscar", "Angela"]);
    let mut seen = HashSet::new();

    let mut engine = EngineBuilder::new().seed(17).build();
    for _ in 0..200 {
        let set = engine.generate(&roster).unwrap();
        common::assert_valid(&roster, &set);

        let cycle: Vec<_> = set.iter().map(|a| a.recipient.clone()).collect();
        seen.insert(cycle);
    }

    // Kevin->Oscar->Angela->Kevin and Kevin->Angela->Oscar->Kevin
    let expected: HashSet<Vec<String>> = [
        vec!["Oscar", "Angela", "Kevin"],
        vec!["Angela", "Kevin", "Oscar"],
    ]
    .into_iter()
    .map(|v| v.into_iter().map(String::from).collect())
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_single_participant_fails_without_hanging() {
    let roster = common::singles(&["Creed"]);

    let mut engine = EngineBuilder::new().seed(4).build();
    assert!(matches!(
        engine.generate(&roster),
        Err(EngineError::Infeasible(_))
    ));

    let mut engine = EngineBuilder::new()
        .seed(4)
        .precheck(false)
        .retry_policy(RetryPolicy::Bounded(10))
        .build();
    assert_eq!(
        engine.generate(&roster),
        Err(EngineError::NoValidAssignment { attempts: 10 })
    );
    assert_eq!(engine.statistics().get(Counters::DeadEndOnlySelfLeft), 10);
}

#[test]
fn test_one_sided_partner_declaration_is_honoured() {
    // Only Jim names Pam; Pam must still never draw Jim
    let roster = Roster::new(vec![
        Participant::with_partner("Jim", "Pam"),
        Participant::new("Pam"),
        Participant::new("Dwight"),
        Participant::new("Angela"),
    ])
    .unwrap();

    let mut engine = EngineBuilder::new().seed(23).build();
    for _ in 0..100 {
        let set = engine.generate(&roster).unwrap();
        assert_ne!(set.recipient_of("Pam"), Some("Jim"));
        assert_ne!(set.recipient_of("Jim"), Some("Pam"));
    }
}

#[test]
fn test_revalidation_is_deterministic() {
    let roster = config::default_roster();
    let mut engine = EngineBuilder::new().seed(5).build();
    let set = engine.generate(&roster).unwrap();

    for _ in 0..3 {
        assert_eq!(validate_assignments(&roster, &set), Ok(()));
    }
}

#[test]
fn test_input_roster_unchanged() {
    let roster = config::default_roster();
    let before = roster.participants().to_vec();

    let mut engine = EngineBuilder::new().seed(6).build();
    engine.generate(&roster).unwrap();

    assert_eq!(roster.participants(), before.as_slice());
}
