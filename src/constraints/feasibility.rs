// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Up-front feasibility check.
//!
//! Rules out rosters that can never be assigned, so the engine can fail
//! immediately instead of burning its retry budget:
//!
//! - fewer than three participants (one must self-assign, two must form a
//!   mutual pair),
//! - no perfect matching between givers and their allowed recipients
//!   (Hall's condition fails), found with augmenting paths.
//!
//! Passing the check does not prove a solution exists: the matching ignores
//! the mutual-pair rule. The engine's retry cap covers the remainder.

use thiserror::Error;

use crate::roster::Roster;

/// Smallest group that can avoid both self-assignment and mutual pairs.
pub const MIN_PARTICIPANTS: usize = 3;

/// Why a roster can never be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasible {
    /// Too few participants.
    #[error("{count} participant(s), at least {} needed", MIN_PARTICIPANTS)]
    TooFew { count: usize },

    /// Not everyone can be matched to an allowed recipient.
    #[error("no allowed recipient left for {unmatched}")]
    NoPerfectMatching { unmatched: String },
}

/// Reject rosters that cannot possibly be assigned.
pub fn check_feasibility(roster: &Roster) -> Result<(), Infeasible> {
    let n = roster.len();
    if n < MIN_PARTICIPANTS {
        return Err(Infeasible::TooFew { count: n });
    }

    let allowed = allowed_recipients(roster);

    // match_of[recipient] = giver
    let mut match_of: Vec<Option<usize>> = vec![None; n];
    for giver in 0..n {
        let mut visited = vec![false; n];
        if !augment(giver, &allowed, &mut match_of, &mut visited) {
            return Err(Infeasible::NoPerfectMatching {
                unmatched: roster.participants()[giver].name.clone(),
            });
        }
    }
    Ok(())
}

/// For each giver, the recipients the static rules allow.
fn allowed_recipients(roster: &Roster) -> Vec<Vec<usize>> {
    let people = roster.participants();
    people
        .iter()
        .map(|giver| {
            people
                .iter()
                .enumerate()
                .filter(|(_, recipient)| {
                    giver.name != recipient.name && !roster.excludes(&giver.name, &recipient.name)
                })
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

/// Kuhn's augmenting path step.
fn augment(
    giver: usize,
    allowed: &[Vec<usize>],
    match_of: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &recipient in &allowed[giver] {
        if visited[recipient] {
            continue;
        }
        visited[recipient] = true;
        let free = match match_of[recipient] {
            None => true,
            Some(other) => augment(other, allowed, match_of, visited),
        };
        if free {
            match_of[recipient] = Some(giver);
            return true;
        }
    }
    false
}
