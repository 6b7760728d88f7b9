// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Outcome of a single random draw.
//!
//! For each giver the engine keeps drawing from the remaining pool until a
//! draw is accepted or the attempt is declared a dead-end. The decision for
//! one draw depends only on the pool size, the two names, and the first rule
//! the pair breaks, so it lives here as a pure function.

use std::fmt;

use crate::constraints::Violation;

/// Below this pool size a rule violation ends the attempt instead of resampling.
pub const FEW_CANDIDATES: usize = 3;

/// What to do with one drawn candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Commit the pair and move to the next giver.
    Accept,

    /// Throw the draw away and draw again from the same pool.
    Resample(Violation),

    /// Abandon the whole attempt.
    DeadEnd(DeadEnd),
}

/// Why an attempt was abandoned.
///
/// Recovered by restarting the attempt; never reported to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadEnd {
    /// The only recipient left is the giver.
    OnlySelfLeft { giver: String },

    /// Pool below [`FEW_CANDIDATES`] and the drawn pair breaks a rule.
    FewCandidates(Violation),

    /// Every candidate left in the pool has been rejected for this giver.
    PoolExhausted { giver: String },
}

impl fmt::Display for DeadEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadEnd::OnlySelfLeft { giver } => {
                write!(f, "only {} is left for {}", giver, giver)
            }
            DeadEnd::FewCandidates(violation) => {
                write!(f, "too few candidates left: {}", violation)
            }
            DeadEnd::PoolExhausted { giver } => {
                write!(f, "no remaining candidate is allowed for {}", giver)
            }
        }
    }
}

/// Decide what to do with `candidate` drawn for `giver` from a pool of
/// `pool_len`, given the first rule the pair breaks (if any).
pub fn classify(
    pool_len: usize,
    giver: &str,
    candidate: &str,
    violation: Option<Violation>,
) -> DrawOutcome {
    if pool_len == 1 && giver == candidate {
        return DrawOutcome::DeadEnd(DeadEnd::OnlySelfLeft {
            giver: giver.to_string(),
        });
    }

    match violation {
        None => DrawOutcome::Accept,
        // Drawing oneself from a larger pool is just a bad draw
        Some(v @ Violation::SelfAssignment { .. }) => DrawOutcome::Resample(v),
        Some(v) if pool_len < FEW_CANDIDATES => DrawOutcome::DeadEnd(DeadEnd::FewCandidates(v)),
        Some(v) => DrawOutcome::Resample(v),
    }
}
