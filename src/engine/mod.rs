// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomized assignment engine.
//!
//! The engine builds an assignment set by generate-and-test with restarts.
//! There is no undo of individual choices: an attempt that reaches a
//! dead-end is thrown away and the next attempt starts from scratch.
//!
//! # Algorithm
//!
//! One attempt:
//! 1. Every participant starts in the pool of remaining recipients
//! 2. Givers are processed in roster order
//! 3. For each giver, draw uniformly from the pool:
//!    - Accept: no rule is broken. Commit the pair, remove the recipient
//!    - DeadEnd: the only one left is the giver, or fewer than three are
//!      left and the pair breaks a rule, or every remaining candidate has
//!      already been rejected for this giver. Abandon the attempt
//!    - Resample: otherwise, draw again from the unchanged pool
//! 4. If every giver committed, the attempt succeeded
//!
//! `generate` repeats attempts until one succeeds or the [`RetryPolicy`]
//! runs out, and re-validates the result before returning it.
//!
//! # Example
//!
//! ```
//! use santa_picker::engine::{EngineBuilder, RetryPolicy};
//! use santa_picker::roster::{Participant, Roster};
//! use santa_picker::constraints::validate_assignments;
//!
//! let roster = Roster::new(vec![
//!     Participant::with_partner("Jim", "Pam"),
//!     Participant::with_partner("Pam", "Jim"),
//!     Participant::new("Dwight"),
//!     Participant::new("Angela"),
//! ])
//! .unwrap();
//!
//! let mut engine = EngineBuilder::new()
//!     .retry_policy(RetryPolicy::Bounded(1_000))
//!     .seed(7)
//!     .build();
//!
//! let assignments = engine.generate(&roster).unwrap();
//! assert_eq!(assignments.len(), 4);
//! assert!(validate_assignments(&roster, &assignments).is_ok());
//! ```

pub mod draw;

pub use draw::{classify, DeadEnd, DrawOutcome};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::constraints::{
    check_feasibility, default_constraints, first_violation, validate_assignments, Constraint,
};
use crate::context::AttemptContext;
use crate::error::EngineError;
use crate::roster::{AssignmentSet, Participant, Roster};
use crate::state::{Counters, Statistics};

/// Attempt budget used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// How many attempts `generate` may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Give up with [`EngineError::NoValidAssignment`] after this many attempts.
    Bounded(u32),

    /// Keep trying forever. Never returns on an unsatisfiable roster that
    /// slips past the feasibility check.
    Unbounded,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Bounded(DEFAULT_MAX_ATTEMPTS)
    }
}

impl RetryPolicy {
    fn allows(&self, attempts_made: u64) -> bool {
        match self {
            RetryPolicy::Bounded(max) => attempts_made < u64::from(*max),
            RetryPolicy::Unbounded => true,
        }
    }
}

/// Builder for [`AssignmentEngine`].
///
/// Starts with the three standard rules, the default retry budget, an
/// entropy-seeded random source and the feasibility check enabled.
#[derive(Debug)]
pub struct EngineBuilder {
    constraints: Vec<Box<dyn Constraint>>,
    retry_policy: RetryPolicy,
    seed: Option<u64>,
    precheck: bool,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            constraints: default_constraints(),
            retry_policy: RetryPolicy::default(),
            seed: None,
            precheck: true,
        }
    }

    /// Add a rule after the standard ones.
    pub fn constraint(mut self, constraint: Box<dyn Constraint>) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Seed the random source for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable the feasibility check before the first attempt.
    pub fn precheck(mut self, precheck: bool) -> Self {
        self.precheck = precheck;
        self
    }

    pub fn build(self) -> AssignmentEngine {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AssignmentEngine {
            constraints: self.constraints,
            retry_policy: self.retry_policy,
            precheck: self.precheck,
            rng,
            statistics: Statistics::new(),
            last_attempts: 0,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces assignment sets for a roster.
///
/// One random source serves every attempt and every draw of the engine's
/// lifetime.
pub struct AssignmentEngine {
    constraints: Vec<Box<dyn Constraint>>,
    retry_policy: RetryPolicy,
    precheck: bool,
    rng: StdRng,

    /// Accumulated across calls to `generate`.
    statistics: Statistics,

    /// Attempts used by the most recent `generate`.
    last_attempts: u64,
}

impl AssignmentEngine {
    /// Engine with default settings.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Generate a complete, valid assignment set for `roster`.
    ///
    /// The roster is not modified. On success the result has one assignment
    /// per participant, in roster order, and passes
    /// [`validate_assignments`].
    pub fn generate(&mut self, roster: &Roster) -> Result<AssignmentSet, EngineError> {
        self.last_attempts = 0;

        if self.precheck {
            if let Err(infeasible) = check_feasibility(roster) {
                warn!(%infeasible, "Roster rejected before any attempt");
                return Err(EngineError::Infeasible(infeasible));
            }
        }

        while self.retry_policy.allows(self.last_attempts) {
            self.last_attempts = self.last_attempts.saturating_add(1);
            self.statistics.increment_counter(Counters::Attempts);

            match self.attempt(roster) {
                Ok(assignments) => {
                    debug!(attempt = self.last_attempts, "Attempt was successful");
                    self.statistics
                        .increment_counter(Counters::SuccessfulAttempts);
                    validate_assignments(roster, &assignments)
                        .map_err(EngineError::InvalidResult)?;
                    info!(
                        attempts = self.last_attempts,
                        participants = roster.len(),
                        "Assignments generated"
                    );
                    return Ok(assignments);
                }
                Err(dead_end) => {
                    debug!(attempt = self.last_attempts, %dead_end, "Attempt was unsuccessful");
                    self.record_dead_end(&dead_end);
                }
            }
        }

        warn!(attempts = self.last_attempts, "Retry budget exhausted");
        Err(EngineError::NoValidAssignment {
            attempts: self.last_attempts,
        })
    }

    /// Run one attempt from a fresh pool.
    pub fn attempt(&mut self, roster: &Roster) -> Result<AssignmentSet, DeadEnd> {
        let mut ctx = AttemptContext::new(roster);

        for giver in roster.participants() {
            let slot = self.pick(&ctx, giver)?;
            ctx.commit(giver, slot);
        }

        debug_assert!(ctx.is_complete());
        Ok(ctx.into_assignments())
    }

    /// Draw recipients for `giver` until one is accepted or the attempt dead-ends.
    ///
    /// Returns the accepted pool slot.
    fn pick(&mut self, ctx: &AttemptContext<'_>, giver: &Participant) -> Result<usize, DeadEnd> {
        let pool_len = ctx.pool_len();
        let mut rejected = vec![false; pool_len];
        let mut rejected_count = 0;

        loop {
            let slot = self.rng.gen_range(0..pool_len);
            let candidate = ctx.candidate(slot);
            self.statistics.increment_counter(Counters::Draws);

            let (rule, violation) = match first_violation(
                &self.constraints,
                ctx.roster(),
                &giver.name,
                &candidate.name,
                ctx.committed(),
            ) {
                Some((constraint, violation)) => (Some(constraint.name()), Some(violation)),
                None => (None, None),
            };

            match classify(pool_len, &giver.name, &candidate.name, violation) {
                DrawOutcome::Accept => {
                    trace!(giver = %giver.name, recipient = %candidate.name, "Accepted");
                    return Ok(slot);
                }
                DrawOutcome::DeadEnd(dead_end) => {
                    trace!(rule = rule.unwrap_or_default(), %dead_end, "Dead-end");
                    return Err(dead_end);
                }
                DrawOutcome::Resample(violation) => {
                    trace!(rule = rule.unwrap_or_default(), %violation, "Resampling");
                    self.statistics.increment_counter(Counters::Resamples);
                    self.statistics.record_violation(&violation);

                    if !rejected[slot] {
                        rejected[slot] = true;
                        rejected_count += 1;
                    }
                    if rejected_count == pool_len {
                        return Err(DeadEnd::PoolExhausted {
                            giver: giver.name.clone(),
                        });
                    }
                }
            }
        }
    }

    fn record_dead_end(&mut self, dead_end: &DeadEnd) {
        let counter = match dead_end {
            DeadEnd::OnlySelfLeft { .. } => Counters::DeadEndOnlySelfLeft,
            DeadEnd::FewCandidates(violation) => {
                self.statistics.record_violation(violation);
                Counters::DeadEndFewCandidates
            }
            DeadEnd::PoolExhausted { .. } => Counters::DeadEndPoolExhausted,
        };
        self.statistics.increment_counter(counter);
    }

    /// Counters accumulated over this engine's lifetime.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Attempts made by the most recent call to `generate`.
    pub fn last_attempts(&self) -> u64 {
        self.last_attempts
    }
}

impl Default for AssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate assignments for `roster` with a default engine.
pub fn generate(roster: &Roster) -> Result<AssignmentSet, EngineError> {
    AssignmentEngine::new().generate(roster)
}
