// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters for one engine, accumulated across every `generate` call.
//! Rule violations seen while drawing are counted per kind, after the fixed
//! counters.

use std::fmt;

use crate::constraints::Violation;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Attempts,
    SuccessfulAttempts,
    Draws,
    Resamples,
    DeadEndOnlySelfLeft,
    DeadEndFewCandidates,
    DeadEndPoolExhausted,
}

const COUNT: usize = Counters::COUNT + Violation::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one rejected draw of this kind.
    pub(crate) fn record_violation(&mut self, violation: &Violation) {
        self.stats[Counters::COUNT + violation.ordinal()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total attempts that ended in a dead-end.
    pub fn dead_ends(&self) -> u64 {
        self.get(Counters::DeadEndOnlySelfLeft)
            + self.get(Counters::DeadEndFewCandidates)
            + self.get(Counters::DeadEndPoolExhausted)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempt(s), {} successful, {} dead-end(s), {} draw(s), {} resample(s)",
            self.get(Counters::Attempts),
            self.get(Counters::SuccessfulAttempts),
            self.dead_ends(),
            self.get(Counters::Draws),
            self.get(Counters::Resamples),
        )
    }
}
