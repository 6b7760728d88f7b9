// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types surfaced to callers.
//!
//! Failures inside a single attempt ([`crate::engine::DeadEnd`]) are recovered
//! by the engine and never appear here.

use std::path::PathBuf;

use thiserror::Error;

use crate::constraints::{Infeasible, Violation};

/// The participant list cannot form a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("roster is empty")]
    Empty,

    #[error("participant at position {position} has a blank name")]
    BlankName { position: usize },

    #[error("participant {0:?} appears more than once")]
    DuplicateName(String),

    #[error("participant {0:?} names themselves as excluded partner")]
    SelfExclusion(String),

    #[error("participant {participant:?} names unknown partner {partner:?}")]
    UnknownPartner { participant: String, partner: String },
}

/// The engine could not produce an assignment set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rejected before any attempt was made.
    #[error("no valid assignment exists: {0}")]
    Infeasible(#[from] Infeasible),

    /// The retry budget ran out.
    #[error("no valid assignment found after {attempts} attempts")]
    NoValidAssignment { attempts: u64 },

    /// An attempt reported success but the result broke an invariant.
    #[error("generated assignment failed validation: {0}")]
    InvalidResult(Violation),
}

/// The roster file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read roster file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse roster file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Roster(#[from] RosterError),
}
