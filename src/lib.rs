// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Secret-santa assignment.
//!
//! Every member of a group is made the gift-giver ("Santa") for exactly one
//! other member, so that:
//! - nobody is their own Santa
//! - nobody is paired with their declared partner, in either direction
//! - no two people are Santa for each other
//!
//! # Architecture
//!
//! - [`roster`]: validated, immutable input ([`Roster`], [`Participant`])
//! - [`constraints`]: the pairing rules, whole-set validation, and a
//!   feasibility check run before any attempt
//! - [`context`]: the mutable state of one attempt
//! - [`engine`]: randomized generate-and-test with whole-attempt restarts,
//!   bounded by a [`RetryPolicy`]
//! - [`state`]: run statistics
//! - [`render`]: text and JSON output
//! - [`config`]: roster files and the built-in roster
//!
//! # Example
//!
//! ```
//! use santa_picker::{config, EngineBuilder};
//!
//! let roster = config::default_roster();
//! let mut engine = EngineBuilder::new().seed(2025).build();
//! let assignments = engine.generate(&roster).unwrap();
//! assert_eq!(assignments.len(), roster.len());
//! ```

pub mod config;
pub mod constraints;
pub mod context;
pub mod engine;
pub mod error;
pub mod render;
pub mod roster;
pub mod state;

// Re-export commonly used types
pub use engine::{generate, AssignmentEngine, EngineBuilder, RetryPolicy};
pub use error::{ConfigError, EngineError, RosterError};
pub use roster::{Assignment, AssignmentSet, Participant, Roster};
