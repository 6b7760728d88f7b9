// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraints on assignments.
//!
//! # Organization
//!
//! - `rules`: the [`Constraint`] trait and the three pairing rules applied
//!   on every draw
//! - `validation`: whole-set checks, run on every result before it is returned
//! - `feasibility`: cheap necessary conditions checked before any attempt
//! - `errors`: the [`Violation`] taxonomy

mod errors;
pub mod feasibility;
pub mod rules;
pub mod validation;

pub use errors::Violation;
pub use feasibility::{check_feasibility, Infeasible};
pub use rules::{
    default_constraints, first_violation, Constraint, NoMutualPair, NoSelfAssignment,
    NotExcludedPartner,
};
pub use validation::{all_violations, validate_assignments};
