// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run state that outlives a single attempt.

pub mod statistics;

pub use statistics::{Counters, Statistics};
