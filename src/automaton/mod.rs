//! Core random-walk logic.
//!
//! This module contains the stepping rule and single-trial execution.
//! The engine in `engine.rs` runs trials from here across workers.

pub mod stepping;
pub mod trial;

pub use stepping::{jump_from, step};
pub use trial::{run_trial, TrialParams};
