//! Flea Sim - Monte Carlo random walks on a square grid
//!
//! Estimates the expected number of empty cells after every occupant of an
//! `S×S` grid jumps to an adjacent cell `N` times. Trials run in parallel
//! batches and their empty-cell counts are averaged.
//!
//! The library is usable from Rust directly (`TrialEngine`) and exposes a
//! C ABI in `ffi` for hosts in other languages.

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod grid;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{CancellationToken, Estimate, TrialEngine};
pub use error::{Result, SimError};
pub use grid::{OccupancyGrid, OccupantCount};
