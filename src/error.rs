//! Error type shared by the grid, the stepping rule, and the trial engine.

use thiserror::Error;

use crate::grid::OccupantCount;

/// Errors raised while simulating.
///
/// `OutOfBounds` and `Corruption` indicate defects in the stepping arithmetic
/// and should never surface from a correct build; they are still checked.
#[derive(Debug, Error)]
pub enum SimError {
    /// A coordinate fell outside `[0, size)` on either axis.
    #[error("position [{x};{y}] is out of bounds for a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// A stored occupant count went negative.
    #[error("the count at [{x};{y}] has been corrupted: {count} is < 0")]
    Corruption {
        x: i32,
        y: i32,
        count: OccupantCount,
    },

    /// The engine was configured with values it cannot simulate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SimError>;
