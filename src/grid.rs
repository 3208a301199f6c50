//! Square occupancy grid with bounds-checked cell access.

use crate::error::{Result, SimError};

/// Number of occupants in a single cell.
///
/// Signed so that a negative value can be detected as corruption rather than
/// wrapping silently.
pub type OccupantCount = i32;

/// Whether an `S×S` grid has few enough cells to index with `i32` coordinates.
pub fn cell_count_fits(size: usize) -> bool {
    size.checked_mul(size).is_some_and(|cells| cells <= i32::MAX as usize)
}

/// An `S×S` board of occupant counts, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    size: usize,
    cells: Vec<OccupantCount>,
}

impl OccupancyGrid {
    /// Build a grid where every cell holds `init_count` occupants.
    pub fn filled(size: usize, init_count: OccupantCount) -> Result<Self> {
        if size == 0 {
            return Err(SimError::InvalidConfig(
                "grid size must be greater than zero".to_string(),
            ));
        }
        if !cell_count_fits(size) {
            return Err(SimError::InvalidConfig(format!(
                "grid size {size} has more cells than a grid can index"
            )));
        }
        if init_count < 0 {
            return Err(SimError::InvalidConfig(format!(
                "initial occupant count must be non-negative, got {init_count}"
            )));
        }

        Ok(OccupancyGrid {
            size,
            cells: vec![init_count; size * size],
        })
    }

    /// Build a grid with no occupants.
    pub fn empty(size: usize) -> Result<Self> {
        Self::filled(size, 0)
    }

    /// An empty grid with the same dimensions as `other`.
    pub fn empty_like(other: &OccupancyGrid) -> Self {
        OccupancyGrid {
            size: other.size,
            cells: vec![0; other.cells.len()],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.size && y >= 0 && (y as usize) < self.size
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(SimError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y as usize * self.size + x as usize)
    }

    /// Add one occupant to the cell at `(x, y)`.
    pub fn increment_at(&mut self, x: i32, y: i32) -> Result<()> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] += 1;
        Ok(())
    }

    /// Occupant count at `(x, y)`.
    pub fn count_at(&self, x: i32, y: i32) -> Result<OccupantCount> {
        let idx = self.index_of(x, y)?;
        let count = self.cells[idx];
        if count < 0 {
            return Err(SimError::Corruption { x, y, count });
        }
        Ok(count)
    }

    /// Every `(x, y)` coordinate of the grid, row by row.
    ///
    /// Each call starts a fresh traversal.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    /// Number of cells holding zero occupants.
    pub fn empty_cells(&self) -> Result<usize> {
        let mut empty = 0;
        for (x, y) in self.cells() {
            if self.count_at(x, y)? == 0 {
                empty += 1;
            }
        }
        Ok(empty)
    }

    /// Sum of all occupant counts.
    pub fn total_occupants(&self) -> i64 {
        self.cells.iter().map(|&c| c as i64).sum()
    }
}
