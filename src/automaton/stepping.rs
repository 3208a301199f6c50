//! Synchronous random-walk step over an occupancy grid.

use rand::Rng;

use crate::error::Result;
use crate::grid::OccupancyGrid;

/// Fair coin.
#[inline]
fn flip_coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random::<bool>()
}

/// Destination index along one axis for an occupant at `pos`.
///
/// The lower edge always moves to 1 and the upper edge always moves to
/// `size - 2`; interior positions move one step either way on a fair coin.
#[inline]
pub fn jump_from<R: Rng + ?Sized>(pos: i32, size: i32, rng: &mut R) -> i32 {
    if pos == 0 {
        pos + 1
    } else if pos == size - 1 {
        pos - 1
    } else if flip_coin(rng) {
        pos + 1
    } else {
        pos - 1
    }
}

/// Advance every occupant of `source` by one jump and return the new grid.
///
/// Rules:
/// - Each occupant moves independently
/// - A fair coin picks the horizontal or vertical axis
/// - [`jump_from`] picks the destination on that axis; the other coordinate is kept
///
/// `source` is only read; all writes land in a freshly allocated grid.
pub fn step<R: Rng + ?Sized>(source: &OccupancyGrid, rng: &mut R) -> Result<OccupancyGrid> {
    let size = source.size() as i32;
    let mut next = OccupancyGrid::empty_like(source);

    for (x, y) in source.cells() {
        let occupants = source.count_at(x, y)?;
        for _ in 0..occupants {
            let (mut dst_x, mut dst_y) = (x, y);
            if flip_coin(rng) {
                dst_x = jump_from(x, size, rng);
            } else {
                dst_y = jump_from(y, size, rng);
            }
            next.increment_at(dst_x, dst_y)?;
        }
    }

    debug_assert_eq!(source.total_occupants(), next.total_occupants());
    Ok(next)
}
