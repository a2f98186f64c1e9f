//! Random room placement on a fresh floorplan.

use log::debug;
use maze_core::{Floorplan, Point, Range};

use crate::random::RandomSource;

/// Candidate rooms tried per requested room.
const TRIES_PER_ROOM: usize = 4;

/// Place up to `count` rooms on `floorplan`.
///
/// Side lengths are drawn from `size` (inclusive, clamped to the grid).
/// A candidate overlapping or touching an earlier room is rejected. Returns
/// the rooms actually placed, in placement order.
pub fn place_rooms(
    floorplan: &mut Floorplan,
    random: &mut impl RandomSource,
    count: usize,
    size: (i32, i32),
) -> Vec<Range> {
    let mut placed: Vec<Range> = Vec::with_capacity(count);
    let (min, max) = size;
    let max_w = max.min(floorplan.width());
    let max_h = max.min(floorplan.height());
    if count == 0 || min > max_w || min > max_h {
        return placed;
    }

    for _ in 0..count * TRIES_PER_ROOM {
        if placed.len() == count {
            break;
        }
        let w = random.next_int_in_range(min, max_w);
        let h = random.next_int_in_range(min, max_h);
        let origin = Point::new(
            random.next_int_in_range(0, floorplan.width() - w),
            random.next_int_in_range(0, floorplan.height() - h),
        );
        let candidate = Range::sized(origin, w, h);
        if placed.iter().any(|r| r.grow(1).overlaps(candidate)) {
            continue;
        }
        floorplan.mark_room(candidate);
        placed.push(candidate);
    }
    debug!("placed {} of {count} rooms", placed.len());
    placed
}
