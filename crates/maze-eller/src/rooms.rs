//! Room discovery: seeding the registry before the rows are processed.
//!
//! Ordinary cells each get their own positive set. Room cells are grouped
//! by flood fill into one negative set per room, and the room's walls to
//! the rest of the maze are recorded for the repair pass.

use std::collections::BTreeMap;

use log::debug;
use maze_core::{Direction, Floorplan, Point, Wallboard};

use crate::cellsets::{CellSets, SetId};
use crate::error::EllerError;
use crate::wall::Wall;

/// Room set id → the room's non-border boundary walls.
#[derive(Debug, Clone, Default)]
pub struct RoomWalls {
    walls: BTreeMap<SetId, Vec<Wall>>,
}

impl RoomWalls {
    pub fn get(&self, id: SetId) -> Option<&[Wall]> {
        self.walls.get(&id).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, id: SetId) -> Option<&mut Vec<Wall>> {
        self.walls.get_mut(&id)
    }

    /// Number of rooms recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = SetId> + '_ {
        self.walls.keys().copied()
    }
}

/// Assign every cell of `floorplan` its initial set in `sets`.
///
/// `sets` must be fresh (all cells pending) and sized like the floorplan.
/// With `ignore_rooms` every cell, room or not, starts as its own ordinary
/// set and no room walls are recorded.
pub fn discover_rooms(
    floorplan: &Floorplan,
    sets: &mut CellSets,
    ignore_rooms: bool,
) -> Result<RoomWalls, EllerError> {
    let mut next_id = 1;
    let mut pending = Vec::new();
    for p in floorplan.bounds() {
        if !ignore_rooms && floorplan.is_in_room(p) {
            pending.push(p);
        } else {
            sets.assign(p, SetId(next_id));
            next_id += 1;
        }
    }

    let mut rooms = RoomWalls::default();
    let mut room_id = -1;
    for start in pending {
        if !sets.value_of(start).is_pending() {
            continue;
        }
        let id = SetId(room_id);
        room_id -= 1;

        let mut cells = flood_room(floorplan, sets, start, id);
        cells.sort();
        let walls = boundary_walls(floorplan, &cells)?;
        debug!("room {id}: {} cells, {} boundary walls", cells.len(), walls.len());
        rooms.walls.insert(id, walls);
    }
    Ok(rooms)
}

/// Claim for `id` every pending cell reachable from `start` without
/// crossing a wall.
fn flood_room(floorplan: &Floorplan, sets: &mut CellSets, start: Point, id: SetId) -> Vec<Point> {
    let mut cells = vec![start];
    let mut stack = vec![start];
    sets.assign(start, id);
    while let Some(p) = stack.pop() {
        for dir in Direction::ALL {
            let q = p.step(dir);
            if !floorplan.contains(q) || floorplan.has_wall(p, dir) {
                continue;
            }
            if sets.value_of(q).is_pending() {
                sets.assign(q, id);
                cells.push(q);
                stack.push(q);
            }
        }
    }
    cells
}

/// The standing, non-border walls enclosing `cells`.
fn boundary_walls(floorplan: &Floorplan, cells: &[Point]) -> Result<Vec<Wall>, EllerError> {
    let mut walls = Vec::new();
    for &p in cells {
        for dir in Direction::ALL {
            let wb = Wallboard::new(p, dir);
            if floorplan.has_wall(p, dir) && !floorplan.is_part_of_border(wb) {
                walls.push(Wall::between(p, wb.neighbor())?);
            }
        }
    }
    Ok(walls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Range;

    fn discover(fp: &Floorplan) -> (CellSets, RoomWalls) {
        let mut sets = CellSets::new(fp.width(), fp.height());
        let rooms = discover_rooms(fp, &mut sets, false).unwrap();
        (sets, rooms)
    }

    #[test]
    fn no_rooms_gives_singletons() {
        let fp = Floorplan::new(3, 4);
        let (sets, rooms) = discover(&fp);
        assert!(rooms.is_empty());
        assert_eq!(sets.len(), 12);
        assert_eq!(sets.value_of(Point::new(0, 0)), SetId(1));
        assert_eq!(sets.value_of(Point::new(0, 3)), SetId(4));
        assert_eq!(sets.value_of(Point::new(2, 3)), SetId(12));
        assert!(sets.is_partition());
    }

    #[test]
    fn two_rooms_get_their_own_ids_and_walls() {
        let mut fp = Floorplan::new(10, 8);
        let a = fp.mark_room(Range::sized(Point::new(1, 1), 2, 3));
        // Touches the border along y = 0 and x = 9.
        let b = fp.mark_room(Range::sized(Point::new(6, 0), 4, 2));
        let (sets, rooms) = discover(&fp);

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.ids().collect::<Vec<_>>(), vec![SetId(-2), SetId(-1)]);
        assert_eq!(sets.members(SetId(-1)).map(<[Point]>::len), Some(a.len()));
        assert_eq!(sets.members(SetId(-2)).map(<[Point]>::len), Some(b.len()));
        assert!(sets.is_partition());
        assert_eq!(sets.len(), 80 - 6 - 8 + 2);

        let walls_a = rooms.get(SetId(-1)).unwrap();
        assert_eq!(walls_a.len(), a.perimeter());
        for w in walls_a {
            assert!(a.contains(w.back_cell()) != a.contains(w.forth_cell()));
        }

        // Room b loses its 4 top edges and 2 edges at the far row.
        let walls_b = rooms.get(SetId(-2)).unwrap();
        assert_eq!(walls_b.len(), b.perimeter() - 4 - 2);
        assert!(walls_b.iter().all(|w| !w.is_border(&fp)));
    }

    #[test]
    fn ordinary_ids_skip_room_cells() {
        let mut fp = Floorplan::new(1, 4);
        fp.mark_room(Range::sized(Point::new(0, 1), 1, 2));
        let (sets, rooms) = discover(&fp);
        assert_eq!(sets.value_of(Point::new(0, 0)), SetId(1));
        assert_eq!(sets.value_of(Point::new(0, 1)), SetId(-1));
        assert_eq!(sets.value_of(Point::new(0, 2)), SetId(-1));
        assert_eq!(sets.value_of(Point::new(0, 3)), SetId(2));
        // Within a single row the room only borders its two row-mates.
        assert_eq!(rooms.get(SetId(-1)).map(<[Wall]>::len), Some(2));
    }

    #[test]
    fn ignored_rooms_are_plain_cells() {
        let mut fp = Floorplan::new(4, 4);
        fp.mark_room(Range::sized(Point::new(1, 1), 2, 2));
        let mut sets = CellSets::new(4, 4);
        let rooms = discover_rooms(&fp, &mut sets, true).unwrap();
        assert!(rooms.is_empty());
        assert_eq!(sets.len(), 16);
        assert!(sets.room_ids().is_empty());
        assert_eq!(sets.value_of(Point::new(1, 1)), SetId(6));
        assert!(sets.is_partition());
    }
}
