//! The [`Floorplan`]: a grid of wall flags.
//!
//! Every cell carries a [`WallMask`] with one bit per [`Direction`]. A wall
//! between two cells is stored on both of them and is always added or
//! removed as a pair, so the two faces never disagree. Cells can also be
//! flagged as part of a *room*: an area with no internal walls.

use bitflags::bitflags;

use crate::geom::{Direction, Point, Range};

bitflags! {
    /// Walls standing around one cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WallMask: u8 {
        const EAST = 0b0001;
        const WEST = 0b0010;
        const NORTH = 0b0100;
        const SOUTH = 0b1000;
    }
}

impl From<Direction> for WallMask {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::East => WallMask::EAST,
            Direction::West => WallMask::WEST,
            Direction::North => WallMask::NORTH,
            Direction::South => WallMask::SOUTH,
        }
    }
}

/// Reference to one wall: the side `dir` of `cell`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Wallboard {
    pub cell: Point,
    pub dir: Direction,
}

impl Wallboard {
    pub const fn new(cell: Point, dir: Direction) -> Self {
        Self { cell, dir }
    }

    /// The cell on the other side of the wall (may lie outside the grid).
    #[inline]
    pub fn neighbor(self) -> Point {
        self.cell.step(self.dir)
    }
}

/// Wall layout of a `width` × `height` maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floorplan {
    width: i32,
    height: i32,
    walls: Vec<WallMask>,
    rooms: Vec<bool>,
}

impl Floorplan {
    /// A floorplan with every wall standing and no rooms.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            walls: vec![WallMask::all(); n],
            rooms: vec![false; n],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covering every cell.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.x as usize) * (self.height as usize) + (p.y as usize))
        } else {
            None
        }
    }

    /// Walls standing around `p`; empty outside the grid.
    pub fn walls_at(&self, p: Point) -> WallMask {
        self.index(p).map_or(WallMask::empty(), |i| self.walls[i])
    }

    /// Whether the wall on side `dir` of cell `p` is standing.
    #[inline]
    pub fn has_wall(&self, p: Point, dir: Direction) -> bool {
        self.walls_at(p).contains(dir.into())
    }

    /// Whether cell `p` is inside the grid and open on side `dir`.
    #[inline]
    pub fn has_no_wall(&self, p: Point, dir: Direction) -> bool {
        self.contains(p) && !self.has_wall(p, dir)
    }

    /// Whether the wall sits on the outer boundary of the grid.
    #[inline]
    pub fn is_part_of_border(&self, wb: Wallboard) -> bool {
        self.contains(wb.cell) != self.contains(wb.neighbor())
    }

    /// Remove the wall on both of its faces.
    pub fn delete_wallboard(&mut self, wb: Wallboard) {
        self.set_wall(wb, false);
    }

    /// Put the wall back on both of its faces.
    pub fn add_wallboard(&mut self, wb: Wallboard) {
        self.set_wall(wb, true);
    }

    fn set_wall(&mut self, wb: Wallboard, standing: bool) {
        if let Some(i) = self.index(wb.cell) {
            self.walls[i].set(wb.dir.into(), standing);
        }
        if let Some(i) = self.index(wb.neighbor()) {
            self.walls[i].set(wb.dir.opposite().into(), standing);
        }
    }

    /// Whether cell `p` belongs to a room.
    #[inline]
    pub fn is_in_room(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.rooms[i])
    }

    /// Turn `area` (clipped to the grid) into a room: its cells are flagged,
    /// walls between two of its cells are removed and every wall on its
    /// perimeter is raised.
    ///
    /// Returns the clipped area.
    pub fn mark_room(&mut self, area: Range) -> Range {
        let area = area.intersect(self.bounds());
        for p in area {
            if let Some(i) = self.index(p) {
                self.rooms[i] = true;
            }
            for dir in Direction::ALL {
                let wb = Wallboard::new(p, dir);
                self.set_wall(wb, !area.contains(wb.neighbor()));
            }
        }
        area
    }

    /// Number of interior walls currently removed. Each wall is counted
    /// once; border openings are not included.
    pub fn count_open_walls(&self) -> usize {
        self.bounds()
            .iter()
            .flat_map(|p| [Direction::East, Direction::South].map(|d| Wallboard::new(p, d)))
            .filter(|wb| self.contains(wb.neighbor()) && !self.has_wall(wb.cell, wb.dir))
            .count()
    }

    /// Number of interior walls in a grid of this size.
    pub fn interior_wall_count(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        w.saturating_sub(1) * h + w * h.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_floorplan_is_fully_walled() {
        let fp = Floorplan::new(3, 4);
        assert_eq!(fp.width(), 3);
        assert_eq!(fp.height(), 4);
        for p in fp.bounds() {
            for d in Direction::ALL {
                assert!(fp.has_wall(p, d));
            }
            assert!(!fp.is_in_room(p));
        }
        assert_eq!(fp.count_open_walls(), 0);
        assert_eq!(fp.interior_wall_count(), 2 * 4 + 3 * 3);
    }

    #[test]
    fn delete_removes_both_faces() {
        let mut fp = Floorplan::new(3, 3);
        let p = Point::new(1, 1);
        fp.delete_wallboard(Wallboard::new(p, Direction::East));
        assert!(fp.has_no_wall(p, Direction::East));
        assert!(fp.has_no_wall(Point::new(2, 1), Direction::West));
        assert!(fp.has_wall(p, Direction::West));
        assert_eq!(fp.count_open_walls(), 1);

        fp.add_wallboard(Wallboard::new(Point::new(2, 1), Direction::West));
        assert!(fp.has_wall(p, Direction::East));
    }

    #[test]
    fn border_detection() {
        let fp = Floorplan::new(2, 2);
        assert!(fp.is_part_of_border(Wallboard::new(Point::new(0, 0), Direction::West)));
        assert!(fp.is_part_of_border(Wallboard::new(Point::new(0, 1), Direction::South)));
        assert!(!fp.is_part_of_border(Wallboard::new(Point::new(0, 0), Direction::East)));
        assert!(!fp.is_part_of_border(Wallboard::new(Point::new(1, 0), Direction::South)));
    }

    #[test]
    fn outside_cells_have_no_walls_and_no_rooms() {
        let fp = Floorplan::new(2, 2);
        assert!(!fp.has_wall(Point::new(-1, 0), Direction::East));
        assert!(!fp.has_no_wall(Point::new(5, 5), Direction::East));
        assert!(!fp.is_in_room(Point::new(2, 0)));
    }

    #[test]
    fn mark_room_clears_interior_keeps_perimeter() {
        let mut fp = Floorplan::new(6, 6);
        let room = fp.mark_room(Range::sized(Point::new(2, 2), 2, 3));
        assert_eq!(room.len(), 6);
        for p in room {
            assert!(fp.is_in_room(p));
        }
        assert!(!fp.is_in_room(Point::new(1, 2)));
        // 2x3 room: one column split (3 walls) and two row splits per column (4 walls).
        assert_eq!(fp.count_open_walls(), 7);
        assert!(fp.has_wall(Point::new(2, 2), Direction::West));
        assert!(fp.has_wall(Point::new(3, 4), Direction::South));
        assert!(fp.has_no_wall(Point::new(2, 2), Direction::East));
    }

    #[test]
    fn mark_room_is_clipped_to_grid() {
        let mut fp = Floorplan::new(4, 4);
        let room = fp.mark_room(Range::new(2, 2, 9, 9));
        assert_eq!(room, Range::new(2, 2, 4, 4));
        assert!(fp.has_wall(Point::new(3, 3), Direction::East));
        assert!(fp.has_no_wall(Point::new(2, 3), Direction::East));
    }
}
