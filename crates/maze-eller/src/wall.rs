//! Walls between two adjacent cells, seen from the row-by-row builder.
//!
//! A row is a fixed `x`. A [`WallKind::WithinRow`] wall separates two
//! row-mates `(x, y)` and `(x, y + 1)`; a [`WallKind::AcrossRow`] wall
//! separates `(x, y)` from `(x + 1, y)` in the next row.

use std::fmt;

use maze_core::{Direction, Floorplan, Point, Wallboard};

use crate::error::EllerError;

/// Orientation of a wall relative to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    WithinRow,
    AcrossRow,
}

impl WallKind {
    /// Direction leading from the back cell to the forth cell.
    #[inline]
    pub const fn forward(self) -> Direction {
        match self {
            Self::WithinRow => Direction::South,
            Self::AcrossRow => Direction::East,
        }
    }
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinRow => f.write_str("within-row"),
            Self::AcrossRow => f.write_str("across-row"),
        }
    }
}

/// A wall joining two adjacent cells: `forth` is one step forward from
/// `back` along the orientation's axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    kind: WallKind,
    back: Point,
    forth: Point,
}

impl Wall {
    /// Build a wall of the given orientation.
    ///
    /// Fails unless `forth` is exactly `back` plus one step forward.
    pub fn new(kind: WallKind, back: Point, forth: Point) -> Result<Self, EllerError> {
        if back.step(kind.forward()) != forth {
            return Err(EllerError::NotAdjacent { kind, back, forth });
        }
        Ok(Self { kind, back, forth })
    }

    pub fn within_row(back: Point, forth: Point) -> Result<Self, EllerError> {
        Self::new(WallKind::WithinRow, back, forth)
    }

    pub fn across_row(back: Point, forth: Point) -> Result<Self, EllerError> {
        Self::new(WallKind::AcrossRow, back, forth)
    }

    /// The wall separating two adjacent cells given in any order.
    pub fn between(a: Point, b: Point) -> Result<Self, EllerError> {
        let (back, forth) = if a <= b { (a, b) } else { (b, a) };
        let kind = if back.x == forth.x {
            WallKind::WithinRow
        } else {
            WallKind::AcrossRow
        };
        Self::new(kind, back, forth)
    }

    #[inline]
    pub fn kind(&self) -> WallKind {
        self.kind
    }

    #[inline]
    pub fn back_cell(&self) -> Point {
        self.back
    }

    #[inline]
    pub fn forth_cell(&self) -> Point {
        self.forth
    }

    /// The floorplan reference for this wall.
    #[inline]
    pub fn wallboard(&self) -> Wallboard {
        Wallboard::new(self.back, self.kind.forward())
    }

    /// Whether the wall lies on the outer boundary of `floorplan`.
    #[inline]
    pub fn is_border(&self, floorplan: &Floorplan) -> bool {
        floorplan.is_part_of_border(self.wallboard())
    }

    /// Whether the wall is still standing in `floorplan`.
    #[inline]
    pub fn is_standing(&self, floorplan: &Floorplan) -> bool {
        floorplan.has_wall(self.back, self.kind.forward())
    }

    /// Take the wall down.
    #[inline]
    pub fn remove(&self, floorplan: &mut Floorplan) {
        floorplan.delete_wallboard(self.wallboard());
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wall {}|{}", self.kind, self.back, self.forth)
    }
}
