//! Geometry primitives: [`Point`], [`Range`] and [`Direction`].
//!
//! The maze grid is addressed with `x` as the primary axis (one *row* per
//! `x` value) and `y` as the secondary axis running along a row.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring point one step in direction `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

// Points order row by row: first by `x` (the row), then by `y`.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// The four cardinal directions of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +x, towards the next row.
    East,
    /// -x, towards the previous row.
    West,
    /// -y
    North,
    /// +y
    South,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::East => Self::West,
            Self::West => Self::East,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }

    /// Unit coordinate delta of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::East => Point::new(1, 0),
            Self::West => Point::new(-1, 0),
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
        }
    }

    /// The direction leading from `from` to the adjacent point `to`, if
    /// the two points are exactly one cardinal step apart.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|dir| dir.delta() == d)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "east",
            Self::West => "west",
            Self::North => "north",
            Self::South => "south",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range of the given size anchored at `origin`.
    #[inline]
    pub fn sized(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Width of the range (extent along `x`).
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range (extent along `y`).
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two ranges. Disjoint ranges yield the empty range.
    #[inline]
    pub fn intersect(self, other: Range) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Whether the two ranges share at least one cell.
    #[inline]
    pub fn overlaps(self, other: Range) -> bool {
        !self.intersect(other).is_empty()
    }

    /// The range grown by `margin` cells on every side.
    #[inline]
    pub fn grow(self, margin: i32) -> Self {
        Self {
            min: self.min.shift(-margin, -margin),
            max: self.max.shift(margin, margin),
        }
    }

    /// Number of unit edges on the perimeter of the range.
    #[inline]
    pub fn perimeter(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        2 * (self.width() as usize + self.height() as usize)
    }

    /// Row-by-row iterator over every point: `x` outer, `y` inner.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Iterator over the points in a [`Range`], one row (fixed `x`) at a time.
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.x >= self.range.max.x {
            return None;
        }
        let p = self.cur;
        self.cur.y += 1;
        if self.cur.y >= self.range.max.y {
            self.cur.y = self.range.min.y;
            self.cur.x += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.x >= self.range.max.x {
            return (0, Some(0));
        }
        let h = self.range.height() as usize;
        let remaining_in_row = (self.range.max.y - self.cur.y) as usize;
        let remaining_rows = (self.range.max.x - self.cur.x - 1) as usize;
        let total = remaining_in_row + remaining_rows * h;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
