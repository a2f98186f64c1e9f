//! The cell-set registry: a partition of the grid into connected groups.
//!
//! [`SetGrid`] gives every cell's current [`SetId`] in O(1); [`CellSets`]
//! pairs it with a map from each id to its member cells. The two are
//! updated in lockstep, so merging costs time proportional to the size of
//! the absorbed set.

use std::collections::HashMap;
use std::fmt;

use maze_core::{Point, Range};

use crate::error::EllerError;

/// Identifier of a set of connected cells.
///
/// Positive ids are ordinary sets, negative ids are rooms and zero marks a
/// cell that has not been assigned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SetId(pub i32);

impl SetId {
    /// Placeholder carried by unassigned cells.
    pub const PENDING: SetId = SetId(0);

    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_room(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_pending(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<SetId> for i32 {
    fn from(id: SetId) -> Self {
        id.0
    }
}

/// Decide which of two distinct ids survives a merge.
///
/// Returns `(receiver, absorbed)`. The smaller id receives, except that a
/// room never receives from an ordinary set.
pub fn receiving_order(a: SetId, b: SetId) -> (SetId, SetId) {
    match (a.is_room(), b.is_room()) {
        (true, false) => (b, a),
        (false, true) => (a, b),
        _ if a < b => (a, b),
        _ => (b, a),
    }
}

/// Per-cell set ids, one row (fixed `x`) after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetGrid {
    width: i32,
    height: i32,
    ids: Vec<SetId>,
}

impl SetGrid {
    /// A grid with every cell pending.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            ids: vec![SetId::PENDING; (width as usize) * (height as usize)],
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

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.x as usize) * (self.height as usize) + (p.y as usize))
        } else {
            None
        }
    }

    /// The id at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<SetId> {
        self.index(p).map(|i| self.ids[i])
    }

    /// Set the id at `p`. Does nothing outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, id: SetId) {
        if let Some(i) = self.index(p) {
            self.ids[i] = id;
        }
    }

    /// The ids of row `x`, in order of `y`.
    pub fn row(&self, x: i32) -> &[SetId] {
        if x < 0 || x >= self.width {
            return &[];
        }
        let h = self.height as usize;
        let start = (x as usize) * h;
        &self.ids[start..start + h]
    }

    /// Iterate over `(Point, SetId)` pairs, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, SetId)> + '_ {
        self.bounds().iter().zip(self.ids.iter().copied())
    }

    /// Number of distinct ids present.
    pub fn distinct(&self) -> usize {
        let mut ids = self.ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

/// The registry: set id → member cells, kept consistent with a [`SetGrid`].
#[derive(Debug, Clone)]
pub struct CellSets {
    grid: SetGrid,
    members: HashMap<SetId, Vec<Point>>,
}

impl CellSets {
    /// A registry with every cell pending and no sets.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid: SetGrid::new(width, height),
            members: HashMap::new(),
        }
    }

    /// Current set of cell `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<SetId> {
        self.grid.at(p)
    }

    /// Current set of cell `p`.
    ///
    /// # Panics
    ///
    /// If `p` lies outside the grid.
    #[inline]
    pub(crate) fn value_of(&self, p: Point) -> SetId {
        match self.grid.at(p) {
            Some(id) => id,
            None => panic!("cell {p} outside the {}x{} grid", self.grid.width, self.grid.height),
        }
    }

    /// Put cell `p` into set `id`, creating the set if needed.
    pub fn assign(&mut self, p: Point, id: SetId) {
        let old = self.value_of(p);
        if old == id {
            return;
        }
        if let Some(cells) = self.members.get_mut(&old) {
            cells.retain(|&c| c != p);
            if cells.is_empty() {
                self.members.remove(&old);
            }
        }
        self.grid.set(p, id);
        if !id.is_pending() {
            self.members.entry(id).or_default().push(p);
        }
    }

    /// Join the sets of `a` and `b`. Returns the id that now holds both.
    ///
    /// The two cells must currently belong to different sets; asking to
    /// merge a set with itself is a caller bug.
    pub fn merge(&mut self, a: Point, b: Point) -> Result<SetId, EllerError> {
        let (ia, ib) = (self.value_of(a), self.value_of(b));
        debug_assert_ne!(ia, ib, "merge of {a} and {b} within set {ia}");
        if ia == ib {
            return Err(EllerError::SameSet { a, b, id: ia });
        }
        let (receiver, absorbed) = receiving_order(ia, ib);
        let moved = self.members.remove(&absorbed).unwrap_or_default();
        for &p in &moved {
            self.grid.set(p, receiver);
        }
        self.members.entry(receiver).or_default().extend(moved);
        Ok(receiver)
    }

    /// Whether `a` and `b` are in the same set.
    #[inline]
    pub fn same_set(&self, a: Point, b: Point) -> bool {
        self.value_of(a) == self.value_of(b)
    }

    /// Member cells of set `id`.
    pub fn members(&self, id: SetId) -> Option<&[Point]> {
        self.members.get(&id).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, id: SetId) -> bool {
        self.members.contains_key(&id)
    }

    /// Number of sets.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn grid(&self) -> &SetGrid {
        &self.grid
    }

    #[inline]
    pub fn sets(&self) -> &HashMap<SetId, Vec<Point>> {
        &self.members
    }

    pub fn into_grid(self) -> SetGrid {
        self.grid
    }

    /// The sets present in row `x` with their cells in that row, in order
    /// of first appearance along the row.
    pub fn groups_in_row(&self, x: i32) -> Vec<(SetId, Vec<Point>)> {
        let mut groups: Vec<(SetId, Vec<Point>)> = Vec::new();
        let mut slot: HashMap<SetId, usize> = HashMap::new();
        for (y, &id) in self.grid.row(x).iter().enumerate() {
            let p = Point::new(x, y as i32);
            match slot.get(&id) {
                Some(&i) => groups[i].1.push(p),
                None => {
                    slot.insert(id, groups.len());
                    groups.push((id, vec![p]));
                }
            }
        }
        groups
    }

    /// Distinct room ids still present, in row-by-row scan order.
    pub fn room_ids(&self) -> Vec<SetId> {
        let mut ids: Vec<SetId> = Vec::new();
        for (_, id) in self.grid.iter() {
            if id.is_room() && !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Whether the grid and the registry describe the same partition of
    /// every cell: no cell pending, lost or listed twice.
    pub fn is_partition(&self) -> bool {
        let total: usize = self.members.values().map(Vec::len).sum();
        if total != self.grid.bounds().len() {
            return false;
        }
        let mut seen = vec![false; total];
        for (&id, cells) in &self.members {
            if id.is_pending() || cells.is_empty() {
                return false;
            }
            for &p in cells {
                let Some(i) = self.grid.index(p) else {
                    return false;
                };
                if seen[i] || self.grid.ids[i] != id {
                    return false;
                }
                seen[i] = true;
            }
        }
        true
    }
}
