//! Eller's algorithm, one row at a time, with support for rooms.
//!
//! Rows are fixed `x` values processed from `0` to `width - 1`. For every
//! row the builder first links each set of the previous row into the new
//! row, then randomly takes down walls inside the new row. The last row is
//! merged into a single set, and a final pass opens any room that never
//! joined the rest of the maze.

use std::collections::HashMap;

use log::{debug, info, warn};
use maze_core::{Floorplan, Point};

use crate::cellsets::{CellSets, SetGrid, SetId};
use crate::error::EllerError;
use crate::random::{RandomSource, coin_flip, pick_index, shuffle};
use crate::rooms::{self, RoomWalls};
use crate::wall::Wall;

/// Most boundary walls opened per isolated room.
const REPAIR_WALLS: usize = 2;

type ProgressFn = Box<dyn FnMut(u32) + Send>;

/// Builds the pathways of a maze into an existing [`Floorplan`].
///
/// The floorplan must be fully walled, with any rooms already marked.
pub struct MazeBuilderEller<R: RandomSource> {
    floorplan: Floorplan,
    random: R,
    sets: CellSets,
    room_walls: RoomWalls,
    ignore_rooms: bool,
    progress: Option<ProgressFn>,
}

/// A finished maze.
#[derive(Debug, Clone)]
pub struct Maze {
    pub floorplan: Floorplan,
    /// Final set id of every cell.
    pub cells: SetGrid,
}

impl<R: RandomSource> MazeBuilderEller<R> {
    pub fn new(floorplan: Floorplan, random: R) -> Self {
        let sets = CellSets::new(floorplan.width(), floorplan.height());
        Self {
            floorplan,
            random,
            sets,
            room_walls: RoomWalls::default(),
            ignore_rooms: false,
            progress: None,
        }
    }

    /// Treat room cells like any other cell: no room sets, no repair.
    pub fn ignoring_rooms(mut self) -> Self {
        self.ignore_rooms = true;
        self
    }

    /// Report the percentage of rows done after every row.
    pub fn with_progress(mut self, f: impl FnMut(u32) + Send + 'static) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    /// Carve the maze. Call once per builder.
    pub fn generate_pathways(&mut self) -> Result<(), EllerError> {
        let (width, height) = (self.floorplan.width(), self.floorplan.height());
        if width == 0 || height == 0 {
            return Ok(());
        }
        info!("building {width}x{height} maze with Eller's algorithm");

        self.room_walls =
            rooms::discover_rooms(&self.floorplan, &mut self.sets, self.ignore_rooms)?;
        info!("found {} rooms", self.room_walls.len());

        for x in 0..width {
            if x > 0 {
                self.link_rows(x - 1, x)?;
            }
            self.remove_row_walls(x)?;
            debug_assert!(self.sets.is_partition(), "partition broken at row {x}");
            debug!("row {x}: {} sets", self.sets.len());
            if let Some(report) = self.progress.as_mut() {
                report(((x + 1) * 100 / width) as u32);
            }
        }
        self.merge_last_row(width - 1)?;
        self.repair_rooms()?;

        info!(
            "maze done: {} sets, {} walls open",
            self.sets.len(),
            self.floorplan.count_open_walls()
        );
        Ok(())
    }

    /// Current set id of every cell.
    pub fn retrieve_cells(&self) -> &SetGrid {
        self.sets.grid()
    }

    /// Current members of every set.
    pub fn retrieve_cell_sets(&self) -> &HashMap<SetId, Vec<Point>> {
        self.sets.sets()
    }

    /// Boundary walls recorded per room and not yet used by repair.
    pub fn room_walls(&self) -> &RoomWalls {
        &self.room_walls
    }

    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    pub fn into_maze(self) -> Maze {
        Maze {
            floorplan: self.floorplan,
            cells: self.sets.into_grid(),
        }
    }

    /// The walls between row-mates of row `x`.
    fn row_walls(&self, x: i32) -> Result<Vec<Wall>, EllerError> {
        (0..self.floorplan.height() - 1)
            .map(|y| Wall::within_row(Point::new(x, y), Point::new(x, y + 1)))
            .collect()
    }

    /// Visit the walls of row `x` in random order, taking down those that
    /// win a coin flip and separate two different sets.
    pub(crate) fn remove_row_walls(&mut self, x: i32) -> Result<(), EllerError> {
        let mut walls = self.row_walls(x)?;
        shuffle(&mut self.random, &mut walls);
        for wall in &walls {
            if wall.is_border(&self.floorplan) || !coin_flip(&mut self.random) {
                continue;
            }
            if !self.sets.same_set(wall.back_cell(), wall.forth_cell()) {
                wall.remove(&mut self.floorplan);
                self.sets.merge(wall.back_cell(), wall.forth_cell())?;
            }
        }
        Ok(())
    }

    /// Give every set present in row `prev` at least one doorway into row
    /// `next`: up to half of its cells (rounded up, at least one) open the
    /// wall to their neighbour in the next row.
    pub(crate) fn link_rows(&mut self, prev: i32, next: i32) -> Result<(), EllerError> {
        debug_assert_eq!(prev + 1, next);
        for (_, mut cells) in self.sets.groups_in_row(prev) {
            let n = cells.len() as i32;
            let count = if n == 1 {
                1
            } else {
                self.random.next_int_in_range(1, (n + 1) / 2)
            };
            for _ in 0..count {
                let back = cells.swap_remove(pick_index(&mut self.random, cells.len()));
                let wall = Wall::across_row(back, Point::new(next, back.y))?;
                open_wall(&mut self.floorplan, &mut self.sets, &wall)?;
            }
        }
        Ok(())
    }

    /// Join every pair of row-mates in the last row that still belong to
    /// different sets.
    pub(crate) fn merge_last_row(&mut self, x: i32) -> Result<(), EllerError> {
        let walls = self.row_walls(x)?;
        for wall in &walls {
            if wall.is_border(&self.floorplan) {
                continue;
            }
            if !self.sets.same_set(wall.back_cell(), wall.forth_cell()) {
                wall.remove(&mut self.floorplan);
                self.sets.merge(wall.back_cell(), wall.forth_cell())?;
            }
        }
        debug_assert!(
            walls
                .iter()
                .all(|w| self.sets.same_set(w.back_cell(), w.forth_cell())),
            "last row {x} still split"
        );
        Ok(())
    }

    /// Open up to two recorded boundary walls of every room that is still
    /// a set of its own.
    pub(crate) fn repair_rooms(&mut self) -> Result<(), EllerError> {
        let Self {
            floorplan,
            random,
            sets,
            room_walls,
            ..
        } = self;

        for id in sets.room_ids() {
            if !sets.contains(id) {
                continue;
            }
            let Some(walls) = room_walls.get_mut(id) else {
                continue;
            };
            let picks = walls.len().min(REPAIR_WALLS);
            if picks == 0 {
                warn!("room {id} has no removable wall and stays isolated");
                continue;
            }
            for _ in 0..picks {
                let wall = walls.remove(pick_index(random, walls.len()));
                open_wall(floorplan, sets, &wall)?;
            }
            debug!("room {id}: opened {picks} walls");
        }
        Ok(())
    }
}

/// Take `wall` down and join the sets on both sides if they differ.
fn open_wall(floorplan: &mut Floorplan, sets: &mut CellSets, wall: &Wall) -> Result<(), EllerError> {
    wall.remove(floorplan);
    if !sets.same_set(wall.back_cell(), wall.forth_cell()) {
        sets.merge(wall.back_cell(), wall.forth_cell())?;
    }
    Ok(())
}
