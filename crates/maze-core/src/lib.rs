//! **maze-core** — grid geometry and wall floorplans for maze generation.
//!
//! This crate provides the types shared by the maze builders: coordinates
//! and rectangles, the four cardinal directions, the [`Floorplan`] holding
//! every wall of a maze, and connected-region labelling over its open
//! walls.

pub mod cc;
pub mod floorplan;
pub mod geom;

pub use cc::Regions;
pub use floorplan::{Floorplan, WallMask, Wallboard};
pub use geom::{Direction, Point, Range, RangeIter};
