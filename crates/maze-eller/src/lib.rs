//! Maze generation with Eller's algorithm, extended for rooms.
//!
//! The builder sweeps the grid one row at a time, keeping a partition of
//! the cells into connected sets. Rooms (wall-free rectangles marked on the
//! [`Floorplan`](maze_core::Floorplan) beforehand) start out as sets of
//! their own and are merged in like any other set.
//!
//! ```no_run
//! use maze_eller::{EllerConfig, build_maze};
//!
//! let maze = build_maze(&EllerConfig::for_skill_level(3)?.deterministic())?;
//! assert!(maze.floorplan.is_connected());
//! # Ok::<(), maze_eller::EllerError>(())
//! ```

pub mod builder;
pub mod cellsets;
pub mod config;
pub mod error;
pub mod factory;
pub mod placement;
pub mod random;
pub mod rooms;
pub mod wall;

pub use builder::{Maze, MazeBuilderEller};
pub use cellsets::{CellSets, SetGrid, SetId};
pub use config::EllerConfig;
pub use error::EllerError;
pub use factory::{MazeFactory, build_maze};
pub use random::{RandomSource, RngSource};
pub use rooms::RoomWalls;
pub use wall::{Wall, WallKind};
