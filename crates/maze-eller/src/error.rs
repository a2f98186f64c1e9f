//! Errors raised while building a maze.

use maze_core::Point;
use thiserror::Error;

use crate::cellsets::SetId;
use crate::wall::WallKind;

/// Everything that can abort maze generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EllerError {
    #[error("{kind} wall cannot join {back} and {forth}: cells are not adjacent along its axis")]
    NotAdjacent {
        kind: WallKind,
        back: Point,
        forth: Point,
    },

    #[error("cannot merge {a} and {b}: both already belong to set {id}")]
    SameSet { a: Point, b: Point, id: SetId },

    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("invalid room size range {min}..={max}")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("unknown skill level {0}")]
    UnknownSkillLevel(u8),

    #[error("maze worker thread failed: {0}")]
    Worker(String),
}
