//! Build configuration.

use crate::error::EllerError;

/// Seed used when deterministic mode is switched on without an explicit seed.
pub const DETERMINISTIC_SEED: u64 = 13;

/// Grid widths (number of rows) per skill level.
const SKILL_X: [i32; 16] = [4, 12, 15, 20, 25, 25, 35, 35, 40, 60, 70, 80, 90, 110, 150, 300];
/// Grid heights (cells per row) per skill level.
const SKILL_Y: [i32; 16] = [4, 12, 15, 15, 20, 25, 25, 35, 40, 60, 70, 75, 75, 90, 120, 150];
/// Room placement targets per skill level.
const SKILL_ROOMS: [usize; 16] = [0, 2, 2, 3, 4, 5, 10, 10, 20, 25, 25, 50, 60, 70, 80, 100];

/// Smallest and largest room side length.
pub const MIN_ROOM_DIMENSION: i32 = 3;
pub const MAX_ROOM_DIMENSION: i32 = 8;

/// What to build.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllerConfig {
    /// Number of rows (extent along x).
    pub width: i32,
    /// Number of cells per row (extent along y).
    pub height: i32,
    /// `Some` switches on deterministic mode.
    pub seed: Option<u64>,
    /// A perfect maze has no rooms.
    pub perfect: bool,
    /// Rooms are still placed on the floorplan, but the builder treats
    /// their cells like any other.
    pub ignore_rooms: bool,
    /// How many rooms to try to place.
    pub rooms: usize,
    /// Inclusive bounds on a room's side length.
    pub room_size: (i32, i32),
}

impl Default for EllerConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 12,
            seed: None,
            perfect: false,
            ignore_rooms: false,
            rooms: 2,
            room_size: (MIN_ROOM_DIMENSION, MAX_ROOM_DIMENSION),
        }
    }
}

impl EllerConfig {
    /// Preset for one of the sixteen difficulty levels (0 = smallest).
    pub fn for_skill_level(level: u8) -> Result<Self, EllerError> {
        let i = level as usize;
        if i >= SKILL_X.len() {
            return Err(EllerError::UnknownSkillLevel(level));
        }
        Ok(Self {
            width: SKILL_X[i],
            height: SKILL_Y[i],
            rooms: SKILL_ROOMS[i],
            ..Self::default()
        })
    }

    /// Switch on deterministic mode, keeping an explicit seed if one is set.
    pub fn deterministic(mut self) -> Self {
        self.seed.get_or_insert(DETERMINISTIC_SEED);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Switch rooms off.
    pub fn perfect(mut self) -> Self {
        self.perfect = true;
        self
    }

    pub fn ignoring_rooms(mut self) -> Self {
        self.ignore_rooms = true;
        self
    }

    pub fn validate(&self) -> Result<(), EllerError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EllerError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let (min, max) = self.room_size;
        if min <= 0 || min > max {
            return Err(EllerError::InvalidRoomSize { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(EllerConfig::default().validate().is_ok());
        assert_eq!(EllerConfig::default().seed, None);
    }

    #[test]
    fn skill_levels() {
        let c = EllerConfig::for_skill_level(0).unwrap();
        assert_eq!((c.width, c.height, c.rooms), (4, 4, 0));
        let c = EllerConfig::for_skill_level(15).unwrap();
        assert_eq!((c.width, c.height), (300, 150));
        assert_eq!(
            EllerConfig::for_skill_level(16),
            Err(EllerError::UnknownSkillLevel(16))
        );
    }

    #[test]
    fn deterministic_keeps_explicit_seed() {
        let c = EllerConfig::default().deterministic();
        assert_eq!(c.seed, Some(DETERMINISTIC_SEED));
        let c = EllerConfig::default().with_seed(99).deterministic();
        assert_eq!(c.seed, Some(99));
    }

    #[test]
    fn rejects_bad_dimensions() {
        let c = EllerConfig {
            width: 0,
            ..EllerConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(EllerError::InvalidDimensions { width: 0, height: 12 })
        );
        let c = EllerConfig {
            room_size: (5, 2),
            ..EllerConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let c = EllerConfig::for_skill_level(3).unwrap().deterministic();
        let json = serde_json::to_string(&c).unwrap();
        let back: EllerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
