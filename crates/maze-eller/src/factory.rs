//! Building mazes from a configuration, on the caller's thread or on a
//! dedicated worker thread.

use std::thread::{self, JoinHandle};

use log::info;
use maze_core::Floorplan;

use crate::builder::{Maze, MazeBuilderEller};
use crate::config::EllerConfig;
use crate::error::EllerError;
use crate::placement::place_rooms;
use crate::random::RngSource;

/// Build a maze synchronously: place rooms (unless `perfect`), then carve.
pub fn build_maze(config: &EllerConfig) -> Result<Maze, EllerError> {
    config.validate()?;
    let mut random = RngSource::from_config(config);
    let mut floorplan = Floorplan::new(config.width, config.height);
    if !config.perfect {
        place_rooms(&mut floorplan, &mut random, config.rooms, config.room_size);
    }
    let mut builder = MazeBuilderEller::new(floorplan, random);
    if config.ignore_rooms {
        builder = builder.ignoring_rooms();
    }
    builder.generate_pathways()?;
    Ok(builder.into_maze())
}

/// Hands maze orders to a worker thread, one at a time.
#[derive(Debug, Default)]
pub struct MazeFactory {
    worker: Option<JoinHandle<Result<Maze, EllerError>>>,
}

impl MazeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building `config` in the background.
    ///
    /// Returns `false` without doing anything if an order is still pending.
    pub fn order(&mut self, config: EllerConfig) -> bool {
        if self.worker.is_some() {
            return false;
        }
        info!("ordering {}x{} maze", config.width, config.height);
        self.worker = Some(thread::spawn(move || build_maze(&config)));
        true
    }

    /// Whether an order has been placed and not yet collected.
    pub fn is_busy(&self) -> bool {
        self.worker.is_some()
    }

    /// Block until the pending order is built and return it, or `None`
    /// if nothing was ordered.
    pub fn wait_till_delivered(&mut self) -> Option<Result<Maze, EllerError>> {
        let worker = self.worker.take()?;
        Some(worker.join().unwrap_or_else(|panic| {
            let msg = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            Err(EllerError::Worker(msg))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cellsets::SetId;

    #[test]
    fn build_is_reproducible_with_seed() {
        let config = EllerConfig::for_skill_level(2).unwrap().deterministic();
        let a = build_maze(&config).unwrap();
        let b = build_maze(&config).unwrap();
        assert_eq!(a.floorplan, b.floorplan);
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = EllerConfig {
            height: -3,
            ..EllerConfig::default()
        };
        assert!(matches!(
            build_maze(&config),
            Err(EllerError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn perfect_maze_has_no_rooms() {
        let maze = build_maze(&EllerConfig::for_skill_level(4).unwrap().perfect().with_seed(1)).unwrap();
        let fp = &maze.floorplan;
        assert!(fp.bounds().iter().all(|p| !fp.is_in_room(p)));
        assert_eq!(fp.count_open_walls(), fp.bounds().len() - 1);
    }

    #[test]
    fn ignored_rooms_stay_on_the_floorplan() {
        let config = EllerConfig::for_skill_level(4).unwrap().ignoring_rooms().with_seed(6);
        let maze = build_maze(&config).unwrap();
        let fp = &maze.floorplan;
        assert!(fp.bounds().iter().any(|p| fp.is_in_room(p)));
        assert!(maze.cells.iter().all(|(_, id)| id == SetId(1)));
        assert!(fp.is_connected());
    }

    #[test]
    fn factory_delivers_once() {
        let mut factory = MazeFactory::new();
        assert!(factory.wait_till_delivered().is_none());
        assert!(factory.order(EllerConfig::default().deterministic()));
        assert!(!factory.order(EllerConfig::default()));
        assert!(factory.is_busy());

        let maze = factory.wait_till_delivered().unwrap().unwrap();
        assert!(maze.floorplan.is_connected());
        assert!(!factory.is_busy());
        assert!(factory.wait_till_delivered().is_none());
    }
}
