//! Connected-region labelling through open walls.

use crate::floorplan::Floorplan;
use crate::geom::{Direction, Point};

/// Per-cell region labels produced by [`Floorplan::regions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    height: i32,
    labels: Vec<usize>,
    count: usize,
}

impl Regions {
    /// Number of distinct regions.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Region label of `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.y >= self.height {
            return None;
        }
        let i = (p.x as usize) * (self.height as usize) + (p.y as usize);
        self.labels.get(i).copied()
    }
}

impl Floorplan {
    /// Label every cell with the region it can reach without crossing a
    /// standing wall.
    pub fn regions(&self) -> Regions {
        const UNLABELLED: usize = usize::MAX;

        let bounds = self.bounds();
        let height = self.height();
        let idx = |p: Point| (p.x as usize) * (height as usize) + (p.y as usize);
        let mut labels = vec![UNLABELLED; bounds.len()];
        let mut stack = Vec::new();
        let mut label = 0;

        for start in bounds {
            if labels[idx(start)] != UNLABELLED {
                continue;
            }

            // Iterative DFS from `start`.
            labels[idx(start)] = label;
            stack.push(start);
            while let Some(p) = stack.pop() {
                for dir in Direction::ALL {
                    let q = p.step(dir);
                    if !self.contains(q) || self.has_wall(p, dir) {
                        continue;
                    }
                    if labels[idx(q)] == UNLABELLED {
                        labels[idx(q)] = label;
                        stack.push(q);
                    }
                }
            }

            label += 1;
        }

        Regions {
            height,
            labels,
            count: label,
        }
    }

    /// Whether every cell can reach every other cell.
    pub fn is_connected(&self) -> bool {
        self.regions().count() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::floorplan::Wallboard;
    use crate::geom::Range;

    #[test]
    fn walled_grid_has_one_region_per_cell() {
        let fp = Floorplan::new(3, 2);
        let regions = fp.regions();
        assert_eq!(regions.count(), 6);
        assert!(!fp.is_connected());
    }

    #[test]
    fn open_walls_join_regions() {
        let mut fp = Floorplan::new(1, 3);
        fp.delete_wallboard(Wallboard::new(Point::new(0, 0), Direction::South));
        let regions = fp.regions();
        assert_eq!(regions.count(), 2);
        assert_eq!(regions.at(Point::new(0, 0)), regions.at(Point::new(0, 1)));
        assert_ne!(regions.at(Point::new(0, 1)), regions.at(Point::new(0, 2)));
        assert_eq!(regions.at(Point::new(0, 3)), None);

        fp.delete_wallboard(Wallboard::new(Point::new(0, 2), Direction::North));
        assert!(fp.is_connected());
    }

    #[test]
    fn room_is_a_single_region() {
        let mut fp = Floorplan::new(5, 5);
        fp.mark_room(Range::sized(Point::new(1, 1), 3, 2));
        // 6 room cells collapse into one region; 19 cells stay isolated.
        assert_eq!(fp.regions().count(), 20);
    }

    #[test]
    fn border_openings_do_not_leak() {
        let mut fp = Floorplan::new(2, 1);
        fp.delete_wallboard(Wallboard::new(Point::new(0, 0), Direction::West));
        assert_eq!(fp.regions().count(), 2);
    }
}
