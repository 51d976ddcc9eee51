use ledge_core::Position;

use crate::{dfs, Graph};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A found route, stored as a stack: the goal first, the search start last.
///
/// Followers consume it from the end, so [`NavPath::next`] is always the nearest unreached
/// waypoint.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    pub points: Vec<Position>,
}

impl NavPath {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The nearest remaining waypoint.
    pub fn next(&self) -> Option<Position> {
        self.points.last().copied()
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.points.pop()
    }

    /// The collectible this path leads to.
    pub fn goal(&self) -> Option<Position> {
        self.points.first().copied()
    }

    /// The bottom of the stack: the search start until followers begin popping.
    pub fn start(&self) -> Option<Position> {
        self.points.last().copied()
    }

    /// Every entry except the current bottom of the stack, goal first.
    ///
    /// On a freshly found path this drops the search start, leaving only the positions the
    /// character still has to travel to.
    pub fn waypoints(&self) -> &[Position] {
        let end = self.points.len().saturating_sub(1);
        &self.points[..end]
    }
}

pub trait Navigator {
    /// Route from `start` to the first reachable goal, or `None` when no goal is reachable.
    fn find_path(&self, start: Position) -> Option<NavPath>;
}

impl Navigator for Graph {
    /// Searches a fresh clone so the persistent graph is left untouched.
    fn find_path(&self, start: Position) -> Option<NavPath> {
        let mut scratch = self.clone();
        dfs::search(&mut scratch, start)
    }
}
