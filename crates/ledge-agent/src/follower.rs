use ledge_core::Position;
use ledge_nav::NavPath;

use crate::Controller;

/// Outcome of advancing along the current path for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FollowStep {
    /// Keep heading for this waypoint.
    Toward(Position),
    /// The final waypoint was reached and the path is exhausted.
    Completed(Position),
}

/// Consumes a [`NavPath`] from the start end, one reached waypoint per tick.
#[derive(Debug, Clone, Default)]
pub struct WaypointFollower {
    path: Option<NavPath>,
}

impl WaypointFollower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn path(&self) -> Option<&NavPath> {
        self.path.as_ref()
    }

    pub fn set_path(&mut self, path: NavPath) {
        self.path = (!path.is_empty()).then_some(path);
    }

    pub fn clear(&mut self) {
        self.path = None;
    }

    /// Pop the next waypoint if `current` is within the controller's tolerance of it, then
    /// report what to head for. Returns `None` without a path.
    pub fn advance(&mut self, controller: &Controller, current: Position) -> Option<FollowStep> {
        let path = self.path.as_mut()?;
        let next = path.next()?;

        if controller.reached(next, current) {
            path.pop();
            match path.next() {
                Some(following) => return Some(FollowStep::Toward(following)),
                None => {
                    self.path = None;
                    return Some(FollowStep::Completed(next));
                }
            }
        }

        Some(FollowStep::Toward(next))
    }
}
