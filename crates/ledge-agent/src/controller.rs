use ledge_core::{CharacterKind, Move, Position};
use ledge_nav::geometry::{in_range, reached};

use crate::ControlProfile;

/// Fixed decision table turning "where I am, where I go next" into a single move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controller {
    kind: CharacterKind,
    profile: ControlProfile,
}

impl Controller {
    pub fn new(kind: CharacterKind, profile: ControlProfile) -> Self {
        Self { kind, profile }
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn profile(&self) -> ControlProfile {
        self.profile
    }

    pub fn reached(&self, waypoint: Position, current: Position) -> bool {
        reached(waypoint, current, self.profile.x_margin, self.profile.y_margin)
    }

    /// Ascend when the waypoint is well above and horizontally close; otherwise head towards
    /// its X.
    pub fn next_move(&self, waypoint: Position, current: Position) -> Move {
        let window = self.profile.ascend_window;
        if current.y - waypoint.y >= self.profile.above_margin
            && in_range(current.x, waypoint.x - window, waypoint.x + window)
        {
            return self.kind.ascend_move();
        }
        if current.x < waypoint.x {
            self.kind.right_move()
        } else {
            self.kind.left_move()
        }
    }
}
