//! Static level description delivered by the host once per level.

use thiserror::Error;

use crate::{CharacterKind, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned platform, described by its center and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Y of the walkable surface (smaller Y is higher on screen).
    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Position {
        Position::new(self.right(), self.top())
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// The playable screen rectangle, as a top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Area {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Area {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelSetup {
    pub area: Area,
    /// Platforms that block both characters.
    pub obstacles: Vec<Obstacle>,
    /// Rectangle-coloured platforms: the rectangle passes through them, the circle does not.
    pub rectangle_platforms: Vec<Obstacle>,
    /// Circle-coloured platforms: the circle passes through them, the rectangle does not.
    pub circle_platforms: Vec<Obstacle>,
    pub collectibles: Vec<Position>,
    pub circle: Position,
    pub rectangle: Position,
}

impl LevelSetup {
    pub fn start_for(&self, kind: CharacterKind) -> Position {
        match kind {
            CharacterKind::Circle => self.circle,
            CharacterKind::Rectangle => self.rectangle,
        }
    }

    /// Platforms a character plans against: the shared obstacles followed by
    /// the platforms coloured for the *other* character.
    pub fn platforms_for(&self, kind: CharacterKind) -> Vec<Obstacle> {
        let extra = match kind {
            CharacterKind::Circle => &self.rectangle_platforms,
            CharacterKind::Rectangle => &self.circle_platforms,
        };
        let mut out = Vec::with_capacity(self.obstacles.len() + extra.len());
        out.extend_from_slice(&self.obstacles);
        out.extend_from_slice(extra);
        out
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        let groups: [(&'static str, &[Obstacle]); 3] = [
            ("obstacles", &self.obstacles),
            ("rectangle_platforms", &self.rectangle_platforms),
            ("circle_platforms", &self.circle_platforms),
        ];
        for (group, obstacles) in groups {
            for (index, o) in obstacles.iter().enumerate() {
                if !o.is_finite() {
                    return Err(LevelError::NonFiniteObstacle { group, index });
                }
                if o.width <= 0.0 || o.height <= 0.0 {
                    return Err(LevelError::DegenerateObstacle {
                        group,
                        index,
                        width: o.width,
                        height: o.height,
                    });
                }
            }
        }

        if let Some(index) = self.collectibles.iter().position(|c| !c.is_finite()) {
            return Err(LevelError::NonFiniteCollectible { index });
        }

        for kind in CharacterKind::ALL {
            if !self.start_for(kind).is_finite() {
                return Err(LevelError::NonFiniteStart { character: kind });
            }
        }

        Ok(())
    }
}

pub fn validate_reach(reach: f32) -> Result<(), LevelError> {
    if reach.is_finite() && reach >= 0.0 {
        Ok(())
    } else {
        Err(LevelError::InvalidReach(reach))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("{group}[{index}] has non-finite geometry")]
    NonFiniteObstacle { group: &'static str, index: usize },

    #[error("{group}[{index}] has non-positive size {width}x{height}")]
    DegenerateObstacle {
        group: &'static str,
        index: usize,
        width: f32,
        height: f32,
    },

    #[error("collectible {index} has a non-finite position")]
    NonFiniteCollectible { index: usize },

    #[error("{character} start position is non-finite")]
    NonFiniteStart { character: CharacterKind },

    #[error("vertical reach must be finite and non-negative, got {0}")]
    InvalidReach(f32),
}
