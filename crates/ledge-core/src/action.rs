use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A discrete action consumed by the host once per tick.
///
/// Each character kind accepts only its own subset (see [`CharacterKind::moves`]);
/// `NoAction` is valid for every kind and is what an agent reports before its
/// first decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Move {
    #[default]
    NoAction,
    RollLeft,
    RollRight,
    Jump,
    MoveLeft,
    MoveRight,
    MorphUp,
    MorphDown,
}

impl Move {
    pub fn as_str(self) -> &'static str {
        match self {
            Move::NoAction => "NO_ACTION",
            Move::RollLeft => "ROLL_LEFT",
            Move::RollRight => "ROLL_RIGHT",
            Move::Jump => "JUMP",
            Move::MoveLeft => "MOVE_LEFT",
            Move::MoveRight => "MOVE_RIGHT",
            Move::MorphUp => "MORPH_UP",
            Move::MorphDown => "MORPH_DOWN",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CharacterKind {
    /// Rolls and jumps; tall vertical reach, narrow footprint.
    #[default]
    Circle,
    /// Slides and morphs; short vertical reach.
    Rectangle,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 2] = [CharacterKind::Circle, CharacterKind::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            CharacterKind::Circle => "circle",
            CharacterKind::Rectangle => "rectangle",
        }
    }

    /// Every move the host accepts from this character, in a fixed order.
    pub fn moves(self) -> &'static [Move] {
        match self {
            CharacterKind::Circle => &[Move::RollLeft, Move::RollRight, Move::Jump],
            CharacterKind::Rectangle => &[
                Move::MoveLeft,
                Move::MoveRight,
                Move::MorphUp,
                Move::MorphDown,
            ],
        }
    }

    pub fn ascend_move(self) -> Move {
        match self {
            CharacterKind::Circle => Move::Jump,
            CharacterKind::Rectangle => Move::MorphUp,
        }
    }

    pub fn left_move(self) -> Move {
        match self {
            CharacterKind::Circle => Move::RollLeft,
            CharacterKind::Rectangle => Move::MoveLeft,
        }
    }

    pub fn right_move(self) -> Move {
        match self {
            CharacterKind::Circle => Move::RollRight,
            CharacterKind::Rectangle => Move::MoveRight,
        }
    }

    pub fn accepts(self, action: Move) -> bool {
        action == Move::NoAction || self.moves().contains(&action)
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown character kind `{0}` (expected `circle` or `rectangle`)")]
pub struct ParseCharacterError(pub String);

impl FromStr for CharacterKind {
    type Err = ParseCharacterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(CharacterKind::Circle),
            "rectangle" => Ok(CharacterKind::Rectangle),
            _ => Err(ParseCharacterError(s.to_string())),
        }
    }
}
