use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{CharacterKind, Position};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The live level state reported by the host after every sensor poll.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorSnapshot {
    pub collectibles_left: u32,
    pub circle: Position,
    pub rectangle: Position,
    /// Collectibles still present in the level.
    pub collectibles: Vec<Position>,
}

impl SensorSnapshot {
    pub fn position_of(&self, kind: CharacterKind) -> Position {
        match kind {
            CharacterKind::Circle => self.circle,
            CharacterKind::Rectangle => self.rectangle,
        }
    }
}

/// Lock-guarded snapshot cell shared between the host's sensor callback and
/// the agent's decision tick.
///
/// Clones share the same cell. The host calls [`SensorFeed::publish`] from its
/// own context; the agent reads through [`SensorFeed::lock`] and keeps the
/// guard for the whole read-and-diff step so a publish cannot interleave.
#[derive(Debug, Clone, Default)]
pub struct SensorFeed {
    inner: Arc<Mutex<Option<SensorSnapshot>>>,
}

impl SensorFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live snapshot.
    pub fn publish(&self, snapshot: SensorSnapshot) {
        *self.inner.lock() = Some(snapshot);
    }

    /// `None` inside the guard until the host has published at least once.
    pub fn lock(&self) -> MutexGuard<'_, Option<SensorSnapshot>> {
        self.inner.lock()
    }

    pub fn latest(&self) -> Option<SensorSnapshot> {
        self.inner.lock().clone()
    }

    pub fn has_snapshot(&self) -> bool {
        self.inner.lock().is_some()
    }
}
