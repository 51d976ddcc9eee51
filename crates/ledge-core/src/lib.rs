//! Engine-agnostic primitives for platformer navigation agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod level;
pub mod math;
pub mod message;
pub mod sensors;
pub mod tick;

pub use action::{CharacterKind, Move, ParseCharacterError};
pub use agent::Agent;
pub use level::{validate_reach, Area, LevelError, LevelSetup, Obstacle};
pub use math::Position;
pub use message::{AgentMessage, Outbox};
pub use sensors::{SensorFeed, SensorSnapshot};
pub use tick::TickContext;
