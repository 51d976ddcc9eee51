//! Platformer agents: plan with the visibility graph, follow waypoints with a fixed decision
//! table, and fall back to random moves when no collectible is reachable.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod controller;
pub mod follower;
pub mod tracker;

pub use agent::PlatformerAgent;
pub use config::{AgentConfig, ControlProfile};
pub use controller::Controller;
pub use follower::{FollowStep, WaypointFollower};
pub use tracker::CatchTracker;
