//! Umbrella crate that re-exports the `ledge-*` building blocks.
//!
//! Enable only the layers you need: `core` for the host-facing types, `nav` for the
//! visibility graph and pathfinder, `agent` for the ready-made waypoint-following agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ledge_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ledge_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ledge_nav as nav;

#[cfg(feature = "agent")]
#[cfg_attr(docsrs, doc(cfg(feature = "agent")))]
pub use ledge_agent as agent;
