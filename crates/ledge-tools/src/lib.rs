//! Tooling primitives for platformer navigation agents.
//!
//! This crate is intentionally lightweight and engine-agnostic: it describes *what* to draw and
//! leaves rendering to the host.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod draw;

pub use draw::{Color, DebugShape, DrawSink, NullDrawSink, VecDrawSink};
