//! Navigation over platformer level geometry: a reach-constrained visibility graph and a
//! depth-first pathfinder that routes a character to the first reachable collectible.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod debug;
pub mod dfs;
pub mod geometry;
pub mod graph;
pub mod navigator;

pub use dfs::{search, search_into, DfsQuery, SearchNode};
pub use graph::{Edge, Graph, GraphLayout, Vertex, VertexId};
pub use navigator::{NavPath, Navigator};

pub use ledge_core::{Obstacle, Position};
