//! bipartite-graph: an in-memory undirected bipartite graph.
//!
//! Nodes live on one of two disjoint sides, A and B, and edges only join an
//! A-node to a B-node. Each edge is indexed from both endpoints, and a node
//! exists exactly as long as it has at least one edge.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{copy, Graph, GraphBuilder, UniGraph};
pub use types::{
    BgResult, BipartiteError, GraphConfig, Membership, RoleMode, Side, DEFAULT_CAPACITY,
};
