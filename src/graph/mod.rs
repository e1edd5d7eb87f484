//! In-memory graph containers.

pub mod bipartite;
pub mod builder;
pub mod uni;

pub use bipartite::{copy, Graph};
pub use builder::GraphBuilder;
pub use uni::UniGraph;
