//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::GraphConfig;

use super::Graph;

/// Fluent builder for constructing a `Graph`.
///
/// Edges are collected first and inserted in one pass by `build`, after the
/// adjacency maps have been sized.
pub struct GraphBuilder<A, B> {
    config: GraphConfig,
    edges: Vec<(A, B)>,
}

impl<A: Hash + Eq + Clone, B: Hash + Eq + Clone> GraphBuilder<A, B> {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            edges: Vec::new(),
        }
    }

    /// Set the initial capacity hints.
    pub fn capacity(&mut self, a: usize, b: usize) -> &mut Self {
        self.config = self.config.capacity(a, b);
        self
    }

    /// Add an edge between `a` and `b`.
    pub fn edge(&mut self, a: A, b: B) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Add every edge yielded by `edges`.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = (A, B)>,
    {
        self.edges.extend(edges);
        self
    }

    /// Build the final graph. Repeated edges collapse into one.
    pub fn build(self) -> Graph<A, B> {
        let mut graph = Graph::with_config(&self.config);
        let pending = self.edges.len();
        graph.extend(self.edges);
        if graph.edge_count() < pending {
            log::debug!(
                "Collapsed {} repeated edges while building",
                pending - graph.edge_count()
            );
        }
        graph
    }
}

impl<A: Hash + Eq + Clone, B: Hash + Eq + Clone> Default for GraphBuilder<A, B> {
    fn default() -> Self {
        Self::new()
    }
}
