//! Single key type bipartite graph, where one value type serves both sides.

use std::hash::Hash;

use crate::types::{BgResult, BipartiteError, GraphConfig, Membership, RoleMode, Side};

use super::Graph;

/// A bipartite graph whose A-nodes and B-nodes share one value type `N`.
///
/// In `RoleMode::Exclusive` a value lives on at most one side at a time and
/// `add` rejects cross-role reuse. In `RoleMode::Shared` nodes are compared by
/// (side, value): `add(1, 1)` creates A-node 1 and B-node 1, which are two
/// distinct nodes joined by an edge.
#[derive(Clone, Debug)]
pub struct UniGraph<N> {
    graph: Graph<N, N>,
    mode: RoleMode,
}

impl<N> UniGraph<N> {
    /// Create an empty graph in exclusive mode.
    pub fn new() -> Self {
        Self::with_mode(RoleMode::Exclusive)
    }

    /// Create an empty graph in the given mode.
    pub fn with_mode(mode: RoleMode) -> Self {
        Self {
            graph: Graph::new(),
            mode,
        }
    }

    /// Create an empty graph from a config (capacity and role mode).
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
            mode: config.role_mode,
        }
    }

    pub fn mode(&self) -> RoleMode {
        self.mode
    }

    pub fn na(&self) -> usize {
        self.graph.na()
    }

    pub fn nb(&self) -> usize {
        self.graph.nb()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Read-only view of the underlying two-sided graph.
    pub fn as_graph(&self) -> &Graph<N, N> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<N, N> {
        self.graph
    }
}

impl<N: Hash + Eq> UniGraph<N> {
    /// Which side(s) `node` currently occupies, or `None` if absent.
    pub fn membership(&self, node: &N) -> Option<Membership> {
        match (self.graph.contains_a(node), self.graph.contains_b(node)) {
            (true, true) => Some(Membership::Both),
            (true, false) => Some(Membership::A),
            (false, true) => Some(Membership::B),
            (false, false) => None,
        }
    }

    /// Reports whether A-node `a` and B-node `b` are adjacent.
    pub fn adjacent(&self, a: &N, b: &N) -> bool {
        self.graph.adjacent(a, b)
    }

    /// Deletes the edge between A-node `a` and B-node `b`, if any.
    pub fn delete(&mut self, a: &N, b: &N) {
        self.graph.delete(a, b);
    }

    /// Degree of `node` on one side; 0 if it is not on that side.
    pub fn deg_side(&self, side: Side, node: &N) -> usize {
        match side {
            Side::A => self.graph.deg_a(node),
            Side::B => self.graph.deg_b(node),
        }
    }

    /// Total degree of `node` over every side it occupies.
    /// Equivalent to `adj_to(node).len()`, but O(1).
    pub fn deg(&self, node: &N) -> usize {
        self.graph.deg_a(node) + self.graph.deg_b(node)
    }

    /// Removes `node` from one side, deleting its edges there.
    pub fn remove_side(&mut self, side: Side, node: &N) {
        match side {
            Side::A => self.graph.remove_a(node),
            Side::B => self.graph.remove_b(node),
        }
    }

    /// Removes `node` from every side it occupies.
    pub fn remove(&mut self, node: &N) {
        let before = self.graph.edge_count();
        self.graph.remove_a(node);
        self.graph.remove_b(node);
        log::debug!(
            "Removed value from all sides, {} edges deleted",
            before - self.graph.edge_count()
        );
    }
}

impl<N: Hash + Eq + Clone> UniGraph<N> {
    /// Adds A-node `a` and B-node `b` if not present, and records that they
    /// are adjacent.
    ///
    /// In exclusive mode this fails with `RoleConflict`, leaving the graph
    /// untouched, when `a` is currently a B-node, when `b` is currently an
    /// A-node, or when `a == b`.
    pub fn add(&mut self, a: N, b: N) -> BgResult<()> {
        if self.mode == RoleMode::Exclusive {
            self.check_exclusive(&a, &b)?;
        }
        self.graph.add(a, b);
        Ok(())
    }

    fn check_exclusive(&self, a: &N, b: &N) -> BgResult<()> {
        let conflict = if self.graph.contains_b(a) {
            Some(BipartiteError::RoleConflict {
                existing: Side::B,
                requested: Side::A,
            })
        } else if self.graph.contains_a(b) || a == b {
            Some(BipartiteError::RoleConflict {
                existing: Side::A,
                requested: Side::B,
            })
        } else {
            None
        };
        match conflict {
            Some(err) => {
                log::warn!("Rejected edge in exclusive mode: {}", err);
                Err(err)
            }
            None => Ok(()),
        }
    }

    /// Unordered snapshot of the neighbors of `node` on one side.
    pub fn adj_to_side(&self, side: Side, node: &N) -> Vec<N> {
        match side {
            Side::A => self.graph.adj_to_a(node),
            Side::B => self.graph.adj_to_b(node),
        }
    }

    /// Unordered snapshot of every neighbor of `node`, each tagged with the
    /// side the neighbor lives on. Empty if `node` is absent.
    pub fn adj_to(&self, node: &N) -> Vec<(Side, N)> {
        self.graph
            .neighbors_of_a(node)
            .map(|b| (Side::B, b.clone()))
            .chain(self.graph.neighbors_of_b(node).map(|a| (Side::A, a.clone())))
            .collect()
    }

    pub fn a_nodes(&self) -> Vec<N> {
        self.graph.a_nodes()
    }

    pub fn b_nodes(&self) -> Vec<N> {
        self.graph.b_nodes()
    }
}

impl<N> Default for UniGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
