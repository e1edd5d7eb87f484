//! Core graph structure: two mirrored adjacency indexes.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::GraphConfig;

/// An undirected bipartite graph between A-nodes of type `A` and B-nodes of
/// type `B`.
///
/// Every edge is stored twice, once under each endpoint, so adjacency and
/// degree are O(1) from either side. A node exists only while it has at least
/// one edge: it appears with its first `add` and disappears the moment its
/// last edge is deleted.
///
/// The A and B key spaces are independent. `Graph<u32, u32>` holds A-node `1`
/// and B-node `1` as two unrelated nodes.
#[derive(Clone, Debug)]
pub struct Graph<A, B> {
    /// A-node -> neighboring B-nodes. Keys are the A-side membership set.
    ab: HashMap<A, HashSet<B>>,
    /// B-node -> neighboring A-nodes. Keys are the B-side membership set.
    ba: HashMap<B, HashSet<A>>,
    /// Number of distinct edges.
    edges: usize,
}

/// Returns a graph deeply equal to `g` that shares no storage with it.
pub fn copy<A: Clone, B: Clone>(g: &Graph<A, B>) -> Graph<A, B> {
    g.clone()
}

impl<A, B> Graph<A, B> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            ab: HashMap::new(),
            ba: HashMap::new(),
            edges: 0,
        }
    }

    /// Create an empty graph with room for `a` A-nodes and `b` B-nodes.
    pub fn with_capacity(a: usize, b: usize) -> Self {
        Self {
            ab: HashMap::with_capacity(a),
            ba: HashMap::with_capacity(b),
            edges: 0,
        }
    }

    /// Create an empty graph sized from a config.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.a_capacity, config.b_capacity)
    }

    /// Number of A-nodes. Equivalent to `a_nodes().len()`, but O(1).
    pub fn na(&self) -> usize {
        self.ab.len()
    }

    /// Number of B-nodes. Equivalent to `b_nodes().len()`, but O(1).
    pub fn nb(&self) -> usize {
        self.ba.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// True if the graph has no edges (and therefore no nodes).
    pub fn is_empty(&self) -> bool {
        self.edges == 0
    }

    /// Iterate over the A-nodes without copying them.
    pub fn iter_a(&self) -> impl Iterator<Item = &A> + '_ {
        self.ab.keys()
    }

    /// Iterate over the B-nodes without copying them.
    pub fn iter_b(&self) -> impl Iterator<Item = &B> + '_ {
        self.ba.keys()
    }

    /// Iterate over every edge exactly once, as `(a, b)`.
    pub fn edges(&self) -> impl Iterator<Item = (&A, &B)> + '_ {
        self.ab
            .iter()
            .flat_map(|(a, bs)| bs.iter().map(move |b| (a, b)))
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        log::debug!("Clearing graph with {} edges", self.edges);
        self.ab.clear();
        self.ba.clear();
        self.edges = 0;
    }
}

impl<A: Hash + Eq, B: Hash + Eq> Graph<A, B> {
    /// True if `a` is an A-node.
    pub fn contains_a<Q>(&self, a: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ab.contains_key(a)
    }

    /// True if `b` is a B-node.
    pub fn contains_b<Q>(&self, b: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ba.contains_key(b)
    }

    /// Reports whether `a` and `b` are adjacent. False if either is absent.
    pub fn adjacent<QA, QB>(&self, a: &QA, b: &QB) -> bool
    where
        A: Borrow<QA>,
        B: Borrow<QB>,
        QA: Hash + Eq + ?Sized,
        QB: Hash + Eq + ?Sized,
    {
        self.ab.get(a).is_some_and(|bs| bs.contains(b))
    }

    /// Number of B-nodes adjacent to `a`; 0 if `a` is absent.
    /// Equivalent to `adj_to_a(a).len()`, but O(1).
    pub fn deg_a<Q>(&self, a: &Q) -> usize
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ab.get(a).map(|bs| bs.len()).unwrap_or(0)
    }

    /// Number of A-nodes adjacent to `b`; 0 if `b` is absent.
    /// Equivalent to `adj_to_b(b).len()`, but O(1).
    pub fn deg_b<Q>(&self, b: &Q) -> usize
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ba.get(b).map(|as_| as_.len()).unwrap_or(0)
    }

    /// Borrowing iterator over the neighbors of `a`. Empty if `a` is absent.
    pub fn neighbors_of_a<Q>(&self, a: &Q) -> impl Iterator<Item = &B> + '_
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ab.get(a).into_iter().flatten()
    }

    /// Borrowing iterator over the neighbors of `b`. Empty if `b` is absent.
    pub fn neighbors_of_b<Q>(&self, b: &Q) -> impl Iterator<Item = &A> + '_
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ba.get(b).into_iter().flatten()
    }

    /// Records that `a` and `b` are not adjacent.
    ///
    /// A node whose last edge is deleted is removed from the graph. Absent
    /// nodes and absent edges are a no-op. Each direction is updated on its
    /// own, so a pair naming a node that only exists on the other side cannot
    /// disturb that side.
    pub fn delete<QA, QB>(&mut self, a: &QA, b: &QB)
    where
        A: Borrow<QA>,
        B: Borrow<QB>,
        QA: Hash + Eq + ?Sized,
        QB: Hash + Eq + ?Sized,
    {
        let removed = unlink(&mut self.ab, a, b);
        let mirrored = unlink(&mut self.ba, b, a);
        debug_assert_eq!(removed, mirrored, "adjacency indexes out of sync");
        if removed {
            self.edges -= 1;
        }
    }

    /// Deletes every edge of A-node `a`, which removes `a` itself.
    /// B-nodes left without edges are removed too; nothing else is touched.
    pub fn remove_a<Q>(&mut self, a: &Q)
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // Take the neighbor set out before unlinking the mirrored entries.
        let Some(bs) = self.ab.remove(a) else {
            return;
        };
        for b in &bs {
            unlink(&mut self.ba, b, a);
        }
        self.edges -= bs.len();
        log::debug!("Removed A-node and its {} edges", bs.len());
    }

    /// Deletes every edge of B-node `b`, which removes `b` itself.
    /// A-nodes left without edges are removed too; nothing else is touched.
    pub fn remove_b<Q>(&mut self, b: &Q)
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(as_) = self.ba.remove(b) else {
            return;
        };
        for a in &as_ {
            unlink(&mut self.ab, a, b);
        }
        self.edges -= as_.len();
        log::debug!("Removed B-node and its {} edges", as_.len());
    }
}

impl<A: Hash + Eq + Clone, B: Hash + Eq + Clone> Graph<A, B> {
    /// Adds `a` and `b` to the graph if not present, and records that they
    /// are adjacent. Adding an existing edge changes nothing.
    pub fn add(&mut self, a: A, b: B) {
        let bs = self.ab.entry(a.clone()).or_insert_with(|| {
            log::trace!("Created A-node");
            HashSet::new()
        });
        if !bs.insert(b.clone()) {
            return;
        }
        self.ba
            .entry(b)
            .or_insert_with(|| {
                log::trace!("Created B-node");
                HashSet::new()
            })
            .insert(a);
        self.edges += 1;
    }

    /// Unordered snapshot of the B-nodes adjacent to `a`.
    /// Empty if `a` is not in the graph.
    pub fn adj_to_a<Q>(&self, a: &Q) -> Vec<B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors_of_a(a).cloned().collect()
    }

    /// Unordered snapshot of the A-nodes adjacent to `b`.
    /// Empty if `b` is not in the graph.
    pub fn adj_to_b<Q>(&self, b: &Q) -> Vec<A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.neighbors_of_b(b).cloned().collect()
    }

    /// Unordered snapshot of every A-node.
    pub fn a_nodes(&self) -> Vec<A> {
        self.ab.keys().cloned().collect()
    }

    /// Unordered snapshot of every B-node.
    pub fn b_nodes(&self) -> Vec<B> {
        self.ba.keys().cloned().collect()
    }
}

impl<A, B> Default for Graph<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Hash + Eq, B: Hash + Eq> PartialEq for Graph<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.edges == other.edges && self.ab == other.ab && self.ba == other.ba
    }
}

impl<A: Hash + Eq, B: Hash + Eq> Eq for Graph<A, B> {}

impl<A: Hash + Eq + Clone, B: Hash + Eq + Clone> FromIterator<(A, B)> for Graph<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<A: Hash + Eq + Clone, B: Hash + Eq + Clone> Extend<(A, B)> for Graph<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (a, b) in iter {
            self.add(a, b);
        }
    }
}

/// Remove `value` from the neighbor set stored under `key`, dropping the
/// entry once the set is empty. Returns whether `value` was present.
fn unlink<K, V, QK, QV>(index: &mut HashMap<K, HashSet<V>>, key: &QK, value: &QV) -> bool
where
    K: Borrow<QK> + Hash + Eq,
    V: Borrow<QV> + Hash + Eq,
    QK: Hash + Eq + ?Sized,
    QV: Hash + Eq + ?Sized,
{
    let Some(set) = index.get_mut(key) else {
        return false;
    };
    let removed = set.remove(value);
    if set.is_empty() {
        index.remove(key);
        log::trace!("Removed node after its last edge was deleted");
    }
    removed
}
