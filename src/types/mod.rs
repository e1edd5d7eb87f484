//! Shared types: sides, role modes, configuration and errors.

pub mod error;

use std::fmt;

pub use error::{BgResult, BipartiteError};

/// Default initial capacity of each adjacency map.
pub const DEFAULT_CAPACITY: usize = 0;

/// One of the two disjoint node sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Where a value currently lives in a `UniGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    A,
    B,
    /// Only reachable in `RoleMode::Shared`.
    Both,
}

impl Membership {
    /// Whether the value is present on `side`.
    pub fn includes(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Membership::Both, _) | (Membership::A, Side::A) | (Membership::B, Side::B)
        )
    }
}

/// Whether a single-key-type graph lets one value occupy both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoleMode {
    /// A value is an A-node or a B-node, never both at once.
    #[default]
    Exclusive,
    /// Identity is role-qualified: an equal value on each side is two nodes.
    Shared,
}

/// Construction-time settings for graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Initial capacity of the A-side adjacency map.
    pub a_capacity: usize,
    /// Initial capacity of the B-side adjacency map.
    pub b_capacity: usize,
    /// Role mode used by `UniGraph::with_config`.
    pub role_mode: RoleMode,
}

impl GraphConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity hints for both sides.
    pub fn capacity(mut self, a: usize, b: usize) -> Self {
        self.a_capacity = a;
        self.b_capacity = b;
        self
    }

    /// Set the role mode.
    pub fn role_mode(mut self, mode: RoleMode) -> Self {
        self.role_mode = mode;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            a_capacity: DEFAULT_CAPACITY,
            b_capacity: DEFAULT_CAPACITY,
            role_mode: RoleMode::default(),
        }
    }
}
