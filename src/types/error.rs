//! Error types for the bipartite-graph library.

use thiserror::Error;

use super::Side;

/// All errors that can occur in the bipartite-graph library.
///
/// `Graph` operations are total and never return these; only the exclusive
/// mode of `UniGraph` can reject an insertion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BipartiteError {
    /// A value already present on one side was added to the other side.
    #[error("value is already on side {existing} and cannot be added to side {requested}")]
    RoleConflict { existing: Side, requested: Side },
}

/// Convenience result type for bipartite-graph operations.
pub type BgResult<T> = Result<T, BipartiteError>;
