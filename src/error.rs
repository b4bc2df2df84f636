#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Errors raised when an oracle is called outside its contract.
///
/// An unreachable end node or an empty sequence is not an error; those
/// produce a sentinel or an empty result instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// A node named by the caller is not part of the graph.
    #[error("Node `{0}` is not in the graph.")]
    NodeNotFound(String),
    /// The edge to remove does not exist.
    #[error("There is no edge from `{from}` to `{to}`.")]
    EdgeNotFound {
        /// Source node of the missing edge.
        from: String,
        /// Target node of the missing edge.
        to:   String,
    },
    /// Integer and string values were mixed in one sequence.
    #[error(
        "Values in a sequence must all be integers or all be strings; found `{offending}` \
         after `{first}`."
    )]
    MixedTypes {
        /// The first value of the sequence, which fixes its kind.
        first:     String,
        /// The first value whose kind differs.
        offending: String,
    },
    /// A cumulative path weight no longer fits in a `u64`.
    #[error("Cumulative path weight overflowed.")]
    WeightOverflow,
}

impl OracleError {
    /// Shorthand for a [`OracleError::NodeNotFound`] built from anything
    /// printable.
    pub fn node_not_found(node: impl std::fmt::Debug) -> Self {
        OracleError::NodeNotFound(format!("{node:?}"))
    }
}

/// Result type used by the oracles and the graph model.
pub type Result<T, E = OracleError> = std::result::Result<T, E>;
