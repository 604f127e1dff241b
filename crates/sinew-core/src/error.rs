//! Errors surfaced by graph resolution.

use crate::id::NodeId;

/// Failure while resolving the link graph.
///
/// The traversals in this crate raise no errors of their own — dedup
/// makes malformed and cyclic inputs terminate — so the only failures
/// that can surface are those produced by
/// [`GraphResolver`](crate::node::GraphResolver) implementations while
/// materializing nodes. This crate never constructs or wraps one of
/// these; it only propagates them to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The resolver could not materialize a linkable node for an id.
    #[error("failed to materialize linkable node '{id}'")]
    Materialize {
        /// Id of the node the resolver failed on.
        id: NodeId,
        /// Underlying cause, as reported by the resolver.
        #[source]
        source: anyhow::Error,
    },
}
