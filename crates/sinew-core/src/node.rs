//! Linkable capability and resolver collaborator traits.
//!
//! # Capability model
//!
//! Only some nodes in a build dependency graph contribute linkable
//! artifacts. Rather than probing node types at traversal time, the
//! caller classifies each raw node up front into a [`NodeClass`]:
//! passthrough nodes lend their children to the search, linkable nodes
//! become results, and everything else is opaque.
//!
//! # Identity
//!
//! Resolvers are free to hand out a fresh [`LinkableRef`] instance for
//! every edge. All deduplication downstream is by [`NodeId`], never by
//! pointer identity, so instance churn is harmless.

use std::fmt;
use std::sync::Arc;

use crate::error::ResolveError;
use crate::id::NodeId;
use crate::linkage::Linkage;
use crate::platform::PlatformContext;

/// Shared handle to a linkable node.
pub type LinkableRef = Arc<dyn Linkable>;

/// Capability exposed by graph nodes that contribute a linkable artifact.
///
/// Dependency enumeration is platform-sensitive and may materialize
/// nodes lazily through the supplied resolver, so both parameters are
/// threaded through every call unmodified.
pub trait Linkable: fmt::Debug + Send + Sync {
    /// Stable identity of this node.
    fn id(&self) -> &NodeId;

    /// The node's declared linkage constraint.
    fn preferred_linkage(&self) -> Linkage;

    /// Regular (non-exported) linkable dependencies for `platform`.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from the resolver when a dependency
    /// cannot be materialized.
    fn dependencies(
        &self,
        platform: &PlatformContext,
        resolver: &dyn GraphResolver,
    ) -> Result<Vec<LinkableRef>, ResolveError>;

    /// Exported linkable dependencies for `platform`.
    ///
    /// Exported edges are propagated to this node's consumers in
    /// addition to its regular edges.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from the resolver when a dependency
    /// cannot be materialized.
    fn exported_dependencies(
        &self,
        platform: &PlatformContext,
        resolver: &dyn GraphResolver,
    ) -> Result<Vec<LinkableRef>, ResolveError>;
}

/// Collaborator that materializes linkable nodes on demand.
///
/// Two calls for the same id may return distinct instances; callers may
/// rely only on the returned ids being equal.
pub trait GraphResolver: Send + Sync {
    /// Materialize the linkable node registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Materialize`] when no linkable can be
    /// built for `id`.
    fn materialize(&self, id: &NodeId) -> Result<LinkableRef, ResolveError>;
}

/// Classification of a raw graph node during root discovery.
///
/// Produced per node by the classifier handed to
/// [`find_linkable_roots`](crate::graph::find_linkable_roots).
#[derive(Debug)]
pub enum NodeClass<T> {
    /// Non-linkable node whose children join the search in its place.
    Passthrough(Vec<T>),
    /// A linkable node: recorded as a root, never expanded further.
    Linkable(LinkableRef),
    /// Neither passthrough nor linkable; the search stops here.
    Opaque,
}
