//! Transitive closure of linkable nodes.
//!
//! Given a set of linkable roots, computes every linkable node reachable
//! by following regular and exported dependency edges. Both edge kinds
//! are followed at every depth; there is no distinction between root
//! and transitive propagation.
//!
//! # Id-keyed traversal
//!
//! The walk is over [`NodeId`]s, not node instances. Resolvers may hand
//! out a fresh instance per edge; keying by id guarantees each logical
//! node is expanded once, with the last-registered instance holding the
//! map slot.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, instrument};

use crate::error::ResolveError;
use crate::id::NodeId;
use crate::linkage::{LinkStyle, resolve_link_style};
use crate::node::{GraphResolver, LinkableRef, NodeClass};
use crate::platform::PlatformContext;

use super::roots::find_linkable_roots;
use super::walk::breadth_first;

/// Compute the transitive closure of linkable nodes reachable from
/// `roots`.
///
/// The result contains every root plus every node reachable from one
/// through a regular or exported dependency edge, keyed by id. Ordering
/// is not part of the contract.
///
/// # Errors
///
/// Propagates [`ResolveError`] raised while enumerating dependencies.
#[instrument(skip_all)]
pub fn transitive_linkables<I>(
    platform: &PlatformContext,
    resolver: &dyn GraphResolver,
    roots: I,
) -> Result<HashMap<NodeId, LinkableRef>, ResolveError>
where
    I: IntoIterator<Item = LinkableRef>,
{
    let mut linkables: HashMap<NodeId, LinkableRef> = HashMap::new();
    for root in roots {
        linkables.insert(root.id().clone(), root);
    }
    let root_count = linkables.len();

    let seed: Vec<NodeId> = linkables.keys().cloned().collect();
    breadth_first(seed, |id| {
        // Every id handed to the walk was registered before being
        // enqueued, so the lookup cannot miss.
        let Some(node) = linkables.get(id).cloned() else {
            unreachable!("closure walk visited unregistered id '{id}'");
        };

        let mut next = Vec::new();
        let regular = node.dependencies(platform, resolver)?;
        let exported = node.exported_dependencies(platform, resolver)?;
        for dep in regular.into_iter().chain(exported) {
            let dep_id = dep.id().clone();
            linkables.insert(dep_id.clone(), dep);
            next.push(dep_id);
        }
        Ok(next)
    })?;

    debug!(
        roots = root_count,
        linkables = linkables.len(),
        "resolved transitive linkables"
    );

    Ok(linkables)
}

/// Discover the linkable roots of an arbitrary build graph and resolve
/// their full closure.
///
/// Equivalent to [`find_linkable_roots`] followed by
/// [`transitive_linkables`] on the discovered roots; the shape in which
/// build-rule construction consumes this module.
///
/// # Errors
///
/// Propagates [`ResolveError`] from either pass.
pub fn linkable_closure_from_graph<T, I, F>(
    platform: &PlatformContext,
    resolver: &dyn GraphResolver,
    from: I,
    classify: F,
) -> Result<HashMap<NodeId, LinkableRef>, ResolveError>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<NodeClass<T>, ResolveError>,
{
    let roots = find_linkable_roots(from, classify)?;
    transitive_linkables(platform, resolver, roots.into_values())
}

/// Apply the link-style decision table across a closure result.
///
/// Combines each node's declared [`Linkage`](crate::linkage::Linkage)
/// with the requested style via
/// [`resolve_link_style`](crate::linkage::resolve_link_style), producing
/// the per-library decisions that downstream argument construction
/// consumes.
#[must_use]
pub fn link_styles(
    linkables: &HashMap<NodeId, LinkableRef>,
    requested: LinkStyle,
) -> HashMap<NodeId, LinkStyle> {
    linkables
        .iter()
        .map(|(id, node)| {
            (
                id.clone(),
                resolve_link_style(node.preferred_linkage(), requested),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
