//! Discovery of the linkable roots reachable from arbitrary graph nodes.
//!
//! Walks an arbitrary dependency graph and returns the *nearest linkable
//! frontier*: the first linkable node on every path from the given
//! starting nodes, found by walking through passthrough nodes. A linkable
//! node's own dependencies are deliberately not examined here — that is
//! the closure pass's job
//! ([`transitive_linkables`](super::closure::transitive_linkables)).

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::error::ResolveError;
use crate::id::NodeId;
use crate::node::{LinkableRef, NodeClass};

use super::walk::breadth_first;

/// Find the linkable nodes reachable from `from` without an intervening
/// linkable node.
///
/// `classify` decides, per visited node, whether it is a passthrough
/// (its children join the walk in its place), a linkable (recorded as a
/// root, not expanded), or opaque (a dead end).
///
/// Duplicate ids overwrite earlier entries; callers are expected to keep
/// ids stable across node instances.
///
/// # Errors
///
/// Propagates the first error returned by `classify` (typically a
/// resolver materialization failure).
pub fn find_linkable_roots<T, I, F>(
    from: I,
    mut classify: F,
) -> Result<HashMap<NodeId, LinkableRef>, ResolveError>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<NodeClass<T>, ResolveError>,
{
    let mut roots: HashMap<NodeId, LinkableRef> = HashMap::new();

    breadth_first(from, |node| {
        Ok(match classify(node)? {
            // The node contributes nothing itself; keep walking into
            // its children.
            NodeClass::Passthrough(children) => children,
            // Found a root; the search does not continue past it.
            NodeClass::Linkable(linkable) => {
                roots.insert(linkable.id().clone(), linkable);
                Vec::new()
            }
            NodeClass::Opaque => Vec::new(),
        })
    })?;

    debug!(roots = roots.len(), "found linkable roots");

    Ok(roots)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Arc;

    use super::*;
    use crate::linkage::Linkage;
    use crate::node::{GraphResolver, Linkable};
    use crate::platform::PlatformContext;

    /// Leaf linkable with no dependencies of its own; root discovery
    /// never asks for them.
    #[derive(Debug)]
    struct Lib {
        id: NodeId,
    }

    impl Lib {
        fn handle(id: &str) -> LinkableRef {
            Arc::new(Self {
                id: NodeId::new(id),
            })
        }
    }

    impl Linkable for Lib {
        fn id(&self) -> &NodeId {
            &self.id
        }

        fn preferred_linkage(&self) -> Linkage {
            Linkage::Any
        }

        fn dependencies(
            &self,
            _platform: &PlatformContext,
            _resolver: &dyn GraphResolver,
        ) -> Result<Vec<LinkableRef>, ResolveError> {
            Ok(Vec::new())
        }

        fn exported_dependencies(
            &self,
            _platform: &PlatformContext,
            _resolver: &dyn GraphResolver,
        ) -> Result<Vec<LinkableRef>, ResolveError> {
            Ok(Vec::new())
        }
    }

    type Classifier = Box<dyn FnMut(&String) -> Result<NodeClass<String>, ResolveError>>;

    /// Test graph: node → children for passthroughs, plus the set of
    /// linkable node names. Anything else is opaque.
    fn classify_with(passthrough: &[(&str, &[&str])], linkable: &[&str]) -> Classifier {
        let passthrough: HashMap<String, Vec<String>> = passthrough
            .iter()
            .map(|(node, children)| {
                (
                    (*node).to_string(),
                    children.iter().map(ToString::to_string).collect(),
                )
            })
            .collect();
        let linkable: BTreeSet<String> =
            linkable.iter().map(ToString::to_string).collect();

        Box::new(move |node: &String| {
            if let Some(children) = passthrough.get(node) {
                Ok(NodeClass::Passthrough(children.clone()))
            } else if linkable.contains(node) {
                Ok(NodeClass::Linkable(Lib::handle(node)))
            } else {
                Ok(NodeClass::Opaque)
            }
        })
    }

    fn names(roots: &HashMap<NodeId, LinkableRef>) -> BTreeSet<String> {
        roots.keys().map(|id| id.as_str().to_string()).collect()
    }

    #[test]
    fn linkable_root_short_circuits_its_dependencies() {
        // A (passthrough) → B (linkable) → C (linkable). B's children are
        // never examined once B is recognized, so C must not appear.
        let classify = classify_with(&[("A", &["B"])], &["B", "C"]);
        let roots =
            find_linkable_roots(vec!["A".to_string()], classify).expect("walk");
        assert_eq!(names(&roots), BTreeSet::from(["B".to_string()]));
    }

    #[test]
    fn passthrough_chain_reaches_deep_linkables() {
        let classify = classify_with(
            &[("A", &["B"]), ("B", &["C"]), ("C", &["D", "E"])],
            &["D", "E"],
        );
        let roots =
            find_linkable_roots(vec!["A".to_string()], classify).expect("walk");
        assert_eq!(
            names(&roots),
            BTreeSet::from(["D".to_string(), "E".to_string()])
        );
    }

    #[test]
    fn linkable_given_directly_as_start_is_a_root() {
        let classify = classify_with(&[], &["A"]);
        let roots =
            find_linkable_roots(vec!["A".to_string()], classify).expect("walk");
        assert_eq!(names(&roots), BTreeSet::from(["A".to_string()]));
    }

    #[test]
    fn opaque_nodes_are_dead_ends() {
        // B is opaque even though it has children in the raw graph; the
        // classifier never reveals them.
        let classify = classify_with(&[("A", &["B"])], &["C"]);
        let roots =
            find_linkable_roots(vec!["A".to_string()], classify).expect("walk");
        assert!(roots.is_empty(), "nothing linkable past an opaque node");
    }

    #[test]
    fn passthrough_cycle_terminates() {
        let classify = classify_with(
            &[("A", &["B"]), ("B", &["A", "C"])],
            &["C"],
        );
        let roots =
            find_linkable_roots(vec!["A".to_string()], classify).expect("walk");
        assert_eq!(names(&roots), BTreeSet::from(["C".to_string()]));
    }

    #[test]
    fn duplicate_ids_keep_last_write() {
        // Two raw nodes classify to linkables with the same id. The map
        // holds one entry; id stability makes the collision harmless.
        let classify = classify_with(&[("A", &["B1", "B2"])], &[]);
        let mut classify = {
            let mut inner = classify;
            move |node: &String| {
                if node == "B1" || node == "B2" {
                    Ok(NodeClass::Linkable(Lib::handle("B")))
                } else {
                    inner(node)
                }
            }
        };
        let roots = find_linkable_roots(vec!["A".to_string()], &mut classify)
            .expect("walk");
        assert_eq!(names(&roots), BTreeSet::from(["B".to_string()]));
    }

    #[test]
    fn classifier_errors_propagate() {
        let classify = |node: &String| {
            if node == "A" {
                Ok(NodeClass::Passthrough(vec!["bad".to_string()]))
            } else {
                Err(ResolveError::Materialize {
                    id: NodeId::new(node.clone()),
                    source: anyhow::anyhow!("node not in target universe"),
                })
            }
        };
        let err = find_linkable_roots(vec!["A".to_string()], classify)
            .expect_err("must fail");
        let ResolveError::Materialize { id, .. } = err;
        assert_eq!(id.as_str(), "bad");
    }
}
