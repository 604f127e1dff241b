//! Link-graph traversal: root discovery and transitive closure.
//!
//! # Pipeline
//!
//! ```text
//! arbitrary build graph nodes
//!        ↓  roots::find_linkable_roots()     nearest linkable frontier
//! HashMap<NodeId, LinkableRef>
//!        ↓  closure::transitive_linkables()  regular ∪ exported edges
//! HashMap<NodeId, LinkableRef>               full closure, id-keyed
//!        ↓  closure::link_styles()
//! HashMap<NodeId, LinkStyle>                 per-library link decision
//! ```
//!
//! Every pass is a pure function of its inputs: visited sets and result
//! maps are constructed per call and returned, so independent root sets
//! can be resolved concurrently and results memoized by the caller.

pub mod closure;
pub mod roots;
pub mod walk;

// Re-export primary operations at module level for convenience.
pub use closure::{link_styles, linkable_closure_from_graph, transitive_linkables};
pub use roots::find_linkable_roots;
pub use walk::breadth_first;
