#![forbid(unsafe_code)]
//! sinew-core library.
//!
//! Native-link dependency graph resolution for a build tool: discovers
//! the linkable nodes reachable from arbitrary build graph roots, closes
//! them over regular and exported dependency edges, and decides the
//! physical link style for each library.
//!
//! # Conventions
//!
//! - **Errors**: fallible traversal returns [`ResolveError`]; resolver
//!   failures propagate to the caller unchanged.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`); the library
//!   installs no subscriber.

pub mod error;
pub mod graph;
pub mod id;
pub mod linkage;
pub mod node;
pub mod platform;

pub use error::ResolveError;
pub use graph::{
    breadth_first, find_linkable_roots, link_styles, linkable_closure_from_graph,
    transitive_linkables,
};
pub use id::NodeId;
pub use linkage::{LinkStyle, Linkage, ParseLinkageError, resolve_link_style};
pub use node::{GraphResolver, Linkable, LinkableRef, NodeClass};
pub use platform::PlatformContext;
