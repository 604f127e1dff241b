//! Platform identity threaded through dependency enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque toolchain/platform identity (e.g. `linux-x86_64`).
///
/// Which dependencies a node reports may vary by platform, so every
/// traversal carries one of these and hands it to
/// [`Linkable::dependencies`](crate::node::Linkable::dependencies)
/// unmodified. This crate never inspects the flavor beyond passing it
/// along.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformContext {
    flavor: String,
}

impl PlatformContext {
    /// Create a platform context from its flavor name.
    #[must_use]
    pub fn new(flavor: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
        }
    }

    /// The platform's flavor name.
    #[must_use]
    pub fn flavor(&self) -> &str {
        &self.flavor
    }
}

impl fmt::Display for PlatformContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flavor)
    }
}
