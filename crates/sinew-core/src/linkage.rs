//! Linkage preferences and effective link styles.
//!
//! A library declares how it may be linked ([`Linkage`]); the top-level
//! build target requests a style ([`LinkStyle`]); [`resolve_link_style`]
//! decides what actually happens. The string and serde forms here are the
//! configuration boundary: build files carry `"static"`, `"shared"`,
//! `"any"` and `"static-pic"`, and the surrounding tool parses them into
//! these enums before calling into the resolution engine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Linkage
// ---------------------------------------------------------------------------

/// A library's declared constraint on how it may be linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// No preference; the requested style is used as-is.
    Any,
    /// Must always be linked statically.
    Static,
    /// Must always be linked as a shared library.
    Shared,
}

impl Linkage {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Static => "static",
            Self::Shared => "shared",
        }
    }
}

// ---------------------------------------------------------------------------
// LinkStyle
// ---------------------------------------------------------------------------

/// A physical link style for a single library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkStyle {
    /// Static archive.
    Static,
    /// Static archive built as position-independent code.
    StaticPic,
    /// Shared library.
    Shared,
}

impl LinkStyle {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::StaticPic => "static-pic",
            Self::Shared => "shared",
        }
    }
}

// ---------------------------------------------------------------------------
// Style resolution
// ---------------------------------------------------------------------------

/// Decide the effective link style for one library.
///
/// The library's declared [`Linkage`] wins over the requested style:
///
/// | preferred | requested              | effective   |
/// |-----------|------------------------|-------------|
/// | `Shared`  | any                    | `Shared`    |
/// | `Static`  | `Static`               | `Static`    |
/// | `Static`  | `StaticPic` / `Shared` | `StaticPic` |
/// | `Any`     | any                    | requested   |
#[must_use]
pub const fn resolve_link_style(preferred: Linkage, requested: LinkStyle) -> LinkStyle {
    match preferred {
        Linkage::Shared => LinkStyle::Shared,
        Linkage::Static => match requested {
            LinkStyle::Static => LinkStyle::Static,
            LinkStyle::StaticPic | LinkStyle::Shared => LinkStyle::StaticPic,
        },
        Linkage::Any => requested,
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Error for linkage/link-style strings that don't name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseLinkageError {
    /// Which enum was being parsed (`"linkage"` or `"link style"`).
    pub expected: &'static str,
    /// The rejected input.
    pub got: String,
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LinkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Linkage {
    type Err = ParseLinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "any" => Ok(Self::Any),
            "static" => Ok(Self::Static),
            "shared" => Ok(Self::Shared),
            _ => Err(ParseLinkageError {
                expected: "linkage",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for LinkStyle {
    type Err = ParseLinkageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "static" => Ok(Self::Static),
            "static-pic" => Ok(Self::StaticPic),
            "shared" => Ok(Self::Shared),
            _ => Err(ParseLinkageError {
                expected: "link style",
                got: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
