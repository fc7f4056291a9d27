//! Serialization options, fixed at builder construction.

use serde::{Deserialize, Serialize};

/// Controls how much detail the structural snapshot records.
///
/// Both switches default to off: the bare structure (tag nesting, run text,
/// bookmark and field markers) is always captured, while formatting
/// attributes and embedded picture payloads are opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureOptions {
    /// Emit style, font and page-layout attributes on the tags that carry
    /// them (sections, paragraphs, runs, headers/footers, content controls).
    pub include_formatting: bool,
    /// Embed the image bytes of picture shapes as base64 text inside the
    /// shape tag.
    pub include_pictures: bool,
}
