//! Single-pass structural XML serializer for word-processing document trees.
//!
//! A traversal driver feeds [`XmlStructureBuilder`] one visitor callback per
//! node; the builder appends one tag fragment per callback and resolves
//! document-property and document-variable fields into named marker tags.
//! [`XmlStructureBuilder::as_xml`] parses the finished buffer and is the
//! single point where malformed output surfaces.

pub mod builder;
pub mod error;
pub mod finalize;
pub mod options;

mod emitter;
mod fields;

pub use builder::XmlStructureBuilder;
pub use error::StructureError;
pub use finalize::{XmlElement, parse_structure};
pub use options::StructureOptions;
