//! The document-side protocol for structural serialization.
//!
//! This crate defines the seam between a traversal driver that walks a
//! word-processing document tree and the consumers that observe the walk:
//! read-only node payload types ([`nodes`]), the [`DocumentVisitor`]
//! callback trait, an owned [`NodeEvent`] form of the same callbacks for
//! drivers and tests that prefer plain data, and the document
//! control-character constants ([`control_chars`]).
//!
//! It deliberately carries no document object model: node payloads expose
//! exactly what structural consumers read, nothing more.

pub mod control_chars;
pub mod event;
pub mod nodes;
pub mod visitor;

pub use event::{NodeEvent, dispatch, dispatch_all};
pub use nodes::{
    Bookmark, ContentControl, ContentControlType, FieldStart, FieldType, Font, HeaderFooter,
    HeaderFooterKind, Orientation, PaperSize, Paragraph, Run, Section, Shape, StyleIdentifier,
};
pub use visitor::DocumentVisitor;
