//! # docstruct
//!
//! Structural XML snapshots of word-processing document trees.
//!
//! A document library walks its tree and calls one [`DocumentVisitor`]
//! callback per node; [`XmlStructureBuilder`] turns that walk into a
//! well-formed XML rendition of the document's structure. Document-property
//! and document-variable fields are resolved on the fly: their field-code
//! plumbing is suppressed and replaced with named marker tags while the
//! cached display value survives as ordinary run content.
//!
//! The workspace splits along the natural seam:
//!
//! - `docstruct-model`: the traversal protocol (node payload types, the
//!   visitor trait, and an owned event form of the walk).
//! - `docstruct-xml`: the serializer (tag emitter, field resolution,
//!   options, and the finalizing XML parse).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use docstruct::{
//!     NodeEvent, Paragraph, Run, Section, StructureOptions, XmlStructureBuilder, dispatch_all,
//! };
//!
//! let events = vec![
//!     NodeEvent::DocumentStart,
//!     NodeEvent::SectionStart(Section::default()),
//!     NodeEvent::BodyStart,
//!     NodeEvent::ParagraphStart(Paragraph::default()),
//!     NodeEvent::Run(Run::new("Hello World")),
//!     NodeEvent::ParagraphEnd,
//!     NodeEvent::BodyEnd,
//!     NodeEvent::SectionEnd,
//!     NodeEvent::DocumentEnd,
//! ];
//!
//! let mut builder = XmlStructureBuilder::new(StructureOptions::default());
//! dispatch_all(&events, &mut builder);
//!
//! let tree = builder.as_xml()?;
//! assert_eq!(tree.name, "Document");
//! assert_eq!(tree.find("Run").unwrap().text, "Hello World");
//! ```
//!
//! A driver holding a real document tree implements the walk itself and
//! calls the builder's [`DocumentVisitor`] methods directly; the event form
//! is equivalent and convenient for tests.

pub use docstruct_model::{
    Bookmark, ContentControl, ContentControlType, DocumentVisitor, FieldStart, FieldType, Font,
    HeaderFooter, HeaderFooterKind, NodeEvent, Orientation, PaperSize, Paragraph, Run, Section,
    Shape, StyleIdentifier, control_chars, dispatch, dispatch_all,
};
pub use docstruct_xml::{
    StructureError, StructureOptions, XmlElement, XmlStructureBuilder, parse_structure,
};
