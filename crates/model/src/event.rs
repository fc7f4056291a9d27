//! An owned event form of the traversal, one variant per node-kind callback.
//!
//! Drivers that cannot hold a borrow of the document while walking (or tests
//! that want to describe a walk as plain data) build a `Vec<NodeEvent>` and
//! replay it through [`dispatch_all`].

use crate::nodes::{
    Bookmark, ContentControl, FieldStart, HeaderFooter, Paragraph, Run, Section, Shape,
};
use crate::visitor::DocumentVisitor;

/// One traversal callback, captured as data.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEvent {
    DocumentStart,
    DocumentEnd,
    SectionStart(Section),
    SectionEnd,
    BodyStart,
    BodyEnd,
    ParagraphStart(Paragraph),
    ParagraphEnd,
    Run(Run),
    TableStart,
    TableEnd,
    RowStart,
    RowEnd,
    CellStart,
    CellEnd,
    ShapeStart(Shape),
    ShapeEnd,
    GroupShapeStart,
    GroupShapeEnd,
    HeaderFooterStart(HeaderFooter),
    HeaderFooterEnd(HeaderFooter),
    BookmarkStart(Bookmark),
    BookmarkEnd(Bookmark),
    FieldStart(FieldStart),
    FieldSeparator,
    FieldEnd,
    FormField,
    FootnoteStart,
    FootnoteEnd,
    CommentStart,
    CommentEnd,
    CommentRangeStart,
    CommentRangeEnd,
    BuildingBlockStart,
    BuildingBlockEnd,
    GlossaryDocumentStart,
    GlossaryDocumentEnd,
    ContentControlStart(ContentControl),
    ContentControlEnd,
    CustomXmlMarkupStart,
    CustomXmlMarkupEnd,
    SmartTagStart,
    SmartTagEnd,
    OfficeMathStart,
    OfficeMathEnd,
    SpecialChar,
}

/// Forwards one captured event to the matching visitor callback.
pub fn dispatch(event: &NodeEvent, visitor: &mut dyn DocumentVisitor) {
    match event {
        NodeEvent::DocumentStart => visitor.visit_document_start(),
        NodeEvent::DocumentEnd => visitor.visit_document_end(),
        NodeEvent::SectionStart(section) => visitor.visit_section_start(section),
        NodeEvent::SectionEnd => visitor.visit_section_end(),
        NodeEvent::BodyStart => visitor.visit_body_start(),
        NodeEvent::BodyEnd => visitor.visit_body_end(),
        NodeEvent::ParagraphStart(paragraph) => visitor.visit_paragraph_start(paragraph),
        NodeEvent::ParagraphEnd => visitor.visit_paragraph_end(),
        NodeEvent::Run(run) => visitor.visit_run(run),
        NodeEvent::TableStart => visitor.visit_table_start(),
        NodeEvent::TableEnd => visitor.visit_table_end(),
        NodeEvent::RowStart => visitor.visit_row_start(),
        NodeEvent::RowEnd => visitor.visit_row_end(),
        NodeEvent::CellStart => visitor.visit_cell_start(),
        NodeEvent::CellEnd => visitor.visit_cell_end(),
        NodeEvent::ShapeStart(shape) => visitor.visit_shape_start(shape),
        NodeEvent::ShapeEnd => visitor.visit_shape_end(),
        NodeEvent::GroupShapeStart => visitor.visit_group_shape_start(),
        NodeEvent::GroupShapeEnd => visitor.visit_group_shape_end(),
        NodeEvent::HeaderFooterStart(hf) => visitor.visit_header_footer_start(hf),
        NodeEvent::HeaderFooterEnd(hf) => visitor.visit_header_footer_end(hf),
        NodeEvent::BookmarkStart(bookmark) => visitor.visit_bookmark_start(bookmark),
        NodeEvent::BookmarkEnd(bookmark) => visitor.visit_bookmark_end(bookmark),
        NodeEvent::FieldStart(field_start) => visitor.visit_field_start(field_start),
        NodeEvent::FieldSeparator => visitor.visit_field_separator(),
        NodeEvent::FieldEnd => visitor.visit_field_end(),
        NodeEvent::FormField => visitor.visit_form_field(),
        NodeEvent::FootnoteStart => visitor.visit_footnote_start(),
        NodeEvent::FootnoteEnd => visitor.visit_footnote_end(),
        NodeEvent::CommentStart => visitor.visit_comment_start(),
        NodeEvent::CommentEnd => visitor.visit_comment_end(),
        NodeEvent::CommentRangeStart => visitor.visit_comment_range_start(),
        NodeEvent::CommentRangeEnd => visitor.visit_comment_range_end(),
        NodeEvent::BuildingBlockStart => visitor.visit_building_block_start(),
        NodeEvent::BuildingBlockEnd => visitor.visit_building_block_end(),
        NodeEvent::GlossaryDocumentStart => visitor.visit_glossary_document_start(),
        NodeEvent::GlossaryDocumentEnd => visitor.visit_glossary_document_end(),
        NodeEvent::ContentControlStart(cc) => visitor.visit_content_control_start(cc),
        NodeEvent::ContentControlEnd => visitor.visit_content_control_end(),
        NodeEvent::CustomXmlMarkupStart => visitor.visit_custom_xml_markup_start(),
        NodeEvent::CustomXmlMarkupEnd => visitor.visit_custom_xml_markup_end(),
        NodeEvent::SmartTagStart => visitor.visit_smart_tag_start(),
        NodeEvent::SmartTagEnd => visitor.visit_smart_tag_end(),
        NodeEvent::OfficeMathStart => visitor.visit_office_math_start(),
        NodeEvent::OfficeMathEnd => visitor.visit_office_math_end(),
        NodeEvent::SpecialChar => visitor.visit_special_char(),
    }
}

/// Replays a captured walk in order.
pub fn dispatch_all(events: &[NodeEvent], visitor: &mut dyn DocumentVisitor) {
    for event in events {
        dispatch(event, visitor);
    }
}
