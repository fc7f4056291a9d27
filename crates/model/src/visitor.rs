//! Defines the `DocumentVisitor` trait, which decouples traversal drivers
//! from the specific consumer of the node stream (e.g. the structural XML
//! serializer).

use crate::nodes::{
    Bookmark, ContentControl, FieldStart, HeaderFooter, Paragraph, Run, Section, Shape,
};

/// Receives one callback per node as a driver walks a document tree in
/// depth-first order.
///
/// Composite node kinds arrive as `visit_<kind>_start` / `visit_<kind>_end`
/// pairs bracketing the callbacks of their children; leaf kinds arrive as a
/// single call. Every method has a no-op default, so a consumer implements
/// only the kinds it cares about. Callbacks return `()`: a visitor observes
/// the walk, it cannot cancel or redirect it.
pub trait DocumentVisitor {
    // --- Document skeleton ---
    fn visit_document_start(&mut self) {}
    fn visit_document_end(&mut self) {}

    fn visit_section_start(&mut self, _section: &Section) {}
    fn visit_section_end(&mut self) {}

    fn visit_body_start(&mut self) {}
    fn visit_body_end(&mut self) {}

    fn visit_paragraph_start(&mut self, _paragraph: &Paragraph) {}
    fn visit_paragraph_end(&mut self) {}

    fn visit_run(&mut self, _run: &Run) {}

    // --- Tables ---
    fn visit_table_start(&mut self) {}
    fn visit_table_end(&mut self) {}

    fn visit_row_start(&mut self) {}
    fn visit_row_end(&mut self) {}

    fn visit_cell_start(&mut self) {}
    fn visit_cell_end(&mut self) {}

    // --- Drawing ---
    fn visit_shape_start(&mut self, _shape: &Shape) {}
    fn visit_shape_end(&mut self) {}

    fn visit_group_shape_start(&mut self) {}
    fn visit_group_shape_end(&mut self) {}

    // --- Headers and footers ---
    /// The end callback receives the handle again: the closing tag name
    /// depends on which slot the story occupies.
    fn visit_header_footer_start(&mut self, _header_footer: &HeaderFooter) {}
    fn visit_header_footer_end(&mut self, _header_footer: &HeaderFooter) {}

    // --- Bookmarks ---
    fn visit_bookmark_start(&mut self, _bookmark: &Bookmark) {}
    fn visit_bookmark_end(&mut self, _bookmark: &Bookmark) {}

    // --- Fields ---
    fn visit_field_start(&mut self, _field_start: &FieldStart) {}
    fn visit_field_separator(&mut self) {}
    fn visit_field_end(&mut self) {}

    fn visit_form_field(&mut self) {}

    // --- Notes and comments ---
    fn visit_footnote_start(&mut self) {}
    fn visit_footnote_end(&mut self) {}

    fn visit_comment_start(&mut self) {}
    fn visit_comment_end(&mut self) {}

    fn visit_comment_range_start(&mut self) {}
    fn visit_comment_range_end(&mut self) {}

    // --- Glossary ---
    fn visit_building_block_start(&mut self) {}
    fn visit_building_block_end(&mut self) {}

    fn visit_glossary_document_start(&mut self) {}
    fn visit_glossary_document_end(&mut self) {}

    // --- Markup regions ---
    fn visit_content_control_start(&mut self, _content_control: &ContentControl) {}
    fn visit_content_control_end(&mut self) {}

    fn visit_custom_xml_markup_start(&mut self) {}
    fn visit_custom_xml_markup_end(&mut self) {}

    fn visit_smart_tag_start(&mut self) {}
    fn visit_smart_tag_end(&mut self) {}

    // --- Math ---
    fn visit_office_math_start(&mut self) {}
    fn visit_office_math_end(&mut self) {}

    // --- Special characters ---
    fn visit_special_char(&mut self) {}
}
