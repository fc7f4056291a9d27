//! The structural visitor: accumulates one XML fragment per visited node.

use base64::Engine;
use docstruct_model::control_chars;
use docstruct_model::nodes::{
    Bookmark, ContentControl, FieldStart, HeaderFooter, Paragraph, Run, Section, Shape,
};
use docstruct_model::visitor::DocumentVisitor;

use crate::emitter::{self, Attr};
use crate::error::StructureError;
use crate::fields::{self, FieldState};
use crate::finalize::{self, XmlElement};
use crate::options::StructureOptions;

/// Builds a structural XML snapshot of a document tree as a traversal
/// driver feeds it visitor callbacks.
///
/// One instance serves one traversal: the output buffer and field state are
/// exclusively owned, so serializing documents concurrently means one
/// builder per document. After the walk completes, [`as_xml`] parses the
/// accumulated buffer and returns the structure tree.
///
/// [`as_xml`]: XmlStructureBuilder::as_xml
pub struct XmlStructureBuilder {
    options: StructureOptions,
    buffer: String,
    field_state: FieldState,
}

impl XmlStructureBuilder {
    pub fn new(options: StructureOptions) -> Self {
        XmlStructureBuilder {
            options,
            buffer: String::new(),
            field_state: FieldState::default(),
        }
    }

    /// Parses the accumulated buffer into the structure tree.
    ///
    /// This is the single validation gate. Calling it before the walk
    /// completes (unbalanced tags), or after an unencoded value corrupted
    /// the markup, yields [`StructureError::MalformedOutput`].
    pub fn as_xml(&self) -> Result<XmlElement, StructureError> {
        finalize::parse_structure(&self.buffer)
    }

    /// The raw accumulated buffer, for diagnostics and byte-exact checks.
    pub fn raw_xml(&self) -> &str {
        &self.buffer
    }
}

impl Default for XmlStructureBuilder {
    fn default() -> Self {
        XmlStructureBuilder::new(StructureOptions::default())
    }
}

impl DocumentVisitor for XmlStructureBuilder {
    // --- Document skeleton ---

    fn visit_document_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Document", &[]);
    }

    fn visit_document_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Document");
    }

    fn visit_section_start(&mut self, section: &Section) {
        if self.options.include_formatting {
            emitter::append_open(
                &mut self.buffer,
                "Section",
                &[
                    Attr::literal("PaperSize", section.paper_size.as_str()),
                    Attr::literal("Orientation", section.orientation.as_str()),
                ],
            );
        } else {
            emitter::append_open(&mut self.buffer, "Section", &[]);
        }
    }

    fn visit_section_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Section");
    }

    fn visit_body_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Body", &[]);
    }

    fn visit_body_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Body");
    }

    fn visit_paragraph_start(&mut self, paragraph: &Paragraph) {
        if self.options.include_formatting {
            emitter::append_open(
                &mut self.buffer,
                "Paragraph",
                &[
                    Attr::literal("StyleIdentifier", paragraph.style_identifier.as_str()),
                    Attr::text("StyleName", &paragraph.style_name),
                ],
            );
        } else {
            emitter::append_open(&mut self.buffer, "Paragraph", &[]);
        }
    }

    fn visit_paragraph_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Paragraph");
    }

    fn visit_run(&mut self, run: &Run) {
        if self.field_state.skip_run {
            // The field-code run of a recognized field; its separator is
            // next in line.
            self.field_state.skip_run = false;
            self.field_state.skip_separator = true;
        } else if run.text.contains(control_chars::PAGE_BREAK) {
            // The whole run collapses into the marker; co-located text is
            // dropped with it.
            emitter::append_empty(&mut self.buffer, "PageBreak", &[]);
        } else if self.options.include_formatting {
            let font = &run.font;
            emitter::append_text_element(
                &mut self.buffer,
                "Run",
                &[
                    Attr::text("Font", &font.name),
                    Attr::literal("StyleIdentifier", font.style_identifier.as_str()),
                    Attr::literal("Size", font.size.to_string()),
                    Attr::literal("Language", font.locale_id.to_string()),
                ],
                &run.text,
            );
        } else {
            emitter::append_text_element(&mut self.buffer, "Run", &[], &run.text);
        }
    }

    // --- Tables ---

    fn visit_table_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Table", &[]);
    }

    fn visit_table_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Table");
    }

    fn visit_row_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Row", &[]);
    }

    fn visit_row_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Row");
    }

    fn visit_cell_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Cell", &[]);
    }

    fn visit_cell_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Cell");
    }

    // --- Drawing ---

    fn visit_shape_start(&mut self, shape: &Shape) {
        // No newline: an embedded picture payload sits directly after the
        // opening tag.
        emitter::append_open_unterminated(
            &mut self.buffer,
            "Shape",
            &[
                Attr::literal("Width", shape.width.to_string()),
                Attr::literal("Height", shape.height.to_string()),
            ],
        );
        if self.options.include_pictures
            && let Some(bytes) = &shape.image_data
        {
            self.buffer
                .push_str(&base64::engine::general_purpose::STANDARD.encode(bytes));
        }
    }

    fn visit_shape_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Shape");
    }

    fn visit_group_shape_start(&mut self) {
        emitter::append_open(&mut self.buffer, "GroupShape", &[]);
    }

    fn visit_group_shape_end(&mut self) {
        emitter::append_close(&mut self.buffer, "GroupShape");
    }

    // --- Headers and footers ---

    fn visit_header_footer_start(&mut self, header_footer: &HeaderFooter) {
        let tag = if header_footer.kind.is_header() {
            "Header"
        } else {
            "Footer"
        };
        if self.options.include_formatting {
            emitter::append_open(
                &mut self.buffer,
                tag,
                &[
                    Attr::literal("Type", header_footer.kind.placement()),
                    Attr::literal(
                        "LinkedToPrevious",
                        header_footer.linked_to_previous.to_string(),
                    ),
                ],
            );
        } else {
            emitter::append_open(&mut self.buffer, tag, &[]);
        }
    }

    fn visit_header_footer_end(&mut self, header_footer: &HeaderFooter) {
        let tag = if header_footer.kind.is_header() {
            "Header"
        } else {
            "Footer"
        };
        emitter::append_close(&mut self.buffer, tag);
    }

    // --- Bookmarks ---

    fn visit_bookmark_start(&mut self, bookmark: &Bookmark) {
        emitter::append_empty(
            &mut self.buffer,
            "BookmarkStart",
            &[Attr::text("Name", &bookmark.name)],
        );
    }

    fn visit_bookmark_end(&mut self, bookmark: &Bookmark) {
        emitter::append_empty(
            &mut self.buffer,
            "BookmarkEnd",
            &[Attr::text("Name", &bookmark.name)],
        );
    }

    // --- Fields ---

    fn visit_field_start(&mut self, field_start: &FieldStart) {
        if fields::is_resolvable(field_start.field_type) {
            if let Some(field) = fields::recognize(field_start) {
                log::debug!("Recognized named field '{}'", field.name);
                let tag = format!("{}Start", field.kind.tag_base());
                emitter::append_empty(&mut self.buffer, &tag, &[Attr::text("Name", &field.name)]);
                self.field_state.skip_run = true;
                self.field_state.open = Some(field);
                return;
            }
            log::warn!(
                "Field code {:?} does not name a document property or variable, emitting generic markers",
                field_start.field_code
            );
        }
        emitter::append_empty(&mut self.buffer, "FieldStart", &[]);
    }

    fn visit_field_separator(&mut self) {
        if self.field_state.skip_separator {
            self.field_state.skip_separator = false;
        } else {
            emitter::append_empty(&mut self.buffer, "FieldSeparator", &[]);
        }
    }

    fn visit_field_end(&mut self) {
        match self.field_state.open.take() {
            Some(field) => {
                let tag = format!("{}End", field.kind.tag_base());
                emitter::append_empty(&mut self.buffer, &tag, &[Attr::text("Name", &field.name)]);
            }
            None => emitter::append_empty(&mut self.buffer, "FieldEnd", &[]),
        }
    }

    fn visit_form_field(&mut self) {
        emitter::append_empty(&mut self.buffer, "FormField", &[]);
    }

    // --- Notes and comments ---

    fn visit_footnote_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Footnote", &[]);
    }

    fn visit_footnote_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Footnote");
    }

    fn visit_comment_start(&mut self) {
        emitter::append_open(&mut self.buffer, "Comment", &[]);
    }

    fn visit_comment_end(&mut self) {
        emitter::append_close(&mut self.buffer, "Comment");
    }

    fn visit_comment_range_start(&mut self) {
        emitter::append_open(&mut self.buffer, "CommentRange", &[]);
    }

    fn visit_comment_range_end(&mut self) {
        emitter::append_close(&mut self.buffer, "CommentRange");
    }

    // --- Glossary ---

    fn visit_building_block_start(&mut self) {
        emitter::append_open(&mut self.buffer, "BuildingBlock", &[]);
    }

    fn visit_building_block_end(&mut self) {
        emitter::append_close(&mut self.buffer, "BuildingBlock");
    }

    fn visit_glossary_document_start(&mut self) {
        emitter::append_open(&mut self.buffer, "GlossaryDocument", &[]);
    }

    fn visit_glossary_document_end(&mut self) {
        emitter::append_close(&mut self.buffer, "GlossaryDocument");
    }

    // --- Markup regions ---

    fn visit_content_control_start(&mut self, content_control: &ContentControl) {
        if self.options.include_formatting {
            emitter::append_open(
                &mut self.buffer,
                "ContentControl",
                &[
                    Attr::literal("Type", content_control.control_type.as_str()),
                    Attr::text("Title", &content_control.title),
                    Attr::text("Tag", &content_control.tag),
                ],
            );
        } else {
            emitter::append_open(&mut self.buffer, "ContentControl", &[]);
        }
    }

    fn visit_content_control_end(&mut self) {
        emitter::append_close(&mut self.buffer, "ContentControl");
    }

    fn visit_custom_xml_markup_start(&mut self) {
        emitter::append_open(&mut self.buffer, "CustomXmlMarkup", &[]);
    }

    fn visit_custom_xml_markup_end(&mut self) {
        emitter::append_close(&mut self.buffer, "CustomXmlMarkup");
    }

    fn visit_smart_tag_start(&mut self) {
        emitter::append_open(&mut self.buffer, "SmartTag", &[]);
    }

    fn visit_smart_tag_end(&mut self) {
        emitter::append_close(&mut self.buffer, "SmartTag");
    }

    // --- Math ---

    fn visit_office_math_start(&mut self) {
        emitter::append_open(&mut self.buffer, "OfficeMath", &[]);
    }

    fn visit_office_math_end(&mut self) {
        emitter::append_close(&mut self.buffer, "OfficeMath");
    }

    // --- Special characters ---

    fn visit_special_char(&mut self) {
        emitter::append_empty(&mut self.buffer, "SpecialChar", &[]);
    }
}
