use docstruct::{
    Bookmark, FieldStart, FieldType, HeaderFooter, HeaderFooterKind, NodeEvent, Paragraph, Run,
    Section,
};

/// Wrap body-level events in the document/section/body skeleton
pub fn document(body: Vec<NodeEvent>) -> Vec<NodeEvent> {
    let mut events = vec![
        NodeEvent::DocumentStart,
        NodeEvent::SectionStart(Section::default()),
        NodeEvent::BodyStart,
    ];
    events.extend(body);
    events.extend([
        NodeEvent::BodyEnd,
        NodeEvent::SectionEnd,
        NodeEvent::DocumentEnd,
    ]);
    events
}

/// Wrap inline events in a default paragraph
pub fn paragraph(inner: Vec<NodeEvent>) -> Vec<NodeEvent> {
    let mut events = vec![NodeEvent::ParagraphStart(Paragraph::default())];
    events.extend(inner);
    events.push(NodeEvent::ParagraphEnd);
    events
}

/// A paragraph holding a single text run
pub fn paragraph_with_text(text: &str) -> Vec<NodeEvent> {
    paragraph(vec![run(text)])
}

pub fn run(text: &str) -> NodeEvent {
    NodeEvent::Run(Run::new(text))
}

/// The five-node sequence a resolved field arrives as
pub fn field(field_type: FieldType, code: &str, value: &str) -> Vec<NodeEvent> {
    vec![
        NodeEvent::FieldStart(FieldStart::with_code(field_type, code)),
        run(code),
        NodeEvent::FieldSeparator,
        run(value),
        NodeEvent::FieldEnd,
    ]
}

pub fn doc_property_field(name: &str, value: &str) -> Vec<NodeEvent> {
    field(
        FieldType::DocProperty,
        &format!("docproperty {name}"),
        value,
    )
}

pub fn doc_variable_field(name: &str, value: &str) -> Vec<NodeEvent> {
    field(
        FieldType::DocVariable,
        &format!("docvariable {name}"),
        value,
    )
}

/// A rows-by-cells table where every cell holds one paragraph of text
pub fn table(rows: usize, cells_per_row: usize) -> Vec<NodeEvent> {
    let mut events = vec![NodeEvent::TableStart];
    for row in 0..rows {
        events.push(NodeEvent::RowStart);
        for cell in 0..cells_per_row {
            events.push(NodeEvent::CellStart);
            events.extend(paragraph_with_text(&format!("r{row}c{cell}")));
            events.push(NodeEvent::CellEnd);
        }
        events.push(NodeEvent::RowEnd);
    }
    events.push(NodeEvent::TableEnd);
    events
}

/// Inline events bracketed by a named bookmark
pub fn bookmarked(name: &str, inner: Vec<NodeEvent>) -> Vec<NodeEvent> {
    let mut events = vec![NodeEvent::BookmarkStart(Bookmark::new(name))];
    events.extend(inner);
    events.push(NodeEvent::BookmarkEnd(Bookmark::new(name)));
    events
}

/// A header or footer story holding one paragraph of text
pub fn header_footer(kind: HeaderFooterKind, text: &str) -> Vec<NodeEvent> {
    let story = HeaderFooter {
        kind,
        linked_to_previous: false,
    };
    let mut events = vec![NodeEvent::HeaderFooterStart(story.clone())];
    events.extend(paragraph_with_text(text));
    events.push(NodeEvent::HeaderFooterEnd(story));
    events
}
