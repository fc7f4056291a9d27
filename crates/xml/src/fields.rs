//! Recognition of document-property and document-variable fields.
//!
//! A field of either kind arrives as `FieldStart -> Run(field code) ->
//! FieldSeparator -> Run(s)(cached value) -> FieldEnd`. The field code run
//! carries the name as literal text ("docproperty Title"); the state here
//! tracks which named field is open and which upcoming nodes to suppress so
//! the code run and separator never reach the output while the cached value
//! runs do.

use docstruct_model::nodes::{FieldStart, FieldType};

pub(crate) const DOC_PROPERTY_PREFIX: &str = "docproperty";
pub(crate) const DOC_VARIABLE_PREFIX: &str = "docvariable";

/// Property names the host word processor defines itself; anything else
/// named by a docproperty field is a custom property.
pub(crate) const BUILT_IN_PROPERTY_NAMES: [&str; 13] = [
    "Title",
    "Subject",
    "Author",
    "Company",
    "Keywords",
    "Category",
    "Comments",
    "Manager",
    "Content Type",
    "Content Status",
    "Language",
    "Document Version",
    "Hyperlink Base",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NamedFieldKind {
    BuiltInProperty,
    CustomProperty,
    DocumentVariable,
}

impl NamedFieldKind {
    /// Base of the marker tag pair; `Start`/`End` is appended by the caller.
    pub(crate) fn tag_base(self) -> &'static str {
        match self {
            NamedFieldKind::BuiltInProperty => "BuiltInDocumentProperty",
            NamedFieldKind::CustomProperty => "CustomDocumentProperty",
            NamedFieldKind::DocumentVariable => "DocumentVariable",
        }
    }
}

/// A recognized field between its start and end nodes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NamedField {
    pub(crate) kind: NamedFieldKind,
    pub(crate) name: String,
}

/// Per-traversal machine state. At most one named field is open at a time;
/// the source model does not nest them.
#[derive(Debug, Default)]
pub(crate) struct FieldState {
    /// The next run is the field code and must not be emitted.
    pub(crate) skip_run: bool,
    /// The next field separator belongs to a recognized field and must not
    /// be emitted.
    pub(crate) skip_separator: bool,
    pub(crate) open: Option<NamedField>,
}

pub(crate) fn is_resolvable(field_type: FieldType) -> bool {
    matches!(field_type, FieldType::DocProperty | FieldType::DocVariable)
}

/// Classifies a field-start node by its sibling field-code text. Returns
/// `None` when the field is not a property/variable field, or when the code
/// text is missing or does not carry the expected prefix.
pub(crate) fn recognize(field_start: &FieldStart) -> Option<NamedField> {
    let code = field_start.field_code.as_deref()?;
    match field_start.field_type {
        FieldType::DocProperty => {
            let name = extract_field_name(code, DOC_PROPERTY_PREFIX)?;
            let kind = classify_property(&name);
            Some(NamedField { kind, name })
        }
        FieldType::DocVariable => {
            let name = extract_field_name(code, DOC_VARIABLE_PREFIX)?;
            Some(NamedField {
                kind: NamedFieldKind::DocumentVariable,
                name,
            })
        }
        _ => None,
    }
}

pub(crate) fn classify_property(name: &str) -> NamedFieldKind {
    if BUILT_IN_PROPERTY_NAMES.contains(&name) {
        NamedFieldKind::BuiltInProperty
    } else {
        NamedFieldKind::CustomProperty
    }
}

/// Strips the field-code prefix token (case-insensitively, at a word
/// boundary) and returns the trimmed remainder as the name.
pub(crate) fn extract_field_name(code: &str, prefix: &str) -> Option<String> {
    let trimmed = code.trim_start();
    let head = trimmed.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let rest = &trimmed[prefix.len()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
