//! Tag fragment rendering: quoted attributes, entity encoding and the
//! control-character pass for text content.
//!
//! Everything here is a pure text transform appending to the output buffer.
//! Fragments are newline-terminated except where a caller needs the payload
//! to follow on the same line (picture shapes).

use std::borrow::Cow;

/// One attribute, name plus a value already rendered for quoting.
///
/// The two constructors carry the encoding contract: values originating
/// from document text must be entity-encoded before they land between
/// quotes, while enumerated and numeric values cannot contain
/// markup-breaking characters and are taken verbatim.
pub(crate) struct Attr {
    name: &'static str,
    value: String,
}

impl Attr {
    /// An enumerated or numeric value, used verbatim.
    pub(crate) fn literal(name: &'static str, value: impl Into<String>) -> Self {
        Attr {
            name,
            value: value.into(),
        }
    }

    /// Free-form document text, entity-encoded.
    pub(crate) fn text(name: &'static str, value: &str) -> Self {
        Attr {
            name,
            value: quick_xml::escape::escape(value).into_owned(),
        }
    }
}

fn push_attr(buf: &mut String, attr: &Attr) {
    buf.push_str(attr.name);
    buf.push_str("=\"");
    buf.push_str(&attr.value);
    buf.push('"');
}

/// `<Name>` or `<Name A="v" B="w" >`, without the trailing newline.
///
/// Used directly for shape tags whose base64 payload must sit adjacent to
/// the opening tag.
pub(crate) fn append_open_unterminated(buf: &mut String, name: &str, attrs: &[Attr]) {
    buf.push('<');
    buf.push_str(name);
    if !attrs.is_empty() {
        for attr in attrs {
            buf.push(' ');
            push_attr(buf, attr);
        }
        buf.push(' ');
    }
    buf.push('>');
}

/// Newline-terminated opening tag.
pub(crate) fn append_open(buf: &mut String, name: &str, attrs: &[Attr]) {
    append_open_unterminated(buf, name, attrs);
    buf.push('\n');
}

/// `</Name>` plus newline.
pub(crate) fn append_close(buf: &mut String, name: &str) {
    buf.push_str("</");
    buf.push_str(name);
    buf.push_str(">\n");
}

/// `<Name />` or `<Name A="v" />`, newline-terminated.
pub(crate) fn append_empty(buf: &mut String, name: &str, attrs: &[Attr]) {
    buf.push('<');
    buf.push_str(name);
    for attr in attrs {
        buf.push(' ');
        push_attr(buf, attr);
    }
    buf.push_str(" />\n");
}

/// `<Name>text</Name>` with the text run through [`encode_text`],
/// newline-terminated.
pub(crate) fn append_text_element(buf: &mut String, name: &str, attrs: &[Attr], text: &str) {
    append_open_unterminated(buf, name, attrs);
    buf.push_str(&encode_text(text));
    append_close(buf, name);
}

/// Encodes element text content: entity encoding first, then any remaining
/// control character is mapped to its printable `escape_default` form so
/// the buffer stays parseable as XML 1.0.
pub(crate) fn encode_text(raw: &str) -> Cow<'_, str> {
    let escaped = quick_xml::escape::escape(raw);
    if !escaped.contains(|c: char| c.is_control()) {
        return escaped;
    }
    let mut out = String::with_capacity(escaped.len() + 4);
    for c in escaped.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}
