//! Parses the accumulated buffer into an owned element tree.
//!
//! This is the single validation gate: nothing checks well-formedness
//! during traversal, so an unbalanced walk or an encoding defect surfaces
//! here and nowhere else.

use crate::error::StructureError;

/// One element of the parsed structure, owned and detached from the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content directly under this element, entities
    /// decoded.
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// All elements of the subtree, this one included, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First descendant with the given tag name, in document order.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|element| element.name == name)
    }

    /// Number of descendants with the given tag name.
    pub fn count(&self, name: &str) -> usize {
        self.descendants()
            .filter(|element| element.name == name)
            .count()
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Parses serialized structure text into its root element.
pub fn parse_structure(xml: &str) -> Result<XmlElement, StructureError> {
    let document =
        roxmltree::Document::parse(xml).map_err(|source| StructureError::MalformedOutput {
            xml: xml.to_string(),
            source,
        })?;
    Ok(convert(document.root_element()))
}

fn convert(node: roxmltree::Node<'_, '_>) -> XmlElement {
    let mut element = XmlElement {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        text: String::new(),
        children: Vec::new(),
    };
    for child in node.children() {
        if child.is_element() {
            element.children.push(convert(child));
        } else if child.is_text()
            && let Some(text) = child.text()
        {
            element.text.push_str(text);
        }
    }
    element
}
