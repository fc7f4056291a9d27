pub mod fixtures;
pub mod xml_assertions;

use docstruct::{
    NodeEvent, StructureError, StructureOptions, XmlElement, XmlStructureBuilder, dispatch_all,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a finished serialization with helper methods
pub struct SerializedStructure {
    pub raw: String,
    pub tree: XmlElement,
}

impl SerializedStructure {
    /// Text content of the first element with the given tag name
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.tree.find(name).map(|element| element.text.as_str())
    }

    /// Attribute of the first element with the given tag name
    pub fn attribute_of(&self, name: &str, attribute: &str) -> Option<&str> {
        self.tree.find(name).and_then(|e| e.attribute(attribute))
    }
}

/// Serialize a captured walk with default options and finalize it
pub fn serialize(events: &[NodeEvent]) -> Result<SerializedStructure, StructureError> {
    serialize_with_options(events, StructureOptions::default())
}

/// Serialize a captured walk and finalize it
pub fn serialize_with_options(
    events: &[NodeEvent],
    options: StructureOptions,
) -> Result<SerializedStructure, StructureError> {
    let mut builder = XmlStructureBuilder::new(options);
    dispatch_all(events, &mut builder);
    let tree = builder.as_xml()?;
    Ok(SerializedStructure {
        raw: builder.raw_xml().to_string(),
        tree,
    })
}

/// Serialize without finalizing, for byte-exact and unbalanced-walk checks
pub fn serialize_raw(events: &[NodeEvent], options: StructureOptions) -> String {
    let mut builder = XmlStructureBuilder::new(options);
    dispatch_all(events, &mut builder);
    builder.raw_xml().to_string()
}
