use docstruct::XmlElement;

/// Count descendants with the given tag name
pub fn count_tags(tree: &XmlElement, name: &str) -> usize {
    tree.descendants()
        .filter(|element| element.name == name)
        .count()
}

/// Text of every run element, in document order
pub fn run_texts(tree: &XmlElement) -> Vec<String> {
    tree.descendants()
        .filter(|element| element.name == "Run")
        .map(|element| element.text.clone())
        .collect()
}

/// Assert that the raw output contains a fragment
#[macro_export]
macro_rules! assert_structure_contains {
    ($structure:expr, $fragment:expr) => {
        assert!(
            $structure.raw.contains($fragment),
            "structure should contain '{}', but the output was:\n{}",
            $fragment,
            $structure.raw
        );
    };
}

/// Assert that the raw output does NOT contain a fragment
#[macro_export]
macro_rules! assert_structure_not_contains {
    ($structure:expr, $fragment:expr) => {
        assert!(
            !$structure.raw.contains($fragment),
            "structure should NOT contain '{}', but it was found in:\n{}",
            $fragment,
            $structure.raw
        );
    };
}

/// Assert the number of elements with a tag name in the parsed tree
#[macro_export]
macro_rules! assert_tag_count {
    ($structure:expr, $name:expr, $count:expr) => {
        let found = $crate::common::xml_assertions::count_tags(&$structure.tree, $name);
        assert_eq!(
            found, $count,
            "Expected {} <{}> elements, got {}",
            $count, $name, found
        );
    };
}
