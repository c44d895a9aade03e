/// Helper functions for Java extraction
/// Handles modifiers and type text
use crate::extractors::base::{BaseExtractor, Modifiers};
use tree_sitter::Node;

/// Collect the keyword modifiers of a declaration into a flag set.
/// Annotations inside the `modifiers` node are ignored.
pub(super) fn extract_modifiers(base: &BaseExtractor, node: Node) -> Modifiers {
    base.find_child_by_type(&node, "modifiers")
        .map(|modifiers_node| {
            modifiers_node
                .children(&mut modifiers_node.walk())
                .filter_map(|c| Modifiers::from_keyword(c.kind()))
                .fold(Modifiers::empty(), |acc, flag| acc | flag)
        })
        .unwrap_or_default()
}

/// Text of a type node with any interior line breaks collapsed
pub(super) fn type_text(base: &BaseExtractor, node: &Node) -> String {
    base.get_node_text(node)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `type` field of a declaration, with trailing `[]` dimensions appended when present
pub(super) fn declared_type(base: &BaseExtractor, node: &Node) -> String {
    let mut declared = node
        .child_by_field_name("type")
        .map(|t| type_text(base, &t))
        .unwrap_or_default();
    if let Some(dims) = node.child_by_field_name("dimensions") {
        declared.push_str(&type_text(base, &dims).replace(' ', ""));
    }
    declared
}
