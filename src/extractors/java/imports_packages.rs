/// Package declaration extraction
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

/// Dotted package name of the first `package_declaration` under the root,
/// or an empty string for the default package
pub(super) fn extract_package(extractor: &JavaExtractor, root: Node) -> String {
    let base = extractor.base();
    let Some(package_node) = base.find_child_by_type(&root, "package_declaration") else {
        return String::new();
    };

    match base.find_child_by_types(&package_node, &["scoped_identifier", "identifier"]) {
        Some(name_node) => base
            .get_node_text(&name_node)
            .split_whitespace()
            .collect::<String>(),
        None => {
            // Recovered trees may lose the name node; fall back to stripping tokens
            let text = base.get_node_text(&package_node);
            text.trim()
                .trim_start_matches("package")
                .trim_end_matches(';')
                .split_whitespace()
                .collect::<String>()
        }
    }
}
