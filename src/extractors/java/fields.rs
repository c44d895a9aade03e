/// Field extraction
use crate::extractors::base::FieldSymbol;
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// One `FieldSymbol` per declarator: `int a, b;` yields `a` and `b`, both `int`
pub(super) fn extract_fields(extractor: &JavaExtractor, node: Node) -> Vec<FieldSymbol> {
    let base = extractor.base();
    let declared_type = node
        .child_by_field_name("type")
        .map(|t| helpers::type_text(base, &t))
        .unwrap_or_default();

    node.children_by_field_name("declarator", &mut node.walk())
        .filter(|d| d.kind() == "variable_declarator")
        .filter_map(|d| base.get_field_text(&d, "name"))
        .map(|name| FieldSymbol {
            declared_type: declared_type.clone(),
            name,
        })
        .collect()
}
