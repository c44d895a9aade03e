/// Class extraction
use crate::extractors::base::{ClassSymbol, Modifiers, Visibility};
use crate::extractors::java::JavaExtractor;
use tracing::debug;
use tree_sitter::Node;

use super::{fields, helpers, methods};

/// Extract a class declaration with its direct fields and non-private methods.
/// Nested classes are picked up separately by the tree walk.
pub(super) fn extract_class(extractor: &JavaExtractor, node: Node) -> Option<ClassSymbol> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;
    let modifiers = helpers::extract_modifiers(base, node);

    let mut class_fields = Vec::new();
    let mut class_methods = Vec::new();

    let method_kinds = crate::language::get_method_node_kinds("java");

    if let Some(body) = node.child_by_field_name("body") {
        for decl in body.named_children(&mut body.walk()) {
            match decl.kind() {
                "field_declaration" => class_fields.extend(fields::extract_fields(extractor, decl)),
                kind if method_kinds.contains(&kind) => {
                    let Some(method) = methods::extract_method(extractor, decl) else {
                        continue;
                    };
                    // Private methods are not externally testable
                    if method.visibility == Visibility::Private {
                        debug!("Skipping private method {}.{}", name, method.name);
                        continue;
                    }
                    class_methods.push(method);
                }
                _ => {}
            }
        }
    }

    let (start_line, end_line) = base.line_range(&node);

    Some(ClassSymbol {
        name,
        is_public: modifiers.contains(Modifiers::PUBLIC),
        is_primary: false,
        fields: class_fields,
        methods: class_methods,
        start_line,
        end_line,
    })
}
