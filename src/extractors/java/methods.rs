/// Method extraction
use crate::extractors::base::{MethodSymbol, Modifiers, Parameter, VOID_TYPE};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// Extract a method declaration. Constructors are a different node kind and never reach here.
pub(super) fn extract_method(extractor: &JavaExtractor, node: Node) -> Option<MethodSymbol> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let modifiers = helpers::extract_modifiers(base, node);
    let return_type = node
        .child_by_field_name("type")
        .map(|t| helpers::type_text(base, &t))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| VOID_TYPE.to_string());

    let parameters = node
        .child_by_field_name("parameters")
        .map(|p| extract_parameters(extractor, p))
        .unwrap_or_default();

    let declared_exceptions = base
        .find_child_by_type(&node, "throws")
        .map(|t| extract_throws(extractor, t))
        .unwrap_or_default();

    let (start_line, end_line) = base.line_range(&node);

    Some(MethodSymbol {
        name,
        visibility: modifiers.visibility(),
        is_static: modifiers.contains(Modifiers::STATIC),
        return_type,
        parameters,
        declared_exceptions,
        start_line,
        end_line,
    })
}

fn extract_parameters(extractor: &JavaExtractor, param_list: Node) -> Vec<Parameter> {
    let base = extractor.base();
    let mut params = Vec::new();

    for p in param_list.named_children(&mut param_list.walk()) {
        match p.kind() {
            "formal_parameter" => {
                params.push(Parameter {
                    param_type: helpers::declared_type(base, &p),
                    name: base.get_field_text(&p, "name").unwrap_or_default(),
                });
            }
            "spread_parameter" => {
                // T... name
                let type_node = p.child_by_field_name("type").or_else(|| {
                    p.named_children(&mut p.walk())
                        .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))
                });
                let name = base
                    .find_child_by_type(&p, "variable_declarator")
                    .and_then(|d| base.get_field_text(&d, "name"))
                    .unwrap_or_default();
                params.push(Parameter {
                    param_type: format!(
                        "{}...",
                        type_node
                            .map(|t| helpers::type_text(base, &t))
                            .unwrap_or_default()
                    ),
                    name,
                });
            }
            "receiver_parameter" => {
                let type_node = p.named_children(&mut p.walk()).find(|c| {
                    !matches!(
                        c.kind(),
                        "marker_annotation" | "annotation" | "identifier" | "this"
                    )
                });
                params.push(Parameter {
                    param_type: type_node
                        .map(|t| helpers::type_text(base, &t))
                        .unwrap_or_default(),
                    name: "this".to_string(),
                });
            }
            _ => {}
        }
    }

    params
}

fn extract_throws(extractor: &JavaExtractor, throws_node: Node) -> Vec<String> {
    let base = extractor.base();
    throws_node
        .named_children(&mut throws_node.walk())
        .filter(|c| !matches!(c.kind(), "marker_annotation" | "annotation"))
        .map(|c| helpers::type_text(base, &c))
        .collect()
}
