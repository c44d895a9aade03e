//! Language Support - Shared tree-sitter language configuration
//!
//! ALL tree-sitter grammar lookup goes through here so the extractor and the
//! test-file merger parse with exactly the same grammar.

use anyhow::Result;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: java",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

/// Conventional source extension for generated files in a language
pub fn source_extension(language: &str) -> Option<&'static str> {
    match language {
        "java" => Some("java"),
        _ => None,
    }
}

/// Get AST node types that represent method declarations with a `name` field
pub fn get_method_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "java" => vec!["method_declaration"],
        _ => vec![],
    }
}

/// Get AST node types that represent class-like declarations whose body is a merge target
pub fn get_class_node_kinds(language: &str) -> Vec<&'static str> {
    match language {
        "java" => vec!["class_declaration"],
        _ => vec![],
    }
}
