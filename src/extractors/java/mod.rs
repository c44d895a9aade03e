/// Java extractor for building the structural symbol model of a Java source file
///
/// This module is organized into focused sub-modules:
/// - helpers: modifier sets and type text
/// - classes: class declaration extraction
/// - methods: method signature and range extraction
/// - fields: field declarator extraction
/// - imports_packages: package declaration extraction
mod classes;
mod fields;
mod helpers;
mod imports_packages;
mod methods;

use crate::extractors::base::{BaseExtractor, SourceUnit};
use tracing::debug;
use tree_sitter::Tree;

/// Java extractor for extracting the class/field/method model from Java source code
pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new("java".to_string(), file_path, content),
        }
    }

    /// Build the `SourceUnit` for a parsed tree.
    ///
    /// Every `class_declaration` is collected regardless of nesting, in document
    /// order. The primary class is the first public one, else the first declared.
    pub fn extract(&self, tree: &Tree) -> SourceUnit {
        let root = tree.root_node();
        let package_name = imports_packages::extract_package(self, root);

        let mut class_nodes: Vec<_> = crate::language::get_class_node_kinds("java")
            .into_iter()
            .flat_map(|kind| self.base.find_nodes_by_type(&root, kind))
            .collect();
        class_nodes.sort_by_key(|node| node.start_byte());

        let mut classes: Vec<_> = class_nodes
            .into_iter()
            .filter_map(|node| classes::extract_class(self, node))
            .collect();

        let primary = classes
            .iter()
            .position(|c| c.is_public)
            .or(if classes.is_empty() { None } else { Some(0) });
        if let Some(index) = primary {
            classes[index].is_primary = true;
        }

        debug!(
            "Extracted {} classes from '{}' (package '{}')",
            classes.len(),
            self.base.file_path,
            package_name
        );

        SourceUnit {
            package_name,
            classes,
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}
