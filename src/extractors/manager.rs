//! ExtractorManager - Public API for structural extraction
//!
//! Handles file parsing and delegates to the language extractor. This is the
//! entry point for turning a source file into a `SourceUnit`.

use crate::error::{DeltaTestError, Result};
use crate::extractors::base::SourceUnit;
use crate::extractors::java::JavaExtractor;
use crate::utils::file_utils;
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// Stateless manager that parses and delegates to the language extractor
pub struct ExtractorManager {}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Get supported languages
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["java"]
    }

    /// Read `path` and extract its symbol model
    pub fn extract_file(&self, path: &Path) -> Result<SourceUnit> {
        let content = file_utils::read_file_content(path)?;
        self.extract(&path.to_string_lossy(), &content)
    }

    /// Extract the symbol model from file content.
    ///
    /// Fails only when no syntax tree can be produced. A file without class
    /// declarations yields a `SourceUnit` with no classes.
    pub fn extract(&self, file_path: &str, content: &str) -> Result<SourceUnit> {
        let language = self.get_language_from_extension(file_path)?;
        let tree = parse_source(&language, file_path, content)?;

        let unit = match language.as_str() {
            "java" => JavaExtractor::new(file_path.to_string(), content.to_string()).extract(&tree),
            other => return Err(DeltaTestError::UnsupportedLanguage(other.to_string())),
        };

        tracing::debug!(
            "Extracted {} classes from {} file: {}",
            unit.classes.len(),
            language,
            file_path
        );
        Ok(unit)
    }

    /// Determine language from file extension
    fn get_language_from_extension(&self, file_path: &str) -> Result<String> {
        let path = Path::new(file_path);
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let language = crate::language::detect_language_from_extension(extension).ok_or_else(
            || {
                DeltaTestError::UnsupportedLanguage(format!(
                    "file extension '{}' (supported: {})",
                    extension,
                    self.supported_languages().join(", ")
                ))
            },
        )?;

        Ok(language.to_string())
    }
}

/// Parse `content` with the grammar registered for `language`
pub(crate) fn parse_source(language: &str, file_path: &str, content: &str) -> Result<Tree> {
    let tree_sitter_language = crate::language::get_tree_sitter_language(language)
        .map_err(|e| DeltaTestError::UnsupportedLanguage(e.to_string()))?;

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_language)
        .map_err(|e| DeltaTestError::Parse {
            path: file_path.to_string(),
            reason: format!("failed to set parser language for {}: {}", language, e),
        })?;

    parser
        .parse(content, None)
        .ok_or_else(|| DeltaTestError::Parse {
            path: file_path.to_string(),
            reason: "parser produced no syntax tree".to_string(),
        })
}
