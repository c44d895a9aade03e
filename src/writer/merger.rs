//! Idempotent merging of generated test bodies into a composite test file.
//!
//! One read and at most one write per call. A body is skipped when the file
//! already contains its `test_<name>` marker, so repeated calls with the same
//! bodies leave the file byte-identical.

use std::ops::Range;
use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use super::scaffold;
use crate::config::JUnitVersion;
use crate::error::Result;
use crate::extractors::base::BaseExtractor;
use crate::extractors::manager::parse_source;
use crate::utils::file_utils;

static FINAL_CLOSING_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\}\s*$").expect("closing brace regex is valid"));

/// Name of the generated test method for a source method
pub fn test_method_name(symbol_name: &str) -> String {
    format!("test_{}", symbol_name)
}

/// Whether `content` already holds a test for `symbol_name` (word-boundary match)
pub fn contains_test_marker(content: &str, symbol_name: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(&test_method_name(symbol_name)));
    Regex::new(&pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// Opening line of the throwaway class a lone method is parsed inside
const METHOD_WRAPPER: &str = "class IsolatedMethod {\n";

/// `body` with its first method renamed to `test_<symbol_name>` unless the
/// marker is already present. `None` when the body declares no method.
pub fn with_test_marker(body: &str, symbol_name: &str) -> Option<String> {
    if contains_test_marker(body, symbol_name) {
        return Some(body.to_string());
    }
    let range = first_method_name(body)?;
    let mut renamed = body.to_string();
    debug!(
        "Renaming test method '{}' to '{}'",
        &body[range.clone()],
        test_method_name(symbol_name)
    );
    renamed.replace_range(range, &test_method_name(symbol_name));
    Some(renamed)
}

/// Byte range of the first method name declared in `body`
fn first_method_name(body: &str) -> Option<Range<usize>> {
    let wrapped = format!("{}{}\n}}\n", METHOD_WRAPPER, body);
    let tree = parse_source("java", "IsolatedMethod.java", &wrapped).ok()?;
    let base = BaseExtractor::new(
        "java".to_string(),
        "IsolatedMethod.java".to_string(),
        wrapped.clone(),
    );

    let method_kinds = crate::language::get_method_node_kinds("java");
    let name = method_kinds
        .iter()
        .flat_map(|kind| base.find_nodes_by_type(&tree.root_node(), kind))
        .min_by_key(|node| node.start_byte())?
        .child_by_field_name("name")?;

    let start = name.start_byte().checked_sub(METHOD_WRAPPER.len())?;
    let end = name.end_byte().checked_sub(METHOD_WRAPPER.len())?;
    (end <= body.len()).then_some(start..end)
}

/// Writes generated bodies into `<Primary>Test` files
#[derive(Debug, Clone)]
pub struct TestFileMerger {
    junit: JUnitVersion,
}

impl TestFileMerger {
    pub fn new(junit: JUnitVersion) -> Self {
        Self { junit }
    }

    /// Create `target` with scaffolding and every body, or append the bodies it
    /// does not contain yet. Returns the symbol names actually written, in order.
    ///
    /// A body whose method is not named `test_<symbol>` is renamed first so
    /// that later calls recognise it.
    pub fn write_or_update(
        &self,
        target: &Path,
        package_name: &str,
        primary_class_name: &str,
        bodies: &IndexMap<String, String>,
    ) -> Result<Vec<String>> {
        let bodies: IndexMap<&str, String> = bodies
            .iter()
            .map(|(symbol_name, body)| {
                let marked = with_test_marker(body, symbol_name).unwrap_or_else(|| {
                    warn!(
                        "Body for '{}' declares no method; writing it unchanged",
                        symbol_name
                    );
                    body.clone()
                });
                (symbol_name.as_str(), marked)
            })
            .collect();

        if !target.exists() {
            let content = scaffold::render_new_file(
                package_name,
                primary_class_name,
                self.junit,
                bodies.values().map(String::as_str),
            );
            file_utils::write_file_content(target, &content)?;
            info!("Created test class: {}", target.display());
            return Ok(bodies.keys().map(|name| name.to_string()).collect());
        }

        let mut content = file_utils::read_file_content(target)?;
        let test_class = scaffold::test_class_name(primary_class_name);
        let mut added = Vec::new();

        for (symbol_name, body) in &bodies {
            if contains_test_marker(&content, symbol_name) {
                info!(
                    "Test method for '{}' already exists in {}, skipping",
                    symbol_name,
                    target.display()
                );
                continue;
            }
            content = append_body(&content, &test_class, body);
            added.push(symbol_name.to_string());
        }

        if !added.is_empty() {
            file_utils::write_file_content(target, &content)?;
            info!(
                "Appended tests for methods: {} -> {}",
                added.join(", "),
                target.display()
            );
        }

        Ok(added)
    }
}

/// Insert `body`, after one blank line, before the closing brace of the test class.
///
/// Error-free files are edited at the byte offset tree-sitter reports for the
/// class body's `}`. Anything else falls back to replacing the file's final `}`.
fn append_body(content: &str, test_class: &str, body: &str) -> String {
    let body = scaffold::normalize_body(body);

    if let Some(at) = closing_brace_offset(content, test_class) {
        let (before, after) = content.split_at(at);
        return format!("{}\n\n{}{}", before.trim_end(), body, after);
    }

    debug!("Falling back to textual splice for {}", test_class);
    let before = match FINAL_CLOSING_BRACE.find(content) {
        Some(m) => &content[..m.start()],
        None => content,
    };
    format!("{}\n\n{}}}\n", before.trim_end(), body)
}

/// Byte offset of the `}` closing the top-level class named `test_class`, or of
/// the last top-level class when none has that name
fn closing_brace_offset(content: &str, test_class: &str) -> Option<usize> {
    let tree = parse_source("java", test_class, content).ok()?;
    let root = tree.root_node();
    if root.has_error() {
        return None;
    }

    let class_kinds = crate::language::get_class_node_kinds("java");
    let classes: Vec<_> = root
        .children(&mut root.walk())
        .filter(|c| class_kinds.contains(&c.kind()))
        .collect();

    let target = classes
        .iter()
        .find(|c| {
            c.child_by_field_name("name")
                .and_then(|n| n.utf8_text(content.as_bytes()).ok())
                == Some(test_class)
        })
        .or_else(|| classes.last())?;

    let body = target.child_by_field_name("body")?;
    let closing = body.children(&mut body.walk()).last()?;
    if closing.kind() != "}" || closing.is_missing() {
        return None;
    }
    Some(closing.start_byte())
}
