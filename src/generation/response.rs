//! Clean-up of raw generator output into a single indented `@Test` method.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::mock::placeholder_test;
use crate::writer::merger::with_test_marker;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:java)?[ \t]*\r?\n(.*?)\r?\n[ \t]*```").expect("code fence regex is valid")
});

static TEST_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@Test\b").expect("test annotation regex is valid"));

static CLASS_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bclass\s+\w+[^{;]*\{").expect("class regex is valid"));

const INDENT: &str = "    ";

/// Reduce generator output to one `@Test` method indented for a class body.
///
/// A fenced block is unwrapped first. When the text is a whole test class only
/// the first `@Test` method is kept, with missing closing braces added. The
/// kept method is renamed to `test_<method_name>` if it has another name.
/// Output without any `@Test` method becomes a placeholder.
pub fn isolate_test_method(raw: &str, method_name: &str) -> String {
    let isolated = extract_test_method(raw, method_name);
    match with_test_marker(&isolated, method_name) {
        Some(marked) => marked,
        None => {
            warn!(
                "Generated output for '{}' declares no method, using placeholder",
                method_name
            );
            placeholder_test(method_name, "generator returned no test method")
        }
    }
}

fn extract_test_method(raw: &str, method_name: &str) -> String {
    let code = CODE_FENCE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map_or(raw, |m| m.as_str())
        .trim_matches(|c| c == '\n' || c == '\r');

    let Some(annotation) = TEST_ANNOTATION.find(code) else {
        warn!(
            "Generated output for '{}' has no @Test method, using placeholder",
            method_name
        );
        return placeholder_test(method_name, "generator returned no test method");
    };

    if !CLASS_DECLARATION.is_match(code) {
        return reindent(code);
    }

    debug!("Isolating first @Test method for '{}' from a full class", method_name);
    let block_start = line_start(code, annotation.start());
    reindent(&first_method_block(&code[block_start..]))
}

/// Start of the line holding `at`, if only whitespace precedes it on that line
fn line_start(code: &str, at: usize) -> usize {
    let start = code[..at].rfind('\n').map_or(0, |i| i + 1);
    if code[start..at].trim().is_empty() {
        start
    } else {
        at
    }
}

/// Text from the annotation through the `}` matching the method's first `{`.
/// A truncated method is closed with as many braces as it is missing.
fn first_method_block(text: &str) -> String {
    let Some(open) = text.find('{') else {
        return text.trim_end().to_string();
    };

    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return text[..open + i + 1].to_string();
                }
            }
            _ => {}
        }
    }

    // Never closed: stop before the next test, then balance
    let end = TEST_ANNOTATION
        .find_at(text, open)
        .map_or(text.len(), |m| line_start(text, m.start()));
    let mut block = text[..end].trim_end().to_string();
    let indent_len = text.len() - text.trim_start_matches([' ', '\t']).len();
    let indent = &text[..indent_len];
    let missing = block.matches('{').count().saturating_sub(block.matches('}').count());
    for _ in 0..missing {
        block.push('\n');
        block.push_str(indent);
        block.push('}');
    }
    block
}

/// Strip the common leading whitespace and indent every line one level
fn reindent(code: &str) -> String {
    let common = code
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(code.len() + INDENT.len() * 8);
    for line in code.lines() {
        let line = line.trim_end();
        if !line.is_empty() {
            out.push_str(INDENT);
            out.push_str(line.get(common..).unwrap_or_else(|| line.trim_start()));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_class_in_fence_keeps_first_test_only() {
        let raw = "Here is the test:\n```java\npackage a;\n\nimport org.junit.jupiter.api.Test;\n\npublic class CalcTest {\n    @Test\n    public void test_add() {\n        if (true) { assertEquals(3, new Calc().add(1, 2)); }\n    }\n\n    @Test\n    public void test_other() {\n    }\n}\n```\nThanks";
        let isolated = isolate_test_method(raw, "add");
        assert_eq!(
            isolated,
            "    @Test\n    public void test_add() {\n        if (true) { assertEquals(3, new Calc().add(1, 2)); }\n    }\n"
        );
    }

    #[test]
    fn test_bare_method_is_indented() {
        let raw = "@Test\npublic void test_bump() {\n    bump();\n}";
        assert_eq!(
            isolate_test_method(raw, "bump"),
            "    @Test\n    public void test_bump() {\n        bump();\n    }\n"
        );
    }

    #[test]
    fn test_already_indented_method_is_unchanged() {
        let raw = "    @Test\n    public void test_a() {\n    }\n";
        assert_eq!(isolate_test_method(raw, "a"), raw);
    }

    #[test]
    fn test_truncated_method_gets_closing_braces() {
        let raw = "class CalcTest {\n    @Test\n    void test_add() {\n        if (x) {\n            y();";
        let isolated = isolate_test_method(raw, "add");
        assert_eq!(isolated.matches('{').count(), isolated.matches('}').count());
        assert!(isolated.starts_with("    @Test\n    void test_add() {\n"));
        assert!(!isolated.contains("class"));
    }

    #[test]
    fn test_output_without_test_becomes_placeholder() {
        let isolated = isolate_test_method("I cannot help with that.", "concat");
        assert!(isolated.contains("@Test"));
        assert!(crate::writer::contains_test_marker(&isolated, "concat"));
    }

    #[test]
    fn test_method_is_renamed_to_marker() {
        let raw = "```java\npublic class FooTest {\n    @Test\n    public void barReturnsOne() {\n        assertEquals(1, new Foo().bar());\n    }\n}\n```";
        assert_eq!(
            isolate_test_method(raw, "bar"),
            "    @Test\n    public void test_bar() {\n        assertEquals(1, new Foo().bar());\n    }\n"
        );
    }

    #[test]
    fn test_annotation_without_method_becomes_placeholder() {
        let isolated = isolate_test_method("@Test", "bump");
        assert!(isolated.contains("public void test_bump()"));
        assert!(isolated.contains("assertTrue(true);"));
    }

    #[test]
    fn test_fence_without_language_tag() {
        let raw = "```\n@Test\nvoid test_x() {}\n```";
        assert_eq!(isolate_test_method(raw, "x"), "    @Test\n    void test_x() {}\n");
    }
}
