//! Unified diff hunk header parsing.
//!
//! Only the new-file side of `@@ -a[,b] +c[,d] @@` matters: spans are line
//! ranges in the post-change revision.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HUNK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@@ -\d+(?:,\d+)? \+(\d+)(?:,(\d+))? @@").expect("hunk header regex is valid")
});

/// One contiguous block of changed lines, 1-based and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeSpan {
    pub start_line: u32,
    pub end_line: u32,
}

impl ChangeSpan {
    pub fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Closed-interval intersection with `[start, end]`
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        !(self.end_line < start || self.start_line > end)
    }
}

/// Collect one span per hunk header, in diff order, without merging.
///
/// `+c,d` gives `[c, c + max(d, 1) - 1]`; a bare `+c` gives `[c, c]`. A pure
/// deletion (`d == 0`) still marks the line at the insertion point.
pub fn parse_hunk_spans(diff_text: &str) -> Vec<ChangeSpan> {
    diff_text
        .lines()
        .filter_map(|line| HUNK_HEADER.captures(line))
        .filter_map(|caps| {
            let start: u32 = caps.get(1)?.as_str().parse().ok()?;
            let span = match caps.get(2) {
                Some(count) => {
                    let count: u32 = count.as_str().parse().ok()?;
                    ChangeSpan::new(start, start.saturating_add(count.max(1) - 1))
                }
                None => ChangeSpan::new(start, start),
            };
            Some(span)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_and_single_line_headers() {
        let diff = "\
diff --git a/Foo.java b/Foo.java
index 1111111..2222222 100644
--- a/Foo.java
+++ b/Foo.java
@@ -25,0 +26,3 @@ public class Foo {
+    int a;
+    int b;
+    int c;
@@ -40 +43 @@ void bar() {
-        old();
+        updated();
";
        assert_eq!(
            parse_hunk_spans(diff),
            vec![ChangeSpan::new(26, 28), ChangeSpan::new(43, 43)]
        );
    }

    #[test]
    fn test_deletion_only_hunk_marks_insertion_point() {
        assert_eq!(
            parse_hunk_spans("@@ -12,3 +11,0 @@\n-a\n-b\n-c\n"),
            vec![ChangeSpan::new(11, 11)]
        );
    }

    #[test]
    fn test_scenario_single_added_line() {
        assert_eq!(parse_hunk_spans("@@ -9,0 +12,1 @@"), vec![ChangeSpan::new(12, 12)]);
    }

    #[test]
    fn test_empty_and_irrelevant_input() {
        assert!(parse_hunk_spans("").is_empty());
        assert!(parse_hunk_spans("+@@ -1 +1 @@ inside a body line\n--- a/x\n").is_empty());
    }

    #[test]
    fn test_overlap_touching_boundaries() {
        let span = ChangeSpan::new(5, 10);
        assert!(span.overlaps(10, 14));
        assert!(span.overlaps(1, 5));
        assert!(!span.overlaps(11, 20));
        assert!(!span.overlaps(1, 4));
    }
}
