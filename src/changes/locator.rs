//! Revision comparison and method overlap.
//!
//! The comparison is fail-open: if the diff cannot be produced (untracked
//! file, missing ref, no git), the file is reported as having no changes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, Context};
use tracing::{debug, warn};

use super::hunks::{parse_hunk_spans, ChangeSpan};
use crate::extractors::base::MethodSymbol;

/// Revision the working tree is compared against when none is configured
pub const DEFAULT_COMPARE_REF: &str = "HEAD";

/// Produces a zero-context unified diff of one file against a revision
pub trait DiffProvider {
    fn unified_diff(
        &self,
        repo_root: &Path,
        file_path: &Path,
        compare_ref: &str,
    ) -> anyhow::Result<String>;
}

/// `git -C <root> diff --unified=0 <ref> -- <file>`
#[derive(Debug, Clone)]
pub struct GitDiff {
    git_binary: PathBuf,
}

impl Default for GitDiff {
    fn default() -> Self {
        Self {
            git_binary: PathBuf::from("git"),
        }
    }
}

impl GitDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific git executable instead of the one on `PATH`
    pub fn with_binary(git_binary: impl Into<PathBuf>) -> Self {
        Self {
            git_binary: git_binary.into(),
        }
    }
}

impl DiffProvider for GitDiff {
    fn unified_diff(
        &self,
        repo_root: &Path,
        file_path: &Path,
        compare_ref: &str,
    ) -> anyhow::Result<String> {
        // git -C resolves relative paths against the repo root, not our cwd
        let target = file_path
            .canonicalize()
            .unwrap_or_else(|_| file_path.to_path_buf());

        let output = Command::new(&self.git_binary)
            .arg("-C")
            .arg(repo_root)
            .args(["diff", "--unified=0", compare_ref, "--"])
            .arg(&target)
            .output()
            .with_context(|| format!("Failed to run {}", self.git_binary.display()))?;

        if !output.status.success() {
            return Err(anyhow!(
                "git diff exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Computes changed spans through a `DiffProvider`
pub struct ChangeLocator<D: DiffProvider> {
    provider: D,
}

impl<D: DiffProvider> ChangeLocator<D> {
    pub fn new(provider: D) -> Self {
        Self { provider }
    }

    /// Changed spans of `file_path` relative to `compare_ref`.
    ///
    /// Any comparison failure yields an empty list rather than an error.
    pub fn changed_spans(
        &self,
        repo_root: &Path,
        file_path: &Path,
        compare_ref: &str,
    ) -> Vec<ChangeSpan> {
        match self.provider.unified_diff(repo_root, file_path, compare_ref) {
            Ok(diff) => {
                let spans = parse_hunk_spans(&diff);
                debug!(
                    "{} changed spans in {} against {}",
                    spans.len(),
                    file_path.display(),
                    compare_ref
                );
                spans
            }
            Err(e) => {
                warn!(
                    "Revision comparison unavailable for {} ({}); treating as unchanged",
                    file_path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

/// `ChangeLocator` over the system git
pub fn changed_spans(repo_root: &Path, file_path: &Path, compare_ref: &str) -> Vec<ChangeSpan> {
    ChangeLocator::new(GitDiff::new()).changed_spans(repo_root, file_path, compare_ref)
}

/// Methods overlapping at least one span, in declaration order, unique by
/// `(name, start_line, end_line)`.
pub fn affected(spans: &[ChangeSpan], methods: &[MethodSymbol]) -> Vec<MethodSymbol> {
    let mut seen = HashSet::new();
    methods
        .iter()
        .filter(|m| spans.iter().any(|s| s.overlaps(m.start_line, m.end_line)))
        .filter(|m| {
            let (name, start, end) = m.identity();
            seen.insert((name.to_string(), start, end))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::Visibility;
    use tempfile::TempDir;

    fn method(name: &str, start: u32, end: u32) -> MethodSymbol {
        MethodSymbol {
            name: name.to_string(),
            visibility: Visibility::Public,
            is_static: false,
            return_type: "void".to_string(),
            parameters: vec![],
            declared_exceptions: vec![],
            start_line: start,
            end_line: end,
        }
    }

    fn names(methods: &[MethodSymbol]) -> Vec<&str> {
        methods.iter().map(|m| m.name.as_str()).collect()
    }

    struct FixedDiff(&'static str);

    impl DiffProvider for FixedDiff {
        fn unified_diff(&self, _: &Path, _: &Path, _: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenDiff;

    impl DiffProvider for BrokenDiff {
        fn unified_diff(&self, _: &Path, _: &Path, _: &str) -> anyhow::Result<String> {
            Err(anyhow!("fatal: bad revision 'nope'"))
        }
    }

    #[test]
    fn test_scenario_span_inside_method() {
        let locator = ChangeLocator::new(FixedDiff("@@ -9,0 +12,1 @@\n+x\n"));
        let spans = locator.changed_spans(Path::new("."), Path::new("Foo.java"), "HEAD");
        assert_eq!(spans, vec![ChangeSpan::new(12, 12)]);

        let methods = vec![method("bar", 10, 14)];
        assert_eq!(names(&affected(&spans, &methods)), vec!["bar"]);
    }

    #[test]
    fn test_empty_diff_means_no_spans() {
        let locator = ChangeLocator::new(FixedDiff(""));
        assert!(locator
            .changed_spans(Path::new("."), Path::new("Foo.java"), "HEAD")
            .is_empty());
    }

    #[test]
    fn test_provider_failure_is_fail_open() {
        let locator = ChangeLocator::new(BrokenDiff);
        assert!(locator
            .changed_spans(Path::new("."), Path::new("Foo.java"), "nope")
            .is_empty());
    }

    #[test]
    fn test_git_outside_repository_yields_no_spans() {
        // Either git is missing or it rejects a non-repository: both are fail-open
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("Foo.java");
        std::fs::write(&file, "class Foo {}\n").unwrap();
        assert!(changed_spans(temp_dir.path(), &file, DEFAULT_COMPARE_REF).is_empty());
    }

    fn git(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(args)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_git_diff_against_head_in_real_repository() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        if !git(root, &["init", "-q"]) {
            // No usable git on this machine
            return;
        }

        let file = root.join("Foo.java");
        std::fs::write(
            &file,
            "class Foo {\n    int a() {\n        return 1;\n    }\n}\n",
        )
        .unwrap();
        assert!(git(root, &["add", "Foo.java"]));
        assert!(git(
            root,
            &[
                "-c",
                "user.name=deltatest",
                "-c",
                "user.email=deltatest@example.com",
                "-c",
                "commit.gpgsign=false",
                "commit",
                "-q",
                "-m",
                "initial",
            ],
        ));

        std::fs::write(
            &file,
            "class Foo {\n    int a() {\n        return 2;\n    }\n}\n",
        )
        .unwrap();

        let spans = changed_spans(root, &file, DEFAULT_COMPARE_REF);
        assert_eq!(spans, vec![ChangeSpan::new(3, 3)]);

        let methods = vec![method("a", 2, 4)];
        assert_eq!(names(&affected(&spans, &methods)), vec!["a"]);

        // Reverted file has nothing to report
        assert!(git(root, &["checkout", "-q", "--", "Foo.java"]));
        assert!(changed_spans(root, &file, DEFAULT_COMPARE_REF).is_empty());
    }

    #[test]
    fn test_missing_git_binary_is_fail_open() {
        let locator = ChangeLocator::new(GitDiff::with_binary("/nonexistent/bin/git"));
        assert!(locator
            .changed_spans(Path::new("."), Path::new("Foo.java"), "HEAD")
            .is_empty());
    }

    #[test]
    fn test_affected_boundaries_touch() {
        let methods = vec![method("a", 1, 5), method("b", 7, 9), method("c", 11, 20)];
        let spans = vec![ChangeSpan::new(5, 5), ChangeSpan::new(20, 25)];
        assert_eq!(names(&affected(&spans, &methods)), vec!["a", "c"]);

        let gap = vec![ChangeSpan::new(6, 6), ChangeSpan::new(10, 10)];
        assert!(affected(&gap, &methods).is_empty());
    }

    #[test]
    fn test_affected_with_no_spans_is_empty() {
        let methods = vec![method("a", 1, 5), method("b", 7, 9)];
        assert!(affected(&[], &methods).is_empty());
    }

    #[test]
    fn test_affected_ignores_span_order_and_duplicates() {
        let methods = vec![method("a", 1, 5), method("b", 7, 9), method("c", 11, 20)];
        let forward = vec![ChangeSpan::new(2, 3), ChangeSpan::new(12, 12)];
        let reversed_with_dupes = vec![
            ChangeSpan::new(12, 12),
            ChangeSpan::new(2, 3),
            ChangeSpan::new(12, 12),
            ChangeSpan::new(1, 4),
        ];
        assert_eq!(
            affected(&forward, &methods),
            affected(&reversed_with_dupes, &methods)
        );
        assert_eq!(names(&affected(&forward, &methods)), vec!["a", "c"]);
    }

    #[test]
    fn test_affected_keeps_overloads_and_drops_exact_duplicates() {
        let methods = vec![
            method("add", 3, 5),
            method("add", 7, 9),
            method("add", 3, 5),
        ];
        let spans = vec![ChangeSpan::new(1, 20)];
        let result = affected(&spans, &methods);
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.iter().map(|m| m.start_line).collect::<Vec<_>>(),
            vec![3, 7]
        );
    }
}
