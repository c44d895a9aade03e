//! Output path layout: packages mirror into directories under the output root.

use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;

/// Maps a source package and class to its composite test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLayout {
    output_root: PathBuf,
    package_suffix: Option<String>,
    extension: &'static str,
}

impl TestLayout {
    pub fn new(output_root: impl Into<PathBuf>, package_suffix: Option<&str>) -> Self {
        Self {
            output_root: output_root.into(),
            package_suffix: package_suffix
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            extension: crate::language::source_extension("java").unwrap_or("java"),
        }
    }

    /// Layout rooted at `output_root`, or the configured default path
    pub fn from_config(config: &GeneratorConfig, output_root: Option<&Path>) -> Self {
        let root = output_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.test.default_path.clone());
        Self::new(root, config.package_suffix())
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Package of the generated test class. With no source package the suffix
    /// alone becomes the package.
    pub fn test_package(&self, package_name: &str) -> String {
        match (package_name.is_empty(), self.package_suffix.as_deref()) {
            (_, None) => package_name.to_string(),
            (true, Some(suffix)) => suffix.to_string(),
            (false, Some(suffix)) => format!("{}.{}", package_name, suffix),
        }
    }

    /// `<root>/<package as dirs>/<Primary>Test.java`
    pub fn test_file_path(&self, test_package: &str, primary_class_name: &str) -> PathBuf {
        let mut path = self.output_root.clone();
        for segment in test_package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!(
            "{}.{}",
            super::scaffold::test_class_name(primary_class_name),
            self.extension
        ));
        path
    }
}
