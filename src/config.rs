//! Generator settings.
//!
//! Loaded once at the process boundary (usually from `settings.yaml`) and passed
//! by reference into the pipeline, merger and generator. Nothing re-reads it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::changes::DEFAULT_COMPARE_REF;
use crate::error::{DeltaTestError, Result};
use crate::utils::file_utils;

/// JUnit major version the generated tests target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum JUnitVersion {
    #[serde(rename = "4")]
    V4,
    #[serde(rename = "5")]
    #[default]
    V5,
}

// Accepts both `junit_version: 4` and `junit_version: "4"`
impl<'de> Deserialize<'de> for JUnitVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Debug, Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        let raw = Raw::deserialize(deserializer)?;
        let major = match &raw {
            Raw::Number(n) => Some(*n),
            Raw::Text(s) => s.trim().parse().ok(),
        };
        match major {
            Some(4) => Ok(JUnitVersion::V4),
            Some(5) => Ok(JUnitVersion::V5),
            _ => Err(D::Error::custom(format!(
                "unsupported JUnit version {:?}, expected 4 or 5",
                raw
            ))),
        }
    }
}

impl fmt::Display for JUnitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JUnitVersion::V4 => write!(f, "4"),
            JUnitVersion::V5 => write!(f, "5"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JavaSettings {
    pub junit_version: JUnitVersion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSettings {
    /// Output root the package directories are mirrored under
    pub default_path: PathBuf,
    /// Generate only for methods touched since `compare_ref`
    pub only_changed: bool,
    /// Appended to the mirrored package, e.g. `generated` -> `com.example.generated`
    pub package_suffix: Option<String>,
    pub compare_ref: String,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("src/test/java"),
            only_changed: false,
            package_suffix: None,
            compare_ref: DEFAULT_COMPARE_REF.to_string(),
        }
    }
}

/// Opaque settings for the model backend; `provider: mock` selects the offline stub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: String,
    pub model: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            model: String::new(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub java: JavaSettings,
    pub test: TestSettings,
    pub llm: LlmSettings,
}

impl GeneratorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| DeltaTestError::Config(e.to_string()))
    }

    /// Read and parse a YAML settings file
    pub fn load(path: &Path) -> Result<Self> {
        let content = file_utils::read_file_content(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            DeltaTestError::Config(msg) => {
                DeltaTestError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn junit_version(&self) -> JUnitVersion {
        self.java.junit_version
    }

    /// Non-empty package suffix, if any
    pub fn package_suffix(&self) -> Option<&str> {
        self.test
            .package_suffix
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.junit_version(), JUnitVersion::V5);
        assert_eq!(config.test.default_path, PathBuf::from("src/test/java"));
        assert!(!config.test.only_changed);
        assert_eq!(config.test.compare_ref, "HEAD");
        assert_eq!(config.package_suffix(), None);
        assert_eq!(config.llm.provider, "mock");
    }

    #[test]
    fn test_full_settings_file() {
        let yaml = r#"
java:
  junit_version: "4"
test:
  default_path: generated-tests
  only_changed: true
  package_suffix: generated
llm:
  provider: ollama
  model: codellama:7b
"#;
        let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.junit_version(), JUnitVersion::V4);
        assert_eq!(config.test.default_path, PathBuf::from("generated-tests"));
        assert!(config.test.only_changed);
        assert_eq!(config.package_suffix(), Some("generated"));
        assert_eq!(config.test.compare_ref, "HEAD");
        assert_eq!(config.llm.model, "codellama:7b");
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let config = GeneratorConfig::from_yaml_str("test:\n  package_suffix: \"  \"\n").unwrap();
        assert_eq!(config.junit_version(), JUnitVersion::V5);
        assert_eq!(config.package_suffix(), None);
    }

    #[test]
    fn test_unquoted_junit_version() {
        let config = GeneratorConfig::from_yaml_str("java:\n  junit_version: 4\n").unwrap();
        assert_eq!(config.junit_version(), JUnitVersion::V4);
    }

    #[test]
    fn test_invalid_junit_version_rejected() {
        let err = GeneratorConfig::from_yaml_str("java:\n  junit_version: \"3\"\n").unwrap_err();
        assert!(matches!(err, DeltaTestError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.yaml");
        fs::write(&path, "java:\n  junit_version: \"5\"\n").unwrap();
        assert_eq!(
            GeneratorConfig::load(&path).unwrap().junit_version(),
            JUnitVersion::V5
        );

        let missing = GeneratorConfig::load(&temp_dir.path().join("absent.yaml"));
        assert!(matches!(missing, Err(DeltaTestError::Io { .. })));
    }
}
