//! End-to-end incremental test generation for one source file.
//!
//! extract -> primary class -> (optionally) affected methods -> generate ->
//! isolate -> merge. Each early exit is a `NothingToDo` value, not an error.

use std::path::{Path, PathBuf};
use std::time::Instant;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::changes::{affected, ChangeLocator, DiffProvider};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::extractors::base::MethodSymbol;
use crate::extractors::ExtractorManager;
use crate::generation::{isolate_test_method, GenerationRequest, TestBodyGenerator};
use crate::utils::file_utils;
use crate::writer::{contains_test_marker, TestFileMerger, TestLayout};

/// Per-run overrides of the configured defaults
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Repository the revision comparison runs in; defaults to the source's directory
    pub repo_root: Option<PathBuf>,
    /// Overrides `test.only_changed`
    pub only_changed: Option<bool>,
    /// Overrides `test.default_path`
    pub output_root: Option<PathBuf>,
}

/// Why a run produced no file changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingToDo {
    NoClass,
    NoMethods,
    NoChanges,
    NoAffectedMethods,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    NothingToDo(NothingToDo),
    /// `written` holds the method names appended in this run, possibly none
    Written {
        test_file: PathBuf,
        written: Vec<String>,
    },
}

pub struct Pipeline<G: TestBodyGenerator, D: DiffProvider> {
    config: GeneratorConfig,
    generator: G,
    locator: ChangeLocator<D>,
    extractor: ExtractorManager,
}

impl<G: TestBodyGenerator, D: DiffProvider> Pipeline<G, D> {
    pub fn new(config: GeneratorConfig, generator: G, diff_provider: D) -> Self {
        Self {
            config,
            generator,
            locator: ChangeLocator::new(diff_provider),
            extractor: ExtractorManager::new(),
        }
    }

    pub fn run(&self, source_path: &Path, options: &RunOptions) -> Result<PipelineOutcome> {
        let unit = self.extractor.extract_file(source_path)?;

        let Some(primary) = unit.primary_class() else {
            info!("No class found in {}", source_path.display());
            return Ok(PipelineOutcome::NothingToDo(NothingToDo::NoClass));
        };
        if primary.methods.is_empty() {
            info!("No methods found in {}", primary.name);
            return Ok(PipelineOutcome::NothingToDo(NothingToDo::NoMethods));
        }

        let only_changed = options.only_changed.unwrap_or(self.config.test.only_changed);
        let targets = if only_changed {
            match self.changed_methods(source_path, options, &primary.methods) {
                Ok(methods) => methods,
                Err(reason) => return Ok(PipelineOutcome::NothingToDo(reason)),
            }
        } else {
            primary.methods.clone()
        };

        let layout = TestLayout::from_config(&self.config, options.output_root.as_deref());
        let test_package = layout.test_package(&unit.package_name);
        let test_file = layout.test_file_path(&test_package, &primary.name);

        let existing = if test_file.exists() {
            file_utils::read_file_content(&test_file)?
        } else {
            String::new()
        };

        let junit = self.config.junit_version();
        let mut bodies: IndexMap<String, String> = IndexMap::new();
        for method in &targets {
            if bodies.contains_key(&method.name) {
                debug!("Overload of '{}' shares its test, skipping", method.signature());
                continue;
            }
            if contains_test_marker(&existing, &method.name) {
                debug!("'{}' already covered in {}", method.name, test_file.display());
                continue;
            }

            let request = GenerationRequest {
                package_name: &unit.package_name,
                class_name: &primary.name,
                fields: &primary.fields,
                method,
                junit,
            };
            let started = Instant::now();
            let raw = self.generator.generate(&request)?;
            debug!(
                "Generated test for {} in {:.2?}",
                method.signature(),
                started.elapsed()
            );
            bodies.insert(method.name.clone(), isolate_test_method(&raw, &method.name));
        }

        let written = if bodies.is_empty() {
            Vec::new()
        } else {
            TestFileMerger::new(junit).write_or_update(
                &test_file,
                &test_package,
                &primary.name,
                &bodies,
            )?
        };

        Ok(PipelineOutcome::Written { test_file, written })
    }

    fn changed_methods(
        &self,
        source_path: &Path,
        options: &RunOptions,
        methods: &[MethodSymbol],
    ) -> std::result::Result<Vec<MethodSymbol>, NothingToDo> {
        let repo_root = options
            .repo_root
            .clone()
            .or_else(|| source_path.parent().map(Path::to_path_buf))
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));

        let spans =
            self.locator
                .changed_spans(&repo_root, source_path, &self.config.test.compare_ref);
        if spans.is_empty() {
            info!("No changes detected in {}", source_path.display());
            return Err(NothingToDo::NoChanges);
        }

        let methods = affected(&spans, methods);
        if methods.is_empty() {
            info!("Changes in {} touch no method", source_path.display());
            return Err(NothingToDo::NoAffectedMethods);
        }
        info!(
            "Affected methods: {}",
            methods
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(methods)
    }
}
