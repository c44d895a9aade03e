// deltatest core - change-aware structural analysis for incremental test generation
//
// Parses Java sources with tree-sitter into a class/field/method model, maps a
// revision diff onto method line ranges, and merges generated test methods
// into per-class composite test files without duplicating existing ones.

pub mod changes;
pub mod config;
pub mod error;
pub mod extractors;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod utils;
pub mod writer;

pub use changes::{affected, changed_spans, ChangeLocator, ChangeSpan, DiffProvider, GitDiff};
pub use config::{GeneratorConfig, JUnitVersion};
pub use error::{DeltaTestError, Result};
pub use extractors::{ClassSymbol, ExtractorManager, FieldSymbol, MethodSymbol, SourceUnit};
pub use generation::{generator_for_config, MockGenerator, TestBodyGenerator};
pub use pipeline::{NothingToDo, Pipeline, PipelineOutcome, RunOptions};
pub use writer::{TestFileMerger, TestLayout};
