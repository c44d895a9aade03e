//! Seam to the test body generator.
//!
//! The generator itself (prompting a model backend) lives outside this crate.
//! This module defines what it is given, the offline `MockGenerator`, and the
//! clean-up applied to whatever text comes back.

pub mod mock;
pub mod response;

pub use mock::MockGenerator;
pub use response::isolate_test_method;

use crate::config::{GeneratorConfig, JUnitVersion};
use crate::error::{DeltaTestError, Result};
use crate::extractors::base::{FieldSymbol, MethodSymbol};

/// Everything a generator needs to write one test method
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub package_name: &'a str,
    pub class_name: &'a str,
    /// Fields of the class under test, candidates for mocking
    pub fields: &'a [FieldSymbol],
    pub method: &'a MethodSymbol,
    pub junit: JUnitVersion,
}

/// Produces source text for one test method. Output may be wrapped in extra
/// text (fences, imports, a whole class); callers run it through
/// `isolate_test_method`.
pub trait TestBodyGenerator {
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String>;
}

impl<G: TestBodyGenerator + ?Sized> TestBodyGenerator for Box<G> {
    fn generate(&self, request: &GenerationRequest<'_>) -> Result<String> {
        (**self).generate(request)
    }
}

/// The built-in generator selected by `llm.provider`
pub fn generator_for_config(config: &GeneratorConfig) -> Result<Box<dyn TestBodyGenerator>> {
    match config.llm.provider.as_str() {
        "mock" => Ok(Box::new(MockGenerator)),
        other => Err(DeltaTestError::Config(format!(
            "provider '{}' has no built-in generator; supply a TestBodyGenerator",
            other
        ))),
    }
}
