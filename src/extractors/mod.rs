//! Language Extractors Module
//!
//! Tree-sitter based extraction of the structural symbol model.
//!
//! # Architecture
//!
//! - `base` - the symbol model and shared node helpers
//! - `manager` - ExtractorManager public API (parse + extract)
//! - `java` - the Java extractor

pub mod base;
pub mod java;
pub mod manager;

// Re-export the public API
pub use base::{
    ClassSymbol, FieldSymbol, MethodSymbol, Modifiers, Parameter, SourceUnit, Visibility,
};
pub use manager::ExtractorManager;
