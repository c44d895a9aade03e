// Base Extractor Types and Helpers
//
// - types.rs: the symbol model (SourceUnit, ClassSymbol, MethodSymbol, ...)
// - extractor.rs: BaseExtractor (source text access, line ranges)
// - tree_methods.rs: tree navigation and worklist traversal

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    ClassSymbol, FieldSymbol, MethodSymbol, Modifiers, Parameter, SourceUnit, Visibility,
    VOID_TYPE,
};
