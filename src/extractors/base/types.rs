// Base Extractor Types
//
// The structural symbol model produced by one extraction: package, classes,
// fields and methods with 1-based inclusive line ranges.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Return type recorded for methods that declare none
pub const VOID_TYPE: &str = "void";

/// One parsed source file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceUnit {
    /// Dotted package name, empty for the default package
    pub package_name: String,
    /// Every class declaration in the file, nested ones included, flat
    pub classes: Vec<ClassSymbol>,
}

impl SourceUnit {
    /// The class generation targets: first public class, else the first declared one
    pub fn primary_class(&self) -> Option<&ClassSymbol> {
        self.classes.iter().find(|c| c.is_primary)
    }
}

/// A class declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassSymbol {
    pub name: String,
    pub is_public: bool,
    pub is_primary: bool,
    pub fields: Vec<FieldSymbol>,
    /// Non-private methods in declaration order
    pub methods: Vec<MethodSymbol>,
    /// Start line number (1-based)
    pub start_line: u32,
    /// End line number (1-based, inclusive)
    pub end_line: u32,
}

/// One declarator of a field declaration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSymbol {
    pub declared_type: String,
    pub name: String,
}

/// A `(type, name)` formal parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    pub param_type: String,
    pub name: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.param_type, self.name)
    }
}

/// A method declaration, signature through closing brace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodSymbol {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub declared_exceptions: Vec<String>,
    /// Start line number (1-based)
    pub start_line: u32,
    /// End line number (1-based, inclusive)
    pub end_line: u32,
}

impl MethodSymbol {
    /// Human-readable signature, e.g. `public static int add(int a, int b) throws IOException`
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let static_str = if self.is_static { "static " } else { "" };
        let throws_str = if self.declared_exceptions.is_empty() {
            String::new()
        } else {
            format!(" throws {}", self.declared_exceptions.join(", "))
        };
        format!(
            "{} {}{} {}({}){}",
            self.visibility, static_str, self.return_type, self.name, params, throws_str
        )
    }

    /// Identity used when de-duplicating: overloads share a name but never a range
    pub fn identity(&self) -> (&str, u32, u32) {
        (&self.name, self.start_line, self.end_line)
    }
}

/// Java access level. `Package` is the default when no access modifier is written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

bitflags! {
    /// Keyword modifiers found on a declaration, order-insensitive
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
        const SYNCHRONIZED = 1 << 6;
        const NATIVE = 1 << 7;
        const DEFAULT = 1 << 8;
        const STRICTFP = 1 << 9;
        const TRANSIENT = 1 << 10;
        const VOLATILE = 1 << 11;
    }
}

impl Modifiers {
    /// Map one modifier token to its flag; annotations and unknown tokens yield `None`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let flag = match keyword {
            "public" => Self::PUBLIC,
            "protected" => Self::PROTECTED,
            "private" => Self::PRIVATE,
            "static" => Self::STATIC,
            "final" => Self::FINAL,
            "abstract" => Self::ABSTRACT,
            "synchronized" => Self::SYNCHRONIZED,
            "native" => Self::NATIVE,
            "default" => Self::DEFAULT,
            "strictfp" => Self::STRICTFP,
            "transient" => Self::TRANSIENT,
            "volatile" => Self::VOLATILE,
            _ => return None,
        };
        Some(flag)
    }

    pub fn visibility(&self) -> Visibility {
        if self.contains(Self::PUBLIC) {
            Visibility::Public
        } else if self.contains(Self::PROTECTED) {
            Visibility::Protected
        } else if self.contains(Self::PRIVATE) {
            Visibility::Private
        } else {
            Visibility::Package
        }
    }
}
