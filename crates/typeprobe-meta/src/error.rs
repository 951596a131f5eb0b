use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::Schema`].
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("Error reading schema {path}: {message}")]
    #[diagnostic(code("SCHEMA-001"), help("Check that the file exists and is readable"))]
    Read { path: PathBuf, message: String },

    /// The schema document is not valid TOML or does not match the expected shape.
    #[error("Invalid schema: {0}")]
    #[diagnostic(
        code("SCHEMA-002"),
        help("Each class is a `[[class]]` table with at least a `name` key")
    )]
    Parse(String),

    /// Two descriptors share a fully-qualified name.
    #[error("Duplicate definition: class `{name}` is defined more than once")]
    #[diagnostic(code("SCHEMA-003"))]
    DuplicateClass { name: String },

    /// A parent or mixin reference names nothing in the schema.
    #[error("Dangling reference: `{class}` refers to unknown {relation} `{target}`")]
    #[diagnostic(code("SCHEMA-004"), help("Add a `[[class]]` entry for `{target}`"))]
    DanglingReference { class: String, relation: &'static str, target: String },

    /// A mixin entry names a class or interface instead of a mixin module.
    #[error("`{class}` includes `{target}`, which is not a mixin module")]
    #[diagnostic(code("SCHEMA-005"))]
    NotAMixin { class: String, target: String },

    /// Following `parent` links from a class returns to it.
    #[error("Cyclic ancestor chain: {}", chain.join(" -> "))]
    #[diagnostic(code("SCHEMA-006"), help("A class cannot be its own ancestor"))]
    CyclicAncestry { chain: Vec<String> },
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

/// Errors raised while loading a [`crate::ProbeConfig`].
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Error reading configuration {path}: {message}")]
    #[diagnostic(code("CONFIG-001"), help("Check that the file exists and is readable"))]
    Read { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code("CONFIG-002"))]
    Parse(String),

    /// A setting was present but unusable.
    #[error("Invalid configuration value for `{key}`: {reason}")]
    #[diagnostic(code("CONFIG-003"))]
    InvalidValue { key: &'static str, reason: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
