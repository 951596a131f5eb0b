//! Metadata model for typeprobe.
//!
//! This crate describes the structural facts the resolvers read about a
//! program's classes: their fully-qualified names, namespaces, declared
//! imports, included mixin modules, parent class, fields and methods.
//!
//! - [`MetadataProvider`] is the read-only capability the resolvers depend on.
//! - [`Schema`] is an in-memory provider, loadable from a TOML document.
//! - [`TypeToken`] is the value passed between detection and resolution.
//! - [`ImportTable`] is the per-class alias table derived from declared imports.
//! - [`ProbeConfig`] holds the few host-language conventions that vary.

mod config;
mod descriptor;
mod error;
mod imports;
pub mod name;
mod provider;
mod schema;
mod token;

pub use config::{ProbeConfig, DEFAULT_DOC_TAG, DEFAULT_GETTER_MARKER};
pub use descriptor::{ClassDescriptor, ClassKind, FieldDescriptor, ImportDecl, MethodDescriptor};
pub use error::{ConfigError, SchemaError};
pub use imports::{ImportTable, NAMESPACE_ALIAS};
pub use provider::MetadataProvider;
pub use schema::Schema;
pub use token::{is_primitive, TypeToken, COLLECTION_MARKER, NULL_TYPE, PRIMITIVE_TYPES};
