use std::path::Path;

use typeprobe_meta::{name, MetadataProvider, TypeToken};
use typeprobe_resolve::TypeNameResolver;

use crate::error::CliError;
use crate::utils::load_schema;

/// Resolves a single token in the context of `class::field`.
pub fn handle_resolve(schema_path: &Path, class: &str, field: &str, token: &str) -> Result<(), CliError> {
    let schema = load_schema(schema_path)?;
    let class = name::canonical(class);
    let descriptor = schema
        .class(&class)
        .and_then(|c| c.field(field))
        .ok_or_else(|| CliError::UnknownField { class: class.clone(), field: field.to_string() })?;

    let resolver = TypeNameResolver::new(&schema);
    let resolved = resolver.resolve(&TypeToken::from(token), descriptor)?;
    println!("{resolved}");
    Ok(())
}
