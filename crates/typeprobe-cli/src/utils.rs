use std::path::{Path, PathBuf};

use typeprobe_meta::{ProbeConfig, Schema};

use crate::error::CliError;

/// Name of the configuration file looked up next to a schema.
pub const CONFIG_FILE: &str = "typeprobe.toml";

/// The explicit `--config` path, else `typeprobe.toml` beside the schema
/// when present, else the defaults.
pub fn load_config(schema_path: &Path, explicit: Option<&Path>) -> Result<ProbeConfig, CliError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => sibling_config(schema_path),
    };
    match path {
        Some(path) => {
            log::debug!("using configuration {}", path.display());
            Ok(ProbeConfig::load(&path)?)
        }
        None => Ok(ProbeConfig::default()),
    }
}

fn sibling_config(schema_path: &Path) -> Option<PathBuf> {
    let dir = schema_path.parent().unwrap_or_else(|| Path::new("."));
    let candidate = dir.join(CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

pub fn load_schema(path: &Path) -> Result<Schema, CliError> {
    Ok(Schema::load(path)?)
}

/// Renders a resolved type list; `<untyped>` for an empty one.
pub fn format_types<T: std::fmt::Display>(types: &[T]) -> String {
    if types.is_empty() {
        return "<untyped>".to_string();
    }
    types.iter().map(ToString::to_string).collect::<Vec<_>>().join("|")
}
