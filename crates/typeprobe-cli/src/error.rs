use miette::Diagnostic;
use thiserror::Error;
use typeprobe_detect::DetectError;
use typeprobe_meta::{ConfigError, SchemaError};
use typeprobe_resolve::ResolveError;

/// CLI-level error; wraps the library errors with their diagnostics intact.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Detect(#[from] DetectError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Field `{field}` not found in class `{class}`")]
    #[diagnostic(code(typeprobe::cli::unknown_field))]
    UnknownField { class: String, field: String },

    #[error("{count} field(s) could not be resolved")]
    #[diagnostic(code(typeprobe::cli::unresolved_fields))]
    UnresolvedFields { count: usize },
}
