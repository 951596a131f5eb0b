use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while resolving type names.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ResolveError {
    /// A non-primitive token could not be mapped to an existing class or
    /// interface through any search layer.
    #[error("Unresolvable type: `{token}` used by `{class}::{member}` does not name a known class or interface")]
    #[diagnostic(
        code(typeprobe_resolve::unresolvable_type),
        help("Is `{token}` imported in `{class}`? Add an import or write its fully-qualified name")
    )]
    UnresolvableType {
        /// Fully-qualified name of the declaring class.
        class: String,
        /// The field (or method / parameter) whose type was being resolved.
        member: String,
        /// The token exactly as it was handed to the resolver.
        token: String,
    },

    /// A member names a declaring class the metadata provider does not know.
    #[error("Unknown class: `{class}` is not known to the metadata provider")]
    #[diagnostic(code(typeprobe_resolve::unknown_class))]
    UnknownClass { class: String },
}

impl ResolveError {
    pub fn unresolvable(class: &str, member: impl ToString, token: &str) -> Self {
        ResolveError::UnresolvableType {
            class: class.to_string(),
            member: member.to_string(),
            token: token.to_string(),
        }
    }
}
