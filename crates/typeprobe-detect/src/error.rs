use miette::Diagnostic;
use thiserror::Error;
use typeprobe_meta::ConfigError;
use typeprobe_resolve::ResolveError;

#[derive(Debug, Error, Diagnostic)]
pub enum DetectError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),


    /// The configured documentation tag does not yield a usable pattern.
    #[error("Invalid documentation tag `{tag}`")]
    #[diagnostic(code(typeprobe_detect::invalid_tag))]
    InvalidTag {
        tag: String,
        #[source]
        source: regex::Error,
    },
}

/// Raised by a denormalization engine when no converter can build the
/// target type from a value.
///
/// Carries the context this crate supplies: the denormalizer identity, the
/// offending value, the target type name and, when type resolution was the
/// cause, the underlying [`ResolveError`].
#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum DenormalizeError {
    #[error("Unsupported value for denormalization: `{denormalizer}` cannot build `{target_type}` from {value}")]
    #[diagnostic(code(typeprobe_detect::unsupported_value))]
    UnsupportedValue {
        denormalizer: String,
        value: String,
        target_type: String,
        #[source]
        source: Option<ResolveError>,
    },
}

impl DenormalizeError {
    pub fn unsupported_value(
        denormalizer: impl Into<String>,
        value: impl Into<String>,
        target_type: impl Into<String>,
    ) -> Self {
        DenormalizeError::UnsupportedValue {
            denormalizer: denormalizer.into(),
            value: value.into(),
            target_type: target_type.into(),
            source: None,
        }
    }

    /// Records the resolution failure that made the value unsupported.
    pub fn caused_by(mut self, cause: ResolveError) -> Self {
        let DenormalizeError::UnsupportedValue { source, .. } = &mut self;
        *source = Some(cause);
        self
    }
}
