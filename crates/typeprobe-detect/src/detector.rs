use typeprobe_meta::{FieldDescriptor, MetadataProvider, ProbeConfig, TypeToken};

use crate::accessor::find_accessor;
use crate::error::DetectError;
use crate::tag::DocTagScanner;

/// The native type that cannot tell `array` apart from "array of X".
const WEAK_NATIVE_TYPE: &str = "array";

/// Outcome of a single detection strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Authoritative; ends detection. May be empty ("known to be unknown").
    Confident(Vec<TypeToken>),
    /// Usable only if no later strategy is confident.
    Weak(Vec<TypeToken>),
    /// The strategy had nothing to say.
    Miss,
}

/// Detection strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    NativeType,
    Documentation,
    Accessor,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::NativeType, Strategy::Documentation, Strategy::Accessor];
}

/// Determines the raw type tokens of a field.
#[derive(Debug, Clone)]
pub struct TypeDetector {
    scanner: DocTagScanner,
    getter_marker: String,
}

impl TypeDetector {
    /// Fails when `config` does not validate or its tag cannot be compiled.
    pub fn new(config: &ProbeConfig) -> Result<Self, DetectError> {
        config.validate()?;
        Ok(Self {
            scanner: DocTagScanner::new(&config.doc_tag)?,
            getter_marker: config.getter_marker.clone(),
        })
    }

    /// Runs every strategy in priority order and merges their outcomes.
    ///
    /// The first confident outcome wins. Otherwise the first weak outcome is
    /// used, and an empty list means nothing could be determined.
    pub fn detect<P>(&self, field: &FieldDescriptor, provider: &P) -> Vec<TypeToken>
    where
        P: MetadataProvider + ?Sized,
    {
        let mut fallback = None;
        for strategy in Strategy::ALL {
            match self.run(strategy, field, provider) {
                Detection::Confident(tokens) => {
                    log::debug!(
                        "`{}::{}` typed by {strategy:?}: {tokens:?}",
                        field.declaring_class,
                        field.name
                    );
                    return tokens;
                }
                Detection::Weak(tokens) => {
                    if fallback.is_none() {
                        fallback = Some(tokens);
                    }
                }
                Detection::Miss => {}
            }
        }

        match fallback {
            Some(tokens) => {
                log::debug!(
                    "`{}::{}` falls back to weak type {tokens:?}",
                    field.declaring_class,
                    field.name
                );
                tokens
            }
            None => Vec::new(),
        }
    }

    pub fn run<P>(&self, strategy: Strategy, field: &FieldDescriptor, provider: &P) -> Detection
    where
        P: MetadataProvider + ?Sized,
    {
        match strategy {
            Strategy::NativeType => self.native_type(field),
            Strategy::Documentation => self.documentation(field),
            Strategy::Accessor => self.accessor(field, provider),
        }
    }

    /// The host's strong annotation, plus `null` when nullable. A bare
    /// non-nullable `array` is only weak.
    pub fn native_type(&self, field: &FieldDescriptor) -> Detection {
        let Some(native) = field.native_type.as_deref().filter(|ty| !ty.is_empty()) else {
            return Detection::Miss;
        };
        let mut tokens = vec![TypeToken::from(native)];
        if field.nullable {
            tokens.push(TypeToken::null());
        }
        if tokens.len() == 1 && native == WEAK_NATIVE_TYPE {
            Detection::Weak(tokens)
        } else {
            Detection::Confident(tokens)
        }
    }

    /// The first type tag in the field's documentation, split on `|`.
    pub fn documentation(&self, field: &FieldDescriptor) -> Detection {
        field
            .documentation
            .as_deref()
            .and_then(|text| self.scanner.tokens(text))
            .map_or(Detection::Miss, Detection::Confident)
    }

    /// The return type of a matching accessor on the declaring class.
    ///
    /// An accessor without a declared return type is a confident empty
    /// answer, not a miss: it also suppresses the weak native fallback.
    pub fn accessor<P>(&self, field: &FieldDescriptor, provider: &P) -> Detection
    where
        P: MetadataProvider + ?Sized,
    {
        let Some(class) = provider.class(&field.declaring_class) else {
            return Detection::Miss;
        };
        let Some(method) = find_accessor(class, &field.name, &self.getter_marker) else {
            return Detection::Miss;
        };
        match &method.return_type {
            Some(ty) => {
                let mut tokens = vec![TypeToken::from(ty.as_str())];
                if method.return_type_nullable {
                    tokens.push(TypeToken::null());
                }
                Detection::Confident(tokens)
            }
            None => {
                log::trace!("accessor `{}` declares no return type", method.name);
                Detection::Confident(Vec::new())
            }
        }
    }
}
