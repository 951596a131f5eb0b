use typeprobe_meta::{FieldDescriptor, MetadataProvider, ProbeConfig, TypeToken};
use typeprobe_resolve::{ResolveError, TypeNameResolver};

use crate::detector::TypeDetector;
use crate::error::DetectError;

/// Resolution outcome for one field of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub field: String,
    pub types: Result<Vec<TypeToken>, ResolveError>,
}

/// Detection followed by resolution: the type list a denormalizer consumes.
///
/// An empty list means the field is untyped and any value may be accepted;
/// an error means the field has a type that cannot be resolved. Callers are
/// expected to treat the two differently.
#[derive(Debug)]
pub struct FieldTypes<P> {
    detector: TypeDetector,
    resolver: TypeNameResolver<P>,
}

impl<P: MetadataProvider> FieldTypes<P> {
    pub fn new(provider: P, config: &ProbeConfig) -> Result<Self, DetectError> {
        Ok(Self { detector: TypeDetector::new(config)?, resolver: TypeNameResolver::new(provider) })
    }

    pub fn detector(&self) -> &TypeDetector {
        &self.detector
    }

    pub fn resolver(&self) -> &TypeNameResolver<P> {
        &self.resolver
    }

    /// Detects the raw tokens of `field` and resolves each, keeping order.
    pub fn resolve_field(&self, field: &FieldDescriptor) -> Result<Vec<TypeToken>, ResolveError> {
        self.detector
            .detect(field, self.resolver.provider())
            .iter()
            .map(|token| self.resolver.resolve(token, field))
            .collect()
    }

    /// Resolves every field declared by `class_name`, in declaration order.
    /// A failing field does not stop the others.
    pub fn resolve_class(&self, class_name: &str) -> Result<Vec<FieldReport>, ResolveError> {
        let class = self
            .resolver
            .provider()
            .class(class_name)
            .ok_or_else(|| ResolveError::UnknownClass { class: class_name.to_string() })?;
        Ok(class
            .fields
            .iter()
            .map(|field| FieldReport { field: field.name.clone(), types: self.resolve_field(field) })
            .collect())
    }
}
