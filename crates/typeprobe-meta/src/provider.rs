use std::sync::Arc;

use crate::descriptor::ClassDescriptor;

/// Read-only access to class metadata.
///
/// Names passed in are canonical (see [`crate::name::canonical`]). Backed by
/// a [`crate::Schema`] here; embedders may back it with any introspection
/// facility, as long as the metadata stays immutable while it is read.
pub trait MetadataProvider {
    /// Looks up a class, interface or mixin module by fully-qualified name.
    fn class(&self, name: &str) -> Option<&ClassDescriptor>;

    /// Whether `name` names an existing class or interface. Mixin modules
    /// are not types.
    fn type_exists(&self, name: &str) -> bool {
        self.class(name).is_some_and(ClassDescriptor::is_type)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        (**self).class(name)
    }

    fn type_exists(&self, name: &str) -> bool {
        (**self).type_exists(name)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for Arc<T> {
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        (**self).class(name)
    }

    fn type_exists(&self, name: &str) -> bool {
        (**self).type_exists(name)
    }
}
