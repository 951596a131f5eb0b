use std::sync::Arc;

use dashmap::DashMap;
use typeprobe_meta::{ClassDescriptor, ImportTable, MetadataProvider};

use crate::scope::mixin_closure;

/// Lazily built per-class scope data, keyed by fully-qualified name.
///
/// Class metadata is immutable for the lifetime of a provider, so entries
/// never go stale. Concurrent first lookups may build the same entry twice;
/// the first insert wins and both callers see equal data.
#[derive(Debug, Default)]
pub struct ScopeCache {
    imports: DashMap<String, Arc<ImportTable>>,
    mixins: DashMap<String, Arc<[String]>>,
}

impl ScopeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(&self, class: &ClassDescriptor) -> Arc<ImportTable> {
        if let Some(table) = self.imports.get(&class.name) {
            return Arc::clone(table.value());
        }
        let table = Arc::new(ImportTable::build(class));
        let entry = self.imports.entry(class.name.clone()).or_insert(table);
        Arc::clone(entry.value())
    }

    pub fn mixins<P>(&self, provider: &P, class: &ClassDescriptor) -> Arc<[String]>
    where
        P: MetadataProvider + ?Sized,
    {
        if let Some(mixins) = self.mixins.get(&class.name) {
            return Arc::clone(mixins.value());
        }
        let closure: Arc<[String]> = mixin_closure(provider, class).into();
        log::trace!("mixin closure of `{}`: {:?}", class.name, closure);
        let entry = self.mixins.entry(class.name.clone()).or_insert(closure);
        Arc::clone(entry.value())
    }

    pub fn clear(&self) {
        self.imports.clear();
        self.mixins.clear();
    }

    /// Number of classes with a cached import table.
    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.mixins.is_empty()
    }
}
