use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use typeprobe_meta::{ClassDescriptor, MetadataProvider};

/// Mixin modules included by `class` and each of its ancestors, in order:
/// the class's own mixins first, then its parent's, and so on. Each module
/// appears once.
///
/// The walk stops at a missing parent or at a class already visited, so a
/// malformed cyclic chain terminates.
pub fn mixin_closure<P>(provider: &P, class: &ClassDescriptor) -> Vec<String>
where
    P: MetadataProvider + ?Sized,
{
    let mut visited = FxHashSet::default();
    let mut mixins = IndexSet::new();
    let mut current = Some(class);

    while let Some(class) = current {
        if !visited.insert(class.name.as_str()) {
            log::warn!("cyclic ancestor chain reached `{}` twice; stopping", class.name);
            break;
        }
        for mixin in &class.mixins {
            mixins.insert(mixin.clone());
        }
        current = class.parent.as_deref().and_then(|parent| provider.class(parent));
    }

    mixins.into_iter().collect()
}
