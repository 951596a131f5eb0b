use rustc_hash::FxHashSet;
use typeprobe_meta::{name, ClassDescriptor, FieldDescriptor, MetadataProvider, TypeToken};

use crate::cache::ScopeCache;
use crate::context::MemberContext;
use crate::error::ResolveError;

/// Resolves raw type tokens into canonical, fully-qualified ones.
///
/// Holds no state besides the provider and a [`ScopeCache`]; a resolver can
/// be shared across threads when its provider can.
#[derive(Debug)]
pub struct TypeNameResolver<P> {
    provider: P,
    cache: ScopeCache,
}

impl<P: MetadataProvider> TypeNameResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, cache: ScopeCache::new() }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn cache(&self) -> &ScopeCache {
        &self.cache
    }

    /// Looks up the class that declares `field`.
    pub fn declaring_class(&self, field: &FieldDescriptor) -> Result<&ClassDescriptor, ResolveError> {
        self.provider
            .class(&field.declaring_class)
            .ok_or_else(|| ResolveError::UnknownClass { class: field.declaring_class.clone() })
    }

    /// Resolves `token` as the type of `field`.
    ///
    /// Primitive tokens (with or without a collection marker) are returned
    /// unchanged without consulting the declaring class.
    pub fn resolve(&self, token: &TypeToken, field: &FieldDescriptor) -> Result<TypeToken, ResolveError> {
        if token.is_primitive() {
            return Ok(token.clone());
        }
        let class = self.declaring_class(field)?;
        self.resolve_in(token, class, &MemberContext::field(&field.name))
    }

    /// Resolves `token` as the type of `context`, a member of `class`.
    pub fn resolve_in(
        &self,
        token: &TypeToken,
        class: &ClassDescriptor,
        context: &MemberContext,
    ) -> Result<TypeToken, ResolveError> {
        let (base, collection) = token.split_collection();
        if typeprobe_meta::is_primitive(base) {
            return Ok(token.clone());
        }

        let unresolvable = || ResolveError::unresolvable(&class.name, context, token.as_str());
        let raw = name::normalize(base);
        let candidate = if name::is_absolute(&raw) {
            name::canonical(&raw)
        } else {
            let found = self.try_resolve_fqn(&raw, class, context).ok_or_else(unresolvable)?;
            name::canonical(&found)
        };

        if !self.provider.type_exists(&candidate) {
            log::debug!("`{token}` in `{}` resolved to unknown type `{candidate}`", class.name);
            return Err(unresolvable());
        }
        Ok(TypeToken::with_collection(&candidate, collection))
    }

    /// Finds the fully-qualified name `raw_name` refers to from inside
    /// `class`, or `None` when no search layer places it.
    ///
    /// An import match is returned as mapped, without an existence check;
    /// every other layer only answers with names that exist.
    pub fn try_resolve_fqn(
        &self,
        raw_name: &str,
        class: &ClassDescriptor,
        context: &MemberContext,
    ) -> Option<String> {
        let mut visited = FxHashSet::default();
        self.search_scope(raw_name, class, context, &mut visited)
    }

    fn search_scope(
        &self,
        raw_name: &str,
        class: &ClassDescriptor,
        context: &MemberContext,
        visited: &mut FxHashSet<String>,
    ) -> Option<String> {
        if !visited.insert(class.name.clone()) {
            log::trace!("scope `{}` already searched for `{raw_name}`", class.name);
            return None;
        }

        let imports = self.cache.imports(class);
        let (alias, remainder) = name::split_alias(raw_name);
        if let Some(target) = imports.get(alias) {
            log::trace!("`{raw_name}` matched import `{alias}` of `{}`", class.name);
            return Some(format!("{target}{remainder}"));
        }

        let in_namespace = name::join(&class.namespace, raw_name);
        if self.provider.type_exists(&in_namespace) {
            log::trace!("`{raw_name}` found in namespace of `{}`", class.name);
            return Some(in_namespace);
        }

        if let Some(root) = imports.root_namespace() {
            let in_root = name::join(root, raw_name);
            if self.provider.type_exists(&in_root) {
                log::trace!("`{raw_name}` found in root namespace `{root}`");
                return Some(in_root);
            }
        }

        if self.provider.type_exists(raw_name) {
            log::trace!("`{raw_name}` found in the global namespace");
            return Some(raw_name.to_string());
        }

        for mixin_name in self.cache.mixins(&self.provider, class).iter() {
            let Some(mixin) = self.provider.class(mixin_name) else {
                log::debug!("mixin module `{mixin_name}` of `{}` is unknown", class.name);
                continue;
            };
            if !context.admits(mixin) {
                log::trace!("skipping mixin module `{mixin_name}`: it does not declare `{context}`");
                continue;
            }
            if let Some(found) = self.search_scope(raw_name, mixin, context, visited) {
                log::debug!("`{raw_name}` resolved through mixin module `{mixin_name}`");
                return Some(found);
            }
        }

        None
    }
}
