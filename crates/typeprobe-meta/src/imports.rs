use indexmap::IndexMap;

use crate::descriptor::ClassDescriptor;
use crate::name;

/// Alias under which a class declares its root (default) namespace.
pub const NAMESPACE_ALIAS: &str = "__NAMESPACE__";

/// Per-class mapping from lower-cased alias to fully-qualified name.
///
/// Built from the class's declared imports. An import whose alias is
/// [`NAMESPACE_ALIAS`], in any case, does not become an alias; it sets the
/// root namespace consulted after the class's own namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportTable {
    aliases: IndexMap<String, String>,
    root_namespace: Option<String>,
}

impl ImportTable {
    /// Builds the table for `class`. Pure: the same class always yields an
    /// equal table. A later import with the same alias replaces an earlier one.
    pub fn build(class: &ClassDescriptor) -> Self {
        let mut table = Self::default();
        for import in &class.imports {
            let target = name::canonical(&import.target);
            let is_root = import
                .alias
                .as_deref()
                .is_some_and(|alias| alias.eq_ignore_ascii_case(NAMESPACE_ALIAS));
            if is_root {
                table.root_namespace = Some(target);
                continue;
            }
            let alias = import.effective_alias().to_lowercase();
            table.aliases.insert(alias, target);
        }
        log::trace!(
            "built import table for `{}`: {} aliases, root namespace {:?}",
            class.name,
            table.aliases.len(),
            table.root_namespace
        );
        table
    }

    /// Looks up an alias, ignoring case.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    /// The `__NAMESPACE__` entry, if the class declared one.
    pub fn root_namespace(&self) -> Option<&str> {
        self.root_namespace.as_deref()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.root_namespace.is_none()
    }

    /// Aliases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(alias, target)| (alias.as_str(), target.as_str()))
    }
}
