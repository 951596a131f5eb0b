//! An in-memory [`MetadataProvider`] built from a precompiled schema.
//!
//! The TOML form is a list of `[[class]]` tables:
//!
//! ```toml
//! [[class]]
//! name = 'App\Models\User'
//! parent = "App.Models.Model"
//! mixins = ["App.Concerns.HasAddress"]
//! imports = [{ target = "App.Values.Email" }, { alias = "Dt", target = "DateTimeImmutable" }]
//!
//! [[class.fields]]
//! name = "email"
//! doc = "@var Email|null"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::descriptor::{ClassDescriptor, ClassKind};
use crate::error::SchemaError;
use crate::provider::MetadataProvider;

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default, rename = "class")]
    classes: Vec<ClassDescriptor>,
}

/// Class metadata keyed by fully-qualified name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    classes: IndexMap<String, ClassDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a schema from descriptors without cross-reference validation.
    pub fn from_classes(
        classes: impl IntoIterator<Item = ClassDescriptor>,
    ) -> Result<Self, SchemaError> {
        let mut schema = Self::new();
        for class in classes {
            schema.insert(class)?;
        }
        Ok(schema)
    }

    /// Parses and validates a TOML schema document.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = toml::from_str(source)?;
        let schema = Self::from_classes(file.classes)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Reads, parses and validates a TOML schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let schema = Self::from_toml_str(&source)?;
        log::debug!("loaded {} classes from {}", schema.len(), path.display());
        Ok(schema)
    }

    /// Adds a descriptor in canonical form. Fails if the name is taken.
    pub fn insert(&mut self, class: ClassDescriptor) -> Result<(), SchemaError> {
        let class = class.normalized();
        if self.classes.contains_key(&class.name) {
            return Err(SchemaError::DuplicateClass { name: class.name });
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    /// Checks that every parent and mixin reference resolves, that mixin
    /// references name mixin modules and that no ancestor chain loops.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for class in self.classes.values() {
            if let Some(parent) = &class.parent {
                if !self.classes.contains_key(parent) {
                    return Err(SchemaError::DanglingReference {
                        class: class.name.clone(),
                        relation: "parent",
                        target: parent.clone(),
                    });
                }
            }
            for mixin in &class.mixins {
                match self.classes.get(mixin) {
                    None => {
                        return Err(SchemaError::DanglingReference {
                            class: class.name.clone(),
                            relation: "mixin",
                            target: mixin.clone(),
                        })
                    }
                    Some(target) if target.kind != ClassKind::Mixin => {
                        return Err(SchemaError::NotAMixin {
                            class: class.name.clone(),
                            target: mixin.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
            self.check_ancestry(class)?;
        }
        Ok(())
    }

    fn check_ancestry(&self, class: &ClassDescriptor) -> Result<(), SchemaError> {
        let mut seen = FxHashSet::default();
        let mut chain = vec![class.name.clone()];
        seen.insert(class.name.as_str());
        let mut current = class;
        while let Some(parent) = current.parent.as_deref() {
            chain.push(parent.to_string());
            if !seen.insert(parent) {
                return Err(SchemaError::CyclicAncestry { chain });
            }
            match self.classes.get(parent) {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All descriptors in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }
}

impl MetadataProvider for Schema {
    fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }
}
