use serde::{Deserialize, Serialize};

use crate::name;

/// What kind of class-like structure a descriptor describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    /// A reusable block of members included into classes. Mixin modules are
    /// searched as scopes but are not types of their own.
    Mixin,
}

/// A single declared import (`use Target as Alias`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Declared alias. When absent the last segment of `target` is used.
    #[serde(default)]
    pub alias: Option<String>,
    /// The imported fully-qualified name.
    pub target: String,
}

impl ImportDecl {
    pub fn new(target: impl Into<String>) -> Self {
        Self { alias: None, target: target.into() }
    }

    pub fn aliased(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self { alias: Some(alias.into()), target: target.into() }
    }

    /// The alias this import is reachable under, as declared (not lower-cased).
    pub fn effective_alias(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => name::last_segment(name::strip_absolute(&self.target)),
        }
    }
}

/// One field of one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Fully-qualified name of the declaring class. Filled in when the field
    /// is attached to a [`ClassDescriptor`].
    #[serde(default, skip_deserializing)]
    pub declaring_class: String,
    /// Strong type annotation, when the host exposes one.
    #[serde(default, rename = "type")]
    pub native_type: Option<String>,
    /// Only meaningful alongside `native_type`.
    #[serde(default)]
    pub nullable: bool,
    /// Free documentation text that may embed a type tag.
    #[serde(default, rename = "doc")]
    pub documentation: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaring_class: String::new(),
            native_type: None,
            nullable: false,
            documentation: None,
        }
    }

    pub fn with_native_type(mut self, ty: impl Into<String>, nullable: bool) -> Self {
        self.native_type = Some(ty.into());
        self.nullable = nullable;
        self
    }

    pub fn with_documentation(mut self, text: impl Into<String>) -> Self {
        self.documentation = Some(text.into());
        self
    }
}

/// One method of one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameter_count: usize,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub return_type_nullable: bool,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, parameter_count: usize) -> Self {
        Self {
            name: name.into(),
            parameter_count,
            return_type: None,
            return_type_nullable: false,
            public: true,
        }
    }

    pub fn returning(mut self, ty: impl Into<String>, nullable: bool) -> Self {
        self.return_type = Some(ty.into());
        self.return_type_nullable = nullable;
        self
    }

    pub fn private(mut self) -> Self {
        self.public = false;
        self
    }
}

/// A class-like structure: class, interface or mixin module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Fully-qualified name.
    pub name: String,
    /// Enclosing namespace. Derived from `name` when left empty.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub parent: Option<String>,
    /// Directly included mixin modules, in inclusion order.
    #[serde(default)]
    pub mixins: Vec<String>,
    #[serde(default)]
    pub imports: Vec<ImportDecl>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name::canonical(name.as_ref());
        let namespace = name::namespace_of(&name).to_string();
        Self {
            name,
            namespace,
            kind: ClassKind::Class,
            parent: None,
            mixins: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn interface(name: impl AsRef<str>) -> Self {
        Self { kind: ClassKind::Interface, ..Self::new(name) }
    }

    pub fn mixin(name: impl AsRef<str>) -> Self {
        Self { kind: ClassKind::Mixin, ..Self::new(name) }
    }

    pub fn with_parent(mut self, parent: impl AsRef<str>) -> Self {
        self.parent = Some(name::canonical(parent.as_ref()));
        self
    }

    pub fn with_mixin(mut self, mixin: impl AsRef<str>) -> Self {
        self.mixins.push(name::canonical(mixin.as_ref()));
        self
    }

    pub fn with_import(mut self, mut import: ImportDecl) -> Self {
        import.target = name::canonical(&import.target);
        self.imports.push(import);
        self
    }

    pub fn with_field(mut self, mut field: FieldDescriptor) -> Self {
        field.declaring_class = self.name.clone();
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Brings a descriptor read from an external source into canonical form:
    /// `.` separators in every name and import target, derived namespace,
    /// back-references from fields to this class.
    pub fn normalized(mut self) -> Self {
        self.name = name::canonical(&self.name);
        self.namespace = if self.namespace.is_empty() {
            name::namespace_of(&self.name).to_string()
        } else {
            name::canonical(&self.namespace)
        };
        self.parent = self.parent.as_deref().map(name::canonical);
        for mixin in &mut self.mixins {
            *mixin = name::canonical(mixin);
        }
        for import in &mut self.imports {
            import.target = name::canonical(&import.target);
        }
        for field in &mut self.fields {
            field.declaring_class = self.name.clone();
        }
        self
    }

    pub fn is_type(&self) -> bool {
        matches!(self.kind, ClassKind::Class | ClassKind::Interface)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Public methods in declaration order.
    pub fn public_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|m| m.public)
    }
}
