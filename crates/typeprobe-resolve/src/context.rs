use std::fmt;

use typeprobe_meta::ClassDescriptor;

/// The member whose type is being resolved.
///
/// Decides which mixin modules are searched: a mixin module is only eligible
/// when it declares the member the type belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberContext {
    Field(String),
    /// Return type of a method.
    Method(String),
    /// A parameter of `method`.
    Parameter { method: String, name: String },
}

impl MemberContext {
    pub fn field(name: impl Into<String>) -> Self {
        MemberContext::Field(name.into())
    }

    pub fn method(name: impl Into<String>) -> Self {
        MemberContext::Method(name.into())
    }

    pub fn parameter(method: impl Into<String>, name: impl Into<String>) -> Self {
        MemberContext::Parameter { method: method.into(), name: name.into() }
    }

    /// Whether `mixin` may contribute names to this member's resolution.
    pub fn admits(&self, mixin: &ClassDescriptor) -> bool {
        match self {
            MemberContext::Field(name) => mixin.field(name).is_some(),
            MemberContext::Method(name) => mixin.method(name).is_some(),
            MemberContext::Parameter { method, .. } => mixin.method(method).is_some(),
        }
    }
}

impl fmt::Display for MemberContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberContext::Field(name) => f.write_str(name),
            MemberContext::Method(name) => write!(f, "{name}()"),
            MemberContext::Parameter { method, name } => write!(f, "{method}({name})"),
        }
    }
}
