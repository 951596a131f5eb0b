use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of primitive type names. Primitives never need
/// qualification and pass through resolution unchanged.
pub const PRIMITIVE_TYPES: [&str; 14] = [
    "bool", "null", "boolean", "string", "int", "integer", "float", "double", "array", "object",
    "callable", "resource", "mixed", "iterable",
];

/// Trailing marker for "collection of" a type, e.g. `Foo[]`.
pub const COLLECTION_MARKER: &str = "[]";

/// The null type token appended for nullable types.
pub const NULL_TYPE: &str = "null";

/// Exact, case-sensitive membership test against [`PRIMITIVE_TYPES`].
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}

/// A type name, raw or resolved, optionally suffixed with [`COLLECTION_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeToken(String);

impl TypeToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `null` token.
    pub fn null() -> Self {
        Self(NULL_TYPE.to_string())
    }

    /// Builds a token from a base name, reattaching the collection marker
    /// when `collection` is set.
    pub fn with_collection(base: &str, collection: bool) -> Self {
        if collection {
            Self(format!("{base}{COLLECTION_MARKER}"))
        } else {
            Self(base.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits off one trailing collection marker: `("Foo", true)` for `Foo[]`.
    pub fn split_collection(&self) -> (&str, bool) {
        match self.0.strip_suffix(COLLECTION_MARKER) {
            Some(base) => (base, true),
            None => (&self.0, false),
        }
    }

    /// Whether the base name (collection marker stripped) is a primitive.
    pub fn is_primitive(&self) -> bool {
        is_primitive(self.split_collection().0)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TypeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_collection() {
        assert_eq!(TypeToken::from("Foo[]").split_collection(), ("Foo", true));
        assert_eq!(TypeToken::from("Foo").split_collection(), ("Foo", false));
        // Only one marker is stripped.
        assert_eq!(TypeToken::from("Foo[][]").split_collection(), ("Foo[]", true));
    }

    #[test]
    fn test_primitive_set_is_case_sensitive() {
        assert!(TypeToken::from("int").is_primitive());
        assert!(TypeToken::from("int[]").is_primitive());
        assert!(!TypeToken::from("Int").is_primitive());
        assert!(!TypeToken::from("Foo").is_primitive());
    }

    #[test]
    fn test_with_collection() {
        assert_eq!(TypeToken::with_collection("App.Bar", true), "App.Bar[]");
        assert_eq!(TypeToken::with_collection("App.Bar", false), "App.Bar");
    }
}
