use regex::Regex;
use typeprobe_meta::TypeToken;

use crate::error::DetectError;

/// Separator between alternatives in a tag's type expression.
const UNION_SEPARATOR: char = '|';

/// Finds the type expression of a documentation tag such as `@var Foo|null`.
///
/// Deliberately narrow: only the first `tag <whitespace> expression` match
/// is considered and the expression ends at the next whitespace.
#[derive(Debug, Clone)]
pub struct DocTagScanner {
    pattern: Regex,
}

impl DocTagScanner {
    pub fn new(tag: &str) -> Result<Self, DetectError> {
        let pattern = Regex::new(&format!(r"{}\s+(\S+)", regex::escape(tag)))
            .map_err(|source| DetectError::InvalidTag { tag: tag.to_string(), source })?;
        Ok(Self { pattern })
    }

    /// The raw type expression of the first tag in `text`.
    pub fn scan<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|expr| expr.as_str())
    }

    /// Splits a type expression on `|`, keeping order and dropping empty parts.
    pub fn split(expression: &str) -> Vec<TypeToken> {
        expression
            .split(UNION_SEPARATOR)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(TypeToken::from)
            .collect()
    }

    /// Scans `text` and splits the expression found; `None` when no tag matched.
    pub fn tokens(&self, text: &str) -> Option<Vec<TypeToken>> {
        self.scan(text).map(Self::split)
    }
}
