//! Qualified-name helpers.
//!
//! Names may be written with either `\` or `.` between segments; internally
//! every qualified name uses `.`. A leading separator marks a name as
//! absolute (already fully qualified).

/// Canonical segment separator.
pub const SEPARATOR: char = '.';

/// Separator accepted on input and rewritten to [`SEPARATOR`].
pub const ALT_SEPARATOR: char = '\\';

/// Rewrites every alternate separator to [`SEPARATOR`], keeping a leading
/// absolute marker if there is one.
pub fn normalize(name: &str) -> String {
    name.replace(ALT_SEPARATOR, ".")
}

/// Whether `name` carries a leading absolute marker.
pub fn is_absolute(name: &str) -> bool {
    name.starts_with(SEPARATOR) || name.starts_with(ALT_SEPARATOR)
}

/// Strips a single leading absolute marker.
pub fn strip_absolute(name: &str) -> &str {
    name.strip_prefix(SEPARATOR)
        .or_else(|| name.strip_prefix(ALT_SEPARATOR))
        .unwrap_or(name)
}

/// Normalizes separators and drops the absolute marker.
pub fn canonical(name: &str) -> String {
    normalize(strip_absolute(name))
}

/// The namespace part of a canonical name (everything before the last
/// separator), or `""` for a global name.
pub fn namespace_of(name: &str) -> &str {
    name.rfind(SEPARATOR).map_or("", |idx| &name[..idx])
}

/// The last segment of a name, with either separator.
pub fn last_segment(name: &str) -> &str {
    name.rfind(|c| c == SEPARATOR || c == ALT_SEPARATOR).map_or(name, |idx| &name[idx + 1..])
}

/// Joins a namespace and a relative name. An empty namespace yields the
/// name unchanged.
pub fn join(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}{SEPARATOR}{name}")
    }
}

/// Splits a name on its first separator into the alias segment and the
/// remainder. The remainder keeps its leading separator and is empty for a
/// single-segment name.
pub fn split_alias(name: &str) -> (&str, &str) {
    match name.find(SEPARATOR) {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}
