use std::fmt;

use serde::Serialize;

/// Extensions recognized (case-insensitively) when stripping a source-file suffix.
const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "vue", "svelte"];

/// Hook / HOC naming prefixes dropped so "useDialog" compares as "dialog".
const NAME_PREFIXES: &[&str] = &["use", "with"];

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

/// Canonical comparison form of a component name: lowercase, extension
/// removed, hook/HOC prefix removed, separators stripped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalize a raw basename. Infallible: unrecognized input degrades to
    /// a lowercased, separator-stripped string.
    ///
    /// The steps run in a fixed order (extension, case, prefix, separators)
    /// because each one operates on the output of the previous.
    pub fn from_raw(raw: &str) -> Self {
        let stem = strip_extension(raw);
        let lowered = stem.to_lowercase();
        let mut name = strip_name_prefix(&lowered).to_string();
        name.retain(|c| !is_separator(c));
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip one recognized source-file extension, keeping unknown suffixes.
fn strip_extension(name: &str) -> &str {
    if let Some((stem, ext)) = name.rsplit_once('.') {
        if SOURCE_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        {
            return stem;
        }
    }
    name
}

/// Drop a leading hook/HOC prefix ("use" or "with"), plus at most one
/// trailing separator, exactly once.
fn strip_name_prefix(name: &str) -> &str {
    for prefix in NAME_PREFIXES {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest.strip_prefix(is_separator).unwrap_or(rest);
        }
    }
    name
}
