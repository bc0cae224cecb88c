use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{Result, TaxonomyError};
use crate::normalize::NormalizedKey;

/// Label for a family of UI patterns considered semantically interchangeable.
pub type ConceptTag = String;

const BUILTIN_UI: &str = include_str!("../../../taxonomies/ui.json");

/// Immutable mapping from concept tags to synonym tokens. Loaded once,
/// validated at load time, read-only afterwards; safe to share across threads.
#[derive(Clone, Debug)]
pub struct Taxonomy {
    groups: BTreeMap<ConceptTag, BTreeSet<String>>,
}

impl Taxonomy {
    /// The bundled UI-pattern taxonomy (dialogs, inputs, navigation, ...).
    pub fn builtin_ui() -> Self {
        Self::from_bytes(BUILTIN_UI.as_bytes()).expect("builtin ui taxonomy must parse")
    }

    /// Load an alternate taxonomy from a JSON file mapping tag -> token list.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_slice(bytes)?;
        Self::from_entries(raw)
    }

    /// Build from (tag, tokens) entries, rejecting malformed input up front so
    /// scoring never sees a bad table.
    pub fn from_entries<I, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, T)>,
        T: IntoIterator<Item = String>,
    {
        let mut groups: BTreeMap<ConceptTag, BTreeSet<String>> = BTreeMap::new();

        for (tag, tokens) in entries {
            if tag.trim().is_empty() {
                return Err(TaxonomyError::EmptyTag);
            }

            let mut validated = BTreeSet::new();
            for token in tokens {
                if token.is_empty() {
                    return Err(TaxonomyError::EmptyToken { tag });
                }
                if token.chars().any(|c| c.is_uppercase() || matches!(c, '-' | '_' | '.')) {
                    return Err(TaxonomyError::UnnormalizedToken { tag, token });
                }
                validated.insert(token);
            }
            if validated.is_empty() {
                return Err(TaxonomyError::EmptyGroup { tag });
            }

            if groups.insert(tag.clone(), validated).is_some() {
                return Err(TaxonomyError::DuplicateTag { tag });
            }
        }

        Ok(Self { groups })
    }

    /// Every tag whose synonym set overlaps the key by bidirectional substring
    /// containment. Containment rather than equality, so partial and
    /// pluralized names ("notificationbell") still land in their family.
    pub fn concepts_of(&self, key: &NormalizedKey) -> BTreeSet<ConceptTag> {
        let key = key.as_str();
        let mut tags = BTreeSet::new();
        for (tag, tokens) in &self.groups {
            if tokens
                .iter()
                .any(|token| key.contains(token.as_str()) || token.contains(key))
            {
                tags.insert(tag.clone());
            }
        }
        tags
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
