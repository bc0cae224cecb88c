use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use strsim::normalized_levenshtein;

use crate::normalize::NormalizedKey;
use crate::taxonomy::{ConceptTag, Taxonomy};

/// Score floor applied when two keys share at least one concept tag.
const CONCEPT_FLOOR: f64 = 0.60;
/// Additive bonus per shared concept tag (applied after the floor).
const CONCEPT_BONUS: f64 = 0.15;
/// Score floor applied when one key contains the other.
const CONTAINMENT_FLOOR: f64 = 0.70;

/// Tunables for match filtering and result capping.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Similarity below this is not reported. Lower = more aggressive warnings.
    pub threshold: f64,
    /// Cap on the ranked result list.
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: 0.55,
            max_results: 5,
        }
    }
}

/// A known existing component file, normalized once at collection time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub display_name: String,
    pub relative_path: String,
    pub key: NormalizedKey,
}

impl InventoryItem {
    pub fn new(display_name: impl Into<String>, relative_path: impl Into<String>) -> Self {
        let display_name = display_name.into();
        let key = NormalizedKey::from_raw(&display_name);
        Self {
            display_name,
            relative_path: relative_path.into(),
            key,
        }
    }
}

/// One ranked similarity hit against the inventory.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub display_name: String,
    pub relative_path: String,
    /// Final score in [0, 1], rounded to two decimals.
    pub score: f64,
    /// Concept tags shared between target and candidate; empty when the score
    /// came from character similarity or containment alone.
    pub matched_concepts: BTreeSet<ConceptTag>,
}

/// Raw scorer output for a single (target, candidate) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct PairScore {
    pub score: f64,
    pub matched_concepts: BTreeSet<ConceptTag>,
}

/// Similarity engine: character-level ratio, taxonomy overlap, and substring
/// containment combined by floor-raising.
///
/// Each signal can only raise the running score, never lower it below a prior
/// signal's floor, so a strong taxonomy match is not masked by low character
/// similarity and vice versa.
pub struct SimilarityEngine {
    taxonomy: Taxonomy,
    config: EngineConfig,
}

impl SimilarityEngine {
    pub fn new(taxonomy: Taxonomy, config: EngineConfig) -> Self {
        Self { taxonomy, config }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Score one candidate pair. Pure and side-effect free.
    pub fn score(&self, target: &NormalizedKey, candidate: &NormalizedKey) -> PairScore {
        let mut score = normalized_levenshtein(target.as_str(), candidate.as_str());

        let overlap: BTreeSet<ConceptTag> = self
            .taxonomy
            .concepts_of(target)
            .intersection(&self.taxonomy.concepts_of(candidate))
            .cloned()
            .collect();
        if !overlap.is_empty() {
            score = score.max(CONCEPT_FLOOR) + CONCEPT_BONUS * overlap.len() as f64;
        }

        // Substring containment can only help; very short keys over-match
        // here (a two-character key is contained in almost everything).
        if target.as_str().contains(candidate.as_str())
            || candidate.as_str().contains(target.as_str())
        {
            score = score.max(CONTAINMENT_FLOOR);
        }

        PairScore {
            score: score.clamp(0.0, 1.0),
            matched_concepts: overlap,
        }
    }

    /// Rank the whole inventory against a raw target name: filter by
    /// threshold, stable-sort descending, truncate to the result cap.
    pub fn rank(&self, target: &str, inventory: &[InventoryItem]) -> Vec<MatchResult> {
        let target_key = NormalizedKey::from_raw(target);
        log::debug!(
            "Ranking '{}' (key '{}') against {} inventory items",
            target,
            target_key,
            inventory.len()
        );

        let mut matches: Vec<MatchResult> = inventory
            .iter()
            .filter_map(|item| {
                let pair = self.score(&target_key, &item.key);
                if pair.score < self.config.threshold {
                    return None;
                }
                Some(MatchResult {
                    display_name: item.display_name.clone(),
                    relative_path: item.relative_path.clone(),
                    score: round_to_hundredths(pair.score),
                    matched_concepts: pair.matched_concepts,
                })
            })
            .collect();

        // Stable sort: ties keep inventory order.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(self.config.max_results);

        log::debug!("{} matches above threshold {}", matches.len(), self.config.threshold);
        matches
    }
}

fn round_to_hundredths(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
