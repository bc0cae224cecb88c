mod engine;
mod error;
mod normalize;
mod taxonomy;

pub use engine::{EngineConfig, InventoryItem, MatchResult, PairScore, SimilarityEngine};
pub use error::{Result, TaxonomyError};
pub use normalize::NormalizedKey;
pub use taxonomy::{ConceptTag, Taxonomy};
