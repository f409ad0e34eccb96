//! # careertwin
//!
//! A career-twin matching engine: encode heterogeneous career profiles
//! (titles, skills, industries, seniority, tenure) into comparable feature
//! vectors, find the profiles with the most similar trajectories, and
//! derive skill-gap recommendations and likely next moves from that
//! neighborhood.
//!
//! ## Quick Start
//!
//! ```rust
//! use careertwin::prelude::*;
//!
//! let corpus = vec![
//!     ProfileRecord::new("1", "Data Engineer")
//!         .with_seniority(Seniority::Mid)
//!         .with_industry("Technology")
//!         .with_skills(["python", "sql"]),
//!     ProfileRecord::new("2", "Data Engineer")
//!         .with_seniority(Seniority::Mid)
//!         .with_industry("Technology")
//!         .with_skills(["python", "sql", "aws"]),
//! ];
//!
//! let service = MatchingService::load_corpus(corpus, MatchConfig::default()).unwrap();
//! let query = service.get("1").unwrap().clone();
//!
//! let result = service.find_career_twins(&query, 1).unwrap();
//! assert_eq!(result.matches[0].profile_id, "2");
//! assert_eq!(result.recommendations.skill_recommendations[0].skill, "aws");
//! ```
//!
//! ## Crate Structure
//!
//! - [`careertwin-core`](https://docs.rs/careertwin-core) - Data model,
//!   feature vectors, exact k-NN index
//! - [`careertwin-engine`](https://docs.rs/careertwin-engine) - Corpus
//!   statistics, encoder, recommendations, matching service
//!
//! ## Scope
//!
//! The crate owns the matching core only. Raw ingestion, on-disk caching,
//! and presentation are external collaborators speaking the serde-friendly
//! data contracts re-exported here.

// Re-export core types
pub use careertwin_core::{
    normalize_skill, CareerStep, Error, FeatureVector, MatchResult, ProfileRecord, Result,
    Seniority, SimilarityIndex,
};

// Re-export engine types
pub use careertwin_engine::{
    CorpusStats, EncoderConfig, EngineConfig, Evidence, FeatureEncoder, MatchConfig,
    MatchExplanation, MatchingService, NextMovePrediction, RecommendationEngine,
    RecommendationPayload, SkillRecommendation, TwinSearchResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CareerStep, CorpusStats, EncoderConfig, EngineConfig, Error, Evidence, FeatureEncoder,
        FeatureVector, MatchConfig, MatchExplanation, MatchResult, MatchingService,
        NextMovePrediction, ProfileRecord, RecommendationEngine, RecommendationPayload, Result,
        Seniority, SimilarityIndex, SkillRecommendation, TwinSearchResult,
    };
}
