//! # careertwin Engine
//!
//! The matching pipeline for careertwin: frozen corpus statistics, feature
//! encoding, neighborhood-based recommendations, and the orchestrating
//! [`MatchingService`].
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ CorpusStats  │────>│FeatureEncoder│────>│ Similarity   │
//! │ (one pass)   │     │ (profile→v)  │     │ Index        │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │ k-NN
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │ Twin search  │<────│Recommendation│
//!                      │ result       │     │ Engine       │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use careertwin_engine::{MatchConfig, MatchingService};
//! use careertwin_core::{ProfileRecord, Seniority};
//!
//! let corpus = vec![
//!     ProfileRecord::new("1", "Data Engineer")
//!         .with_seniority(Seniority::Mid)
//!         .with_skills(["python", "sql"]),
//!     ProfileRecord::new("2", "Data Engineer")
//!         .with_seniority(Seniority::Mid)
//!         .with_skills(["python", "sql", "aws"]),
//! ];
//!
//! let service = MatchingService::load_corpus(corpus, MatchConfig::default()).unwrap();
//! let query = service.get("1").unwrap().clone();
//! let result = service.find_career_twins(&query, 1).unwrap();
//! assert_eq!(result.matches[0].profile_id, "2");
//! ```

pub mod encoder;
pub mod explain;
pub mod recommend;
pub mod service;
pub mod stats;

pub use encoder::{EncoderConfig, FeatureEncoder};
pub use explain::MatchExplanation;
pub use recommend::{
    EngineConfig, Evidence, NextMovePrediction, RecommendationEngine, RecommendationPayload,
    SkillRecommendation,
};
pub use service::{MatchConfig, MatchingService, TwinSearchResult};
pub use stats::CorpusStats;
