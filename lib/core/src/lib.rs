//! # careertwin Core
//!
//! Core library for the careertwin matching engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`ProfileRecord`] - Canonical career profile representation
//! - [`Seniority`] - Fixed ordered seniority levels with an explicit Unknown
//! - [`FeatureVector`] - Immutable fixed-length encoded representation
//! - [`SimilarityIndex`] - Exact brute-force k-NN over cosine distance
//!
//! ## Example
//!
//! ```rust
//! use careertwin_core::{FeatureVector, SimilarityIndex};
//!
//! let index = SimilarityIndex::build(vec![
//!     ("p1".to_string(), FeatureVector::new(vec![1.0, 0.0])),
//!     ("p2".to_string(), FeatureVector::new(vec![0.9, 0.1])),
//! ])
//! .unwrap();
//!
//! let query = FeatureVector::new(vec![1.0, 0.0]);
//! let matches = index.query(&query, 1, Some("p1")).unwrap();
//! assert_eq!(matches[0].profile_id, "p2");
//! ```

pub mod error;
pub mod index;
pub mod profile;
pub mod vector;

pub use error::{Error, Result};
pub use index::{MatchResult, SimilarityIndex, DISTANCE_TIE_TOLERANCE};
pub use profile::{normalize_skill, CareerStep, ProfileRecord, Seniority, SENIORITY_LEVELS};
pub use vector::FeatureVector;
