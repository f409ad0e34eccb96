//! Exact brute-force nearest-neighbor index
//!
//! [`SimilarityIndex`] holds the encoded vector of every corpus profile and
//! answers k-NN queries by cosine distance. The index is immutable after
//! [`SimilarityIndex::build`]; adding profiles means rebuilding. Queries are
//! read-only, so a built index is freely shareable across threads.
//!
//! Exact scan is deliberate: the target corpus fits in memory and a query
//! is O(corpus size x vector dimension). A larger corpus would swap in a
//! different index behind the same query contract.

use crate::{Error, FeatureVector, Result};
use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Distances closer than this are considered tied and ordered by id.
pub const DISTANCE_TIE_TOLERANCE: f32 = 1e-9;

/// One query hit. Produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub profile_id: String,
    /// Cosine distance, non-negative.
    pub distance: f32,
    /// 1 = closest.
    pub rank: usize,
}

struct IndexEntry {
    id: String,
    vector: FeatureVector,
}

/// Brute-force cosine-distance index over encoded profile vectors.
pub struct SimilarityIndex {
    dim: usize,
    entries: Vec<IndexEntry>,
}

impl SimilarityIndex {
    /// Build the index from `(id, vector)` pairs.
    ///
    /// Fails with [`Error::DimensionMismatch`] if the vectors disagree on
    /// dimensionality and with [`Error::InvalidParameter`] on a duplicate
    /// id. An empty input builds an empty index; querying it fails with
    /// [`Error::EmptyIndex`].
    pub fn build(vectors: Vec<(String, FeatureVector)>) -> Result<Self> {
        let dim = vectors.first().map(|(_, v)| v.dim()).unwrap_or(0);

        let mut seen = AHashSet::with_capacity(vectors.len());
        let mut entries = Vec::with_capacity(vectors.len());
        for (id, vector) in vectors {
            if vector.dim() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    actual: vector.dim(),
                });
            }
            if !seen.insert(id.clone()) {
                return Err(Error::InvalidParameter(format!(
                    "duplicate profile id '{id}' in corpus"
                )));
            }
            entries.push(IndexEntry { id, vector });
        }

        debug!(profiles = entries.len(), dim, "similarity index built");
        Ok(Self { dim, entries })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimensionality of the indexed vectors.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return up to `k` nearest neighbors ordered by non-decreasing cosine
    /// distance, tie-broken by ascending id.
    ///
    /// `exclude_id` drops the query's own corpus entry so the closest match
    /// is never the query itself. Requesting more neighbors than exist
    /// returns all available; callers read the actual count off the result.
    pub fn query(
        &self,
        vector: &FeatureVector,
        k: usize,
        exclude_id: Option<&str>,
    ) -> Result<Vec<MatchResult>> {
        if k == 0 {
            return Err(Error::InvalidParameter(
                "k must be a positive integer".to_string(),
            ));
        }
        if self.entries.is_empty() {
            return Err(Error::EmptyIndex);
        }
        if vector.dim() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                actual: vector.dim(),
            });
        }

        let mut scored: Vec<(&str, f32)> = self
            .entries
            .iter()
            .filter(|entry| exclude_id != Some(entry.id.as_str()))
            .map(|entry| (entry.id.as_str(), vector.cosine_distance(&entry.vector)))
            .collect();

        scored.sort_unstable_by(|a, b| {
            if (a.1 - b.1).abs() <= DISTANCE_TIE_TOLERANCE {
                a.0.cmp(&b.0)
            } else {
                OrderedFloat(a.1).cmp(&OrderedFloat(b.1))
            }
        });
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(i, (id, distance))| MatchResult {
                profile_id: id.to_string(),
                distance,
                rank: i + 1,
            })
            .collect())
    }
}
