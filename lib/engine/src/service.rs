//! Matching service
//!
//! [`MatchingService`] is the corpus handle and single public entry point
//! for callers: it loads a corpus once (statistics, encoding, index build)
//! and then answers `find_career_twins` queries. The loaded service is
//! immutable; queries are independent read-only operations, so one service
//! instance is safe to share across concurrent callers without locking.

use crate::encoder::{EncoderConfig, FeatureEncoder};
use crate::explain::MatchExplanation;
use crate::recommend::{EngineConfig, RecommendationEngine, RecommendationPayload};
use ahash::AHashMap;
use careertwin_core::{Error, MatchResult, ProfileRecord, Result, SimilarityIndex};
use serde::Serialize;
use tracing::{debug, info};

/// Top-level configuration for corpus loading.
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    pub encoder: EncoderConfig,
    pub engine: EngineConfig,
}

/// Response of one `find_career_twins` call.
///
/// `k_actual` is reported explicitly: requesting more neighbors than the
/// corpus holds is not an error, but callers must not be misled about how
/// many matches back the recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct TwinSearchResult {
    pub matches: Vec<MatchResult>,
    pub k_requested: usize,
    pub k_actual: usize,
    pub recommendations: RecommendationPayload,
}

/// Frozen corpus handle: profiles, statistics, encoder, and index.
pub struct MatchingService {
    profiles: Vec<ProfileRecord>,
    by_id: AHashMap<String, usize>,
    encoder: FeatureEncoder,
    engine: RecommendationEngine,
    index: SimilarityIndex,
}

impl MatchingService {
    /// One-time corpus construction: compute frozen statistics, encode
    /// every profile, and build the similarity index.
    ///
    /// Fails on the first profile that does not encode and on duplicate
    /// ids; a corpus is loaded whole or not at all.
    pub fn load_corpus(profiles: Vec<ProfileRecord>, config: MatchConfig) -> Result<Self> {
        let encoder = FeatureEncoder::fit(&profiles, &config.encoder);

        let mut vectors = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            let vector = encoder.encode(profile)?;
            vectors.push((profile.id.clone(), vector));
        }
        let index = SimilarityIndex::build(vectors)?;

        let by_id = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        info!(
            profiles = profiles.len(),
            dim = index.dim(),
            skills = encoder.stats().skill_vocab().len(),
            industries = encoder.stats().industry_vocab().len(),
            "corpus loaded"
        );

        Ok(Self {
            profiles,
            by_id,
            encoder,
            engine: RecommendationEngine::new(config.engine),
            index,
        })
    }

    /// Number of loaded profiles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Look up a corpus profile by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProfileRecord> {
        self.by_id.get(id).map(|&i| &self.profiles[i])
    }

    /// All loaded profiles, in load order.
    #[inline]
    #[must_use]
    pub fn profiles(&self) -> &[ProfileRecord] {
        &self.profiles
    }

    /// Dimensionality of the encoded vectors.
    #[inline]
    #[must_use]
    pub fn vector_dim(&self) -> usize {
        self.index.dim()
    }

    /// Find the k nearest career twins of `query` and derive
    /// recommendations from them.
    ///
    /// The query profile may or may not be a corpus member; its own id is
    /// always excluded from the matches. Deterministic for a fixed corpus
    /// and fixed `(query, k)`.
    pub fn find_career_twins(
        &self,
        query: &ProfileRecord,
        k: usize,
    ) -> Result<TwinSearchResult> {
        if k == 0 {
            return Err(Error::InvalidParameter(
                "k must be a positive integer".to_string(),
            ));
        }

        let vector = self.encoder.encode(query)?;
        let matches = self.index.query(&vector, k, Some(query.id.as_str()))?;

        let twins: Vec<&ProfileRecord> = matches
            .iter()
            .filter_map(|m| self.get(&m.profile_id))
            .collect();
        let recommendations = self.engine.recommend(query, &twins);

        debug!(
            query = %query.id,
            k_requested = k,
            k_actual = matches.len(),
            "career twin query served"
        );

        Ok(TwinSearchResult {
            k_requested: k,
            k_actual: matches.len(),
            matches,
            recommendations,
        })
    }

    /// Explain why a matched corpus profile resembles the query.
    pub fn explain_match(
        &self,
        query: &ProfileRecord,
        twin_id: &str,
    ) -> Result<MatchExplanation> {
        let twin = self.get(twin_id).ok_or_else(|| {
            Error::InvalidParameter(format!("unknown profile id '{twin_id}'"))
        })?;
        Ok(MatchExplanation::between(query, twin))
    }
}
