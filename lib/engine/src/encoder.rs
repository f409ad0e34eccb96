//! Feature encoder
//!
//! Converts a [`ProfileRecord`] into a fixed-length [`FeatureVector`]
//! against frozen [`CorpusStats`]. Encoding is a pure function of
//! `(profile, statistics)`: the same inputs always reproduce the same
//! vector, which the index and the caching collaborator both rely on.
//!
//! Vector layout, fixed order:
//!
//! ```text
//! [0]            seniority ordinal, scaled to [0, 1]; 0.0 when unknown
//! [1]            seniority-known flag (1.0 / 0.0)
//! [2]            tenure z-score
//! [3 ..]         industry one-hot + reserved unknown slot
//! [.. dim]       skill multi-hot + "other" slot for out-of-vocab skills
//! ```
//!
//! The two seniority components keep Unknown off the ordinal axis instead
//! of assigning it a made-up rank. Skills encode binary presence, not
//! counts.

use crate::stats::CorpusStats;
use careertwin_core::{Error, FeatureVector, ProfileRecord, Result, SENIORITY_LEVELS};

/// Leading scalar components before the one-hot blocks.
const SCALAR_COMPONENTS: usize = 3;

/// Encoder configuration.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Skills retained in the vocabulary; rarer ones share the "other" slot.
    pub max_skills: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { max_skills: 30 }
    }
}

/// Encodes profiles against a frozen vocabulary.
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    stats: CorpusStats,
}

impl FeatureEncoder {
    /// Build the frozen statistics from the corpus and wrap them.
    #[must_use]
    pub fn fit(profiles: &[ProfileRecord], config: &EncoderConfig) -> Self {
        Self {
            stats: CorpusStats::from_profiles(profiles, config.max_skills),
        }
    }

    /// Wrap pre-computed statistics (e.g. rehydrated by a caching layer).
    #[must_use]
    pub fn new(stats: CorpusStats) -> Self {
        Self { stats }
    }

    #[inline]
    #[must_use]
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Total vector dimensionality for this vocabulary.
    #[must_use]
    pub fn dim(&self) -> usize {
        SCALAR_COMPONENTS
            + self.stats.industry_vocab().len()
            + 1 // industry unknown slot
            + self.stats.skill_vocab().len()
            + 1 // skill "other" slot
    }

    /// Encode one profile.
    ///
    /// Fails with [`Error::Schema`] on an empty required field and
    /// [`Error::InvalidParameter`] on negative or non-finite tenure; a
    /// profile is never silently dropped. Unseen industries map to the
    /// reserved unknown slot rather than failing, so out-of-corpus query
    /// profiles encode cleanly.
    pub fn encode(&self, profile: &ProfileRecord) -> Result<FeatureVector> {
        if profile.id.trim().is_empty() {
            return Err(Error::Schema {
                id: profile.id.clone(),
                field: "id",
            });
        }
        if profile.title.trim().is_empty() {
            return Err(Error::Schema {
                id: profile.id.clone(),
                field: "title",
            });
        }
        if !profile.tenure_months.is_finite() || profile.tenure_months < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "profile '{}' has invalid tenure_months {}",
                profile.id, profile.tenure_months
            )));
        }

        let mut components = Vec::with_capacity(self.dim());

        match profile.seniority.ordinal() {
            Some(ordinal) => {
                components.push(f32::from(ordinal) / (SENIORITY_LEVELS - 1) as f32);
                components.push(1.0);
            }
            None => {
                components.push(0.0);
                components.push(0.0);
            }
        }

        components.push(self.stats.scale_tenure(profile.tenure_months));

        let industry_slots = self.stats.industry_vocab().len() + 1;
        let industry_base = components.len();
        components.resize(industry_base + industry_slots, 0.0);
        let industry_slot = self
            .stats
            .industry_slot(&profile.industry)
            .unwrap_or(industry_slots - 1);
        components[industry_base + industry_slot] = 1.0;

        let skill_slots = self.stats.skill_vocab().len() + 1;
        let skill_base = components.len();
        components.resize(skill_base + skill_slots, 0.0);
        for skill in &profile.skills {
            let slot = self.stats.skill_slot(skill).unwrap_or(skill_slots - 1);
            components[skill_base + slot] = 1.0;
        }

        debug_assert_eq!(components.len(), self.dim());
        Ok(FeatureVector::new(components))
    }
}
