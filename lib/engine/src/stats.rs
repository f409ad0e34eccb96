//! Frozen corpus statistics
//!
//! [`CorpusStats`] holds the vocabularies and scaling parameters computed
//! in one pass over the full profile corpus at load time. The statistics
//! are frozen thereafter and shared read-only by every encode call, for
//! corpus members and out-of-corpus query profiles alike. This keeps the
//! vocabulary consistent across all vectors without global mutable state.

use ahash::AHashMap;
use careertwin_core::ProfileRecord;

/// Vocabularies and scaling parameters frozen at corpus-load time.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    skill_vocab: Vec<String>,
    skill_slots: AHashMap<String, usize>,
    industry_vocab: Vec<String>,
    industry_slots: AHashMap<String, usize>,
    tenure_mean: f32,
    tenure_std: f32,
}

impl CorpusStats {
    /// Compute statistics over the full corpus.
    ///
    /// The skill vocabulary keeps the `max_skills` most frequent tokens,
    /// frequency ties broken by ascending name; everything rarer collapses
    /// into the encoder's "other" bucket. The industry vocabulary keeps
    /// every distinct non-empty value, sorted ascending. Tenure scaling is
    /// a z-score with mean and standard deviation frozen here.
    #[must_use]
    pub fn from_profiles(profiles: &[ProfileRecord], max_skills: usize) -> Self {
        let mut skill_counts: AHashMap<&str, usize> = AHashMap::new();
        for profile in profiles {
            for skill in &profile.skills {
                *skill_counts.entry(skill.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = skill_counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(max_skills);
        let skill_vocab: Vec<String> = ranked.into_iter().map(|(s, _)| s.to_string()).collect();
        let skill_slots = skill_vocab
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        let mut industry_vocab: Vec<String> = profiles
            .iter()
            .map(|p| p.industry.clone())
            .filter(|i| !i.is_empty())
            .collect();
        industry_vocab.sort_unstable();
        industry_vocab.dedup();
        let industry_slots = industry_vocab
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect();

        let (tenure_mean, tenure_std) = tenure_moments(profiles);

        Self {
            skill_vocab,
            skill_slots,
            industry_vocab,
            industry_slots,
            tenure_mean,
            tenure_std,
        }
    }

    /// Retained skill vocabulary, slot order.
    #[inline]
    #[must_use]
    pub fn skill_vocab(&self) -> &[String] {
        &self.skill_vocab
    }

    /// Industry vocabulary, slot order.
    #[inline]
    #[must_use]
    pub fn industry_vocab(&self) -> &[String] {
        &self.industry_vocab
    }

    /// Slot of a skill in the retained vocabulary, if frequent enough.
    #[inline]
    #[must_use]
    pub fn skill_slot(&self, skill: &str) -> Option<usize> {
        self.skill_slots.get(skill).copied()
    }

    /// Slot of an industry in the vocabulary. Unseen values get no slot
    /// and encode into the reserved unknown position.
    #[inline]
    #[must_use]
    pub fn industry_slot(&self, industry: &str) -> Option<usize> {
        self.industry_slots.get(industry).copied()
    }

    #[inline]
    #[must_use]
    pub fn tenure_mean(&self) -> f32 {
        self.tenure_mean
    }

    #[inline]
    #[must_use]
    pub fn tenure_std(&self) -> f32 {
        self.tenure_std
    }

    /// Z-score a tenure value against the frozen moments.
    ///
    /// A degenerate corpus (zero spread) scales everything to 0.0 so no
    /// dimension can dominate on noise.
    #[inline]
    #[must_use]
    pub fn scale_tenure(&self, tenure_months: f32) -> f32 {
        if self.tenure_std <= f32::EPSILON {
            0.0
        } else {
            (tenure_months - self.tenure_mean) / self.tenure_std
        }
    }
}

fn tenure_moments(profiles: &[ProfileRecord]) -> (f32, f32) {
    if profiles.is_empty() {
        return (0.0, 0.0);
    }
    let n = profiles.len() as f32;
    let mean = profiles.iter().map(|p| p.tenure_months).sum::<f32>() / n;
    let variance = profiles
        .iter()
        .map(|p| {
            let d = p.tenure_months - mean;
            d * d
        })
        .sum::<f32>()
        / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<ProfileRecord> {
        vec![
            ProfileRecord::new("p1", "Engineer")
                .with_industry("Technology")
                .with_skills(["python", "sql"])
                .with_tenure_months(24.0),
            ProfileRecord::new("p2", "Engineer")
                .with_industry("Technology")
                .with_skills(["python", "aws"])
                .with_tenure_months(48.0),
            ProfileRecord::new("p3", "Analyst")
                .with_industry("Finance")
                .with_skills(["sql", "python"])
                .with_tenure_months(36.0),
        ]
    }

    #[test]
    fn test_skill_vocab_ranked_by_frequency_then_name() {
        let stats = CorpusStats::from_profiles(&corpus(), 30);
        // python appears 3x, sql 2x, aws 1x
        assert_eq!(stats.skill_vocab(), &["python", "sql", "aws"]);
        assert_eq!(stats.skill_slot("python"), Some(0));
        assert_eq!(stats.skill_slot("aws"), Some(2));
        assert_eq!(stats.skill_slot("kubernetes"), None);
    }

    #[test]
    fn test_skill_vocab_truncated() {
        let stats = CorpusStats::from_profiles(&corpus(), 2);
        assert_eq!(stats.skill_vocab(), &["python", "sql"]);
        assert_eq!(stats.skill_slot("aws"), None);
    }

    #[test]
    fn test_industry_vocab_sorted_distinct() {
        let stats = CorpusStats::from_profiles(&corpus(), 30);
        assert_eq!(stats.industry_vocab(), &["Finance", "Technology"]);
        assert_eq!(stats.industry_slot("Finance"), Some(0));
        assert_eq!(stats.industry_slot("Retail"), None);
    }

    #[test]
    fn test_tenure_scaling() {
        let stats = CorpusStats::from_profiles(&corpus(), 30);
        assert!((stats.tenure_mean() - 36.0).abs() < 1e-4);
        // mean maps to zero, symmetric values mirror
        assert!(stats.scale_tenure(36.0).abs() < 1e-4);
        assert!((stats.scale_tenure(24.0) + stats.scale_tenure(48.0)).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_tenure_scales_to_zero() {
        let profiles = vec![
            ProfileRecord::new("p1", "Engineer").with_tenure_months(12.0),
            ProfileRecord::new("p2", "Engineer").with_tenure_months(12.0),
        ];
        let stats = CorpusStats::from_profiles(&profiles, 30);
        assert_eq!(stats.scale_tenure(12.0), 0.0);
        assert_eq!(stats.scale_tenure(99.0), 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let stats = CorpusStats::from_profiles(&[], 30);
        assert!(stats.skill_vocab().is_empty());
        assert!(stats.industry_vocab().is_empty());
        assert_eq!(stats.scale_tenure(10.0), 0.0);
    }
}
