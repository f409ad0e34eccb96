//! Recommendation engine
//!
//! Derives skill-gap recommendations and next-move predictions from a
//! matched neighborhood of twins. The engine operates only on the match
//! set it is handed: it never re-queries and never re-weights by distance.
//! Every twin counts as equal evidence; presence in the neighborhood is
//! the weight. An empty neighborhood is a normal outcome, reported as
//! [`Evidence::NoEvidence`], never an error.

use careertwin_core::{ProfileRecord, Seniority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bounds on the recommendation lists.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub max_skill_recommendations: usize,
    pub max_next_moves: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_skill_recommendations: 10,
            max_next_moves: 5,
        }
    }
}

/// A skill common among twins but absent from the query profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    /// Twins possessing the skill.
    pub support_count: usize,
    /// `support_count / k_actual`.
    pub support_ratio: f32,
}

/// A career move observed among twins past a stage comparable to the
/// query's current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMovePrediction {
    pub title: String,
    pub seniority: Seniority,
    /// Twins exhibiting this transition.
    pub frequency: usize,
    /// `frequency / k_actual`.
    pub confidence: f32,
}

/// Whether the neighborhood produced any evidence at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evidence {
    Found { twins: usize },
    NoEvidence,
}

/// Recommendations derived from one query's match set. Constructed fresh
/// per query, never cached across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPayload {
    pub evidence: Evidence,
    pub skill_recommendations: Vec<SkillRecommendation>,
    pub next_move_predictions: Vec<NextMovePrediction>,
}

impl RecommendationPayload {
    /// The zero-evidence payload for an empty neighborhood.
    #[must_use]
    pub fn no_evidence() -> Self {
        Self {
            evidence: Evidence::NoEvidence,
            skill_recommendations: Vec::new(),
            next_move_predictions: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_evidence(&self) -> bool {
        matches!(self.evidence, Evidence::Found { .. })
    }
}

/// Produces a [`RecommendationPayload`] from a query profile and its twins.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Derive recommendations from the matched neighborhood.
    pub fn recommend(
        &self,
        query: &ProfileRecord,
        twins: &[&ProfileRecord],
    ) -> RecommendationPayload {
        if twins.is_empty() {
            return RecommendationPayload::no_evidence();
        }

        RecommendationPayload {
            evidence: Evidence::Found {
                twins: twins.len(),
            },
            skill_recommendations: self.skill_gaps(query, twins),
            next_move_predictions: self.next_moves(query, twins),
        }
    }

    /// Skills present in at least one twin but missing from the query,
    /// ranked by descending support ratio, ties by ascending skill name.
    fn skill_gaps(&self, query: &ProfileRecord, twins: &[&ProfileRecord]) -> Vec<SkillRecommendation> {
        let k_actual = twins.len();

        // BTreeMap keeps the name-ascending tie order for free.
        let mut support: BTreeMap<&str, usize> = BTreeMap::new();
        for twin in twins {
            for skill in &twin.skills {
                if !query.skills.contains(skill) {
                    *support.entry(skill.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<SkillRecommendation> = support
            .into_iter()
            .map(|(skill, support_count)| SkillRecommendation {
                skill: skill.to_string(),
                support_count,
                support_ratio: support_count as f32 / k_actual as f32,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.support_count
                .cmp(&a.support_count)
                .then_with(|| a.skill.cmp(&b.skill))
        });
        ranked.truncate(self.config.max_skill_recommendations);
        ranked
    }

    /// Transition targets observed among twins strictly past the stage
    /// comparable to the query's current position.
    ///
    /// Policy: a twin's trajectory is its career sequence followed by its
    /// current position. The comparable stage is the first entry whose
    /// seniority ordinal is at or above the query's; the tallied target is
    /// the entry immediately after it. Twins without such a subsequent
    /// entry contribute nothing. Unknown seniority contributes nothing
    /// anywhere: an Unknown query has no ordinal, an Unknown step never
    /// matches the comparable stage, and an Unknown target is not tallied.
    /// An empty tally yields an empty list, not a failure.
    fn next_moves(&self, query: &ProfileRecord, twins: &[&ProfileRecord]) -> Vec<NextMovePrediction> {
        let k_actual = twins.len();
        let Some(query_level) = query.seniority.ordinal() else {
            return Vec::new();
        };

        let mut tally: BTreeMap<(String, Seniority), usize> = BTreeMap::new();
        for twin in twins {
            let trajectory: Vec<(&str, Seniority)> = twin.trajectory().collect();
            let comparable = trajectory.iter().position(|(_, seniority)| {
                seniority
                    .ordinal()
                    .is_some_and(|level| level >= query_level)
            });
            if let Some(stage) = comparable {
                if let Some((title, seniority)) = trajectory.get(stage + 1) {
                    if seniority.ordinal().is_some() {
                        *tally
                            .entry(((*title).to_string(), *seniority))
                            .or_insert(0) += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<NextMovePrediction> = tally
            .into_iter()
            .map(|((title, seniority), frequency)| NextMovePrediction {
                title,
                seniority,
                frequency,
                confidence: frequency as f32 / k_actual as f32,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.title.cmp(&b.title))
        });
        ranked.truncate(self.config.max_next_moves);
        ranked
    }
}
