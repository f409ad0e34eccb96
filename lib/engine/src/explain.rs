//! Match explanations
//!
//! Explains why two profiles matched: shared skills, skill-set overlap,
//! and agreement on seniority and industry, condensed into an integer
//! strength for quick comparison in a UI.

use careertwin_core::ProfileRecord;
use serde::Serialize;

/// Human-interpretable breakdown of one query/twin pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchExplanation {
    pub twin_id: String,
    /// Skills both profiles share, name-ascending.
    pub shared_skills: Vec<String>,
    /// Jaccard index over the two skill sets.
    pub skill_overlap: f32,
    pub same_seniority: bool,
    pub same_industry: bool,
    /// Coarse 0-6 strength combining the signals above.
    pub strength: u32,
}

impl MatchExplanation {
    /// Compare a query profile against one matched twin.
    #[must_use]
    pub fn between(query: &ProfileRecord, twin: &ProfileRecord) -> Self {
        let shared_skills: Vec<String> = query
            .skills
            .intersection(&twin.skills)
            .cloned()
            .collect();
        let union = query.skills.union(&twin.skills).count();
        let skill_overlap = if union == 0 {
            0.0
        } else {
            shared_skills.len() as f32 / union as f32
        };

        let same_seniority =
            query.seniority == twin.seniority && query.seniority.ordinal().is_some();
        let same_industry = !query.industry.is_empty() && query.industry == twin.industry;

        let mut strength = match shared_skills.len() {
            0 => 0,
            1 => 1,
            2 | 3 => 2,
            _ => 3,
        };
        if same_industry {
            strength += 2;
        }
        if same_seniority {
            strength += 1;
        }

        Self {
            twin_id: twin.id.clone(),
            shared_skills,
            skill_overlap,
            same_seniority,
            same_industry,
            strength,
        }
    }
}
