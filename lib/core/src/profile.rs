//! Career profile data model
//!
//! [`ProfileRecord`] is the canonical in-memory representation of one
//! career profile after normalization. Records arrive from the external
//! ingestion collaborator already schema-validated; this module owns the
//! invariants on top of that: skills are a normalized set, seniority is
//! always an explicit category (never absent), and the career sequence is
//! chronologically ordered, oldest first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fixed ordered seniority levels.
///
/// Unknown is an explicit category, not an absence: profiles whose level
/// cannot be derived still carry a value, and the encoder keeps Unknown
/// off the ordinal axis rather than inventing a rank for it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    #[default]
    Unknown,
    Entry,
    Mid,
    Senior,
    Lead,
    Exec,
}

/// Number of known (non-Unknown) seniority levels.
pub const SENIORITY_LEVELS: usize = 5;

impl Seniority {
    /// Ordinal position among the known levels (Entry = 0 .. Exec = 4).
    /// Unknown has no ordinal.
    #[inline]
    #[must_use]
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Seniority::Unknown => None,
            Seniority::Entry => Some(0),
            Seniority::Mid => Some(1),
            Seniority::Senior => Some(2),
            Seniority::Lead => Some(3),
            Seniority::Exec => Some(4),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Unknown => "unknown",
            Seniority::Entry => "entry",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Lead => "lead",
            Seniority::Exec => "exec",
        }
    }

    /// Derive a seniority level from a job title.
    ///
    /// Keyword heuristic for ingestion collaborators that have no explicit
    /// seniority field. Buckets are checked lower-level first, so a title
    /// like "Senior Manager" resolves to Senior.
    #[must_use]
    pub fn from_title(title: &str) -> Seniority {
        let text = title.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|w| text.contains(w));

        if contains_any(&["intern", "entry", "junior", "associate", "graduate"]) {
            Seniority::Entry
        } else if contains_any(&["mid-level", "mid level", "intermediate"]) {
            Seniority::Mid
        } else if contains_any(&["senior", "sr."]) {
            Seniority::Senior
        } else if contains_any(&["staff", "principal", "architect", "lead"]) {
            Seniority::Lead
        } else if contains_any(&["manager", "director", "vp", "chief", "head of", "cto"]) {
            Seniority::Exec
        } else {
            Seniority::Unknown
        }
    }
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One prior position in a profile's trajectory history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerStep {
    pub title: String,
    #[serde(default)]
    pub seniority: Seniority,
}

impl CareerStep {
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, seniority: Seniority) -> Self {
        Self {
            title: title.into(),
            seniority,
        }
    }
}

/// Canonical in-memory representation of one career profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Unique within a loaded corpus, stable across runs.
    pub id: String,
    /// Normalized current or most recent job title.
    pub title: String,
    #[serde(default)]
    pub seniority: Seniority,
    #[serde(default)]
    pub industry: String,
    /// Normalized skill tokens. A `BTreeSet` enforces deduplication and
    /// gives deterministic iteration order. Normalization is applied on
    /// deserialization too, so raw JSON corpora cannot smuggle in
    /// case-variant duplicates.
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: BTreeSet<String>,
    /// Total tenure in months, non-negative.
    #[serde(default)]
    pub tenure_months: f32,
    /// Prior positions, chronologically ordered, oldest first. May be empty.
    #[serde(default)]
    pub career_sequence: Vec<CareerStep>,
}

impl ProfileRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            seniority: Seniority::Unknown,
            industry: String::new(),
            skills: BTreeSet::new(),
            tenure_months: 0.0,
            career_sequence: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = seniority;
        self
    }

    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = industry.into();
        self
    }

    /// Set the skill set, normalizing every token.
    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skills = skills
            .into_iter()
            .map(|s| normalize_skill(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_tenure_months(mut self, tenure_months: f32) -> Self {
        self.tenure_months = tenure_months;
        self
    }

    /// Append one prior position to the career sequence.
    #[must_use]
    pub fn with_step(mut self, title: impl Into<String>, seniority: Seniority) -> Self {
        self.career_sequence.push(CareerStep::new(title, seniority));
        self
    }

    /// True if the profile has the given skill after normalization.
    #[must_use]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(&normalize_skill(skill))
    }

    /// Full trajectory: prior positions followed by the current one.
    pub fn trajectory(&self) -> impl Iterator<Item = (&str, Seniority)> {
        self.career_sequence
            .iter()
            .map(|step| (step.title.as_str(), step.seniority))
            .chain(std::iter::once((self.title.as_str(), self.seniority)))
    }
}

/// Normalize a skill token: trim, lowercase, collapse internal whitespace.
#[must_use]
pub fn normalize_skill(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn deserialize_skills<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .map(|s| normalize_skill(s))
        .filter(|s| !s.is_empty())
        .collect())
}
