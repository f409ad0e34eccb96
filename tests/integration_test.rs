// Integration tests for careertwin
use careertwin::prelude::*;

fn tech_corpus() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord::new("ana", "Data Engineer")
            .with_seniority(Seniority::Mid)
            .with_industry("Technology")
            .with_skills(["python", "sql", "airflow"])
            .with_tenure_months(40.0)
            .with_step("Junior Data Engineer", Seniority::Entry),
        ProfileRecord::new("ben", "Data Engineer")
            .with_seniority(Seniority::Mid)
            .with_industry("Technology")
            .with_skills(["python", "sql", "spark"])
            .with_tenure_months(44.0)
            .with_step("Junior Data Engineer", Seniority::Entry),
        ProfileRecord::new("cleo", "Senior Data Engineer")
            .with_seniority(Seniority::Senior)
            .with_industry("Technology")
            .with_skills(["python", "sql", "spark", "aws"])
            .with_tenure_months(80.0)
            .with_step("Junior Data Engineer", Seniority::Entry)
            .with_step("Data Engineer", Seniority::Mid),
        ProfileRecord::new("dev", "Staff Engineer")
            .with_seniority(Seniority::Lead)
            .with_industry("Technology")
            .with_skills(["python", "aws", "kubernetes", "terraform"])
            .with_tenure_months(120.0)
            .with_step("Data Engineer", Seniority::Mid)
            .with_step("Senior Data Engineer", Seniority::Senior),
        ProfileRecord::new("eve", "Accountant")
            .with_seniority(Seniority::Senior)
            .with_industry("Finance")
            .with_skills(["excel", "quickbooks"])
            .with_tenure_months(90.0),
    ]
}

fn load() -> MatchingService {
    MatchingService::load_corpus(tech_corpus(), MatchConfig::default()).unwrap()
}

#[test]
fn test_end_to_end_twin_search() {
    let service = load();
    let query = service.get("ana").unwrap().clone();

    let result = service.find_career_twins(&query, 3).unwrap();
    assert_eq!(result.k_actual, 3);
    // The other data engineers come before the accountant.
    assert_eq!(result.matches[0].profile_id, "ben");
    assert!(result
        .matches
        .iter()
        .take(3)
        .all(|m| m.profile_id != "eve"));
    // Distances are non-decreasing and ranks sequential.
    for window in result.matches.windows(2) {
        assert!(window[0].distance <= window[1].distance);
        assert_eq!(window[1].rank, window[0].rank + 1);
    }
}

#[test]
fn test_skill_recommendations_exclude_owned_skills() {
    let service = load();
    let query = service.get("ana").unwrap().clone();

    let result = service.find_career_twins(&query, 3).unwrap();
    for rec in &result.recommendations.skill_recommendations {
        assert!(
            !query.skills.contains(&rec.skill),
            "recommended a skill the query already has: {}",
            rec.skill
        );
        assert!(rec.support_count >= 1);
        assert!(rec.support_ratio > 0.0 && rec.support_ratio <= 1.0);
    }
    // aws and spark both have support 2; the name tie-break puts aws first.
    let top: Vec<_> = result
        .recommendations
        .skill_recommendations
        .iter()
        .take(2)
        .map(|r| (r.skill.as_str(), r.support_count))
        .collect();
    assert_eq!(top, vec![("aws", 2), ("spark", 2)]);
}

#[test]
fn test_next_moves_follow_observed_transitions() {
    let service = load();
    let query = service.get("ana").unwrap().clone();

    let result = service.find_career_twins(&query, 3).unwrap();
    let moves = &result.recommendations.next_move_predictions;
    assert!(!moves.is_empty());
    // cleo and dev both moved from a mid stage to Senior Data Engineer.
    assert_eq!(moves[0].title, "Senior Data Engineer");
    assert_eq!(moves[0].seniority, Seniority::Senior);
    assert_eq!(moves[0].frequency, 2);
}

#[test]
fn test_out_of_corpus_query_with_unseen_industry() {
    let service = load();
    let query = ProfileRecord::new("zara", "Data Engineer")
        .with_seniority(Seniority::Mid)
        .with_industry("Space Logistics")
        .with_skills(["python", "sql"]);

    // Unseen industry encodes into the unknown slot without failing.
    let result = service.find_career_twins(&query, 2).unwrap();
    assert_eq!(result.k_actual, 2);
    assert!(result.recommendations.has_evidence());
}

#[test]
fn test_oversized_k_is_reported_not_rejected() {
    let service = load();
    let query = service.get("ana").unwrap().clone();

    let result = service.find_career_twins(&query, 50).unwrap();
    assert_eq!(result.k_requested, 50);
    assert_eq!(result.k_actual, 4);
}

#[test]
fn test_invalid_parameters_propagate() {
    let service = load();
    let query = service.get("ana").unwrap().clone();

    assert!(matches!(
        service.find_career_twins(&query, 0),
        Err(Error::InvalidParameter(_))
    ));

    let negative = ProfileRecord::new("q", "Engineer").with_tenure_months(-3.0);
    assert!(matches!(
        service.find_career_twins(&negative, 1),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_encoding_is_idempotent_against_frozen_stats() {
    let profiles = tech_corpus();
    let encoder = FeatureEncoder::fit(&profiles, &EncoderConfig::default());

    for profile in &profiles {
        let first = encoder.encode(profile).unwrap();
        let second = encoder.encode(profile).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dim(), encoder.dim());
    }
}

#[test]
fn test_zero_evidence_for_sparse_corner() {
    // Single-profile corpus: a member query has no possible neighbors.
    let corpus = vec![ProfileRecord::new("solo", "Engineer")
        .with_seniority(Seniority::Mid)
        .with_skills(["python"])];
    let service = MatchingService::load_corpus(corpus, MatchConfig::default()).unwrap();
    let query = service.get("solo").unwrap().clone();

    let result = service.find_career_twins(&query, 5).unwrap();
    assert_eq!(result.k_actual, 0);
    assert!(result.matches.is_empty());
    assert_eq!(result.recommendations.evidence, Evidence::NoEvidence);
}

#[test]
fn test_service_result_json_contract() {
    let service = load();
    let query = service.get("ana").unwrap().clone();
    let result = service.find_career_twins(&query, 2).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["k_actual"], 2);
    assert_eq!(json["k_requested"], 2);
    assert!(json["matches"].as_array().is_some());
    assert_eq!(json["recommendations"]["evidence"]["status"], "found");
}

#[test]
fn test_raw_json_corpus_normalizes_skills() {
    // Case-variant tokens in a raw corpus must collapse into one skill,
    // or a query's own skill could come back as a recommendation.
    let corpus: Vec<ProfileRecord> = serde_json::from_str(
        r#"[
            {"id": "q", "title": "Data Engineer", "skills": ["python", "sql"]},
            {"id": "t", "title": "Data Engineer", "skills": ["Python", "sql", "aws"]}
        ]"#,
    )
    .unwrap();
    let service = MatchingService::load_corpus(corpus, MatchConfig::default()).unwrap();
    let query = service.get("q").unwrap().clone();

    let result = service.find_career_twins(&query, 1).unwrap();
    let recommended: Vec<_> = result
        .recommendations
        .skill_recommendations
        .iter()
        .map(|r| r.skill.as_str())
        .collect();
    assert_eq!(recommended, vec!["aws"]);
}

#[test]
fn test_profiles_roundtrip_through_json() {
    let profiles = tech_corpus();
    let json = serde_json::to_string(&profiles).unwrap();
    let parsed: Vec<ProfileRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(profiles, parsed);

    // A rehydrated corpus behaves identically.
    let service = MatchingService::load_corpus(parsed, MatchConfig::default()).unwrap();
    let query = service.get("ana").unwrap().clone();
    let result = service.find_career_twins(&query, 1).unwrap();
    assert_eq!(result.matches[0].profile_id, "ben");
}
