// Unit tests for the fundmatch scoring pipeline

use chrono::{Duration, Utc};
use fundmatch::core::{
    combine_scores, criteria, generate_reasons, normalize_profile, score_criteria,
};
use fundmatch::models::{Grant, OrganizationProfile, ScoringWeights};
use fundmatch::{Priority, RankingEngine};

fn create_grant(id: &str) -> Grant {
    Grant {
        id: id.to_string(),
        eligible_org_types: vec!["Startup".to_string()],
        industry_focus: Some("technology".to_string()),
        location: None,
        amount_min: Some(50_000.0),
        amount_max: Some(100_000.0),
        deadline: Some(Utc::now() + Duration::days(10)),
        funding_purposes: vec![],
    }
}

fn create_profile() -> OrganizationProfile {
    OrganizationProfile {
        org_type: "Startup".to_string(),
        industry: Some("technology".to_string()),
        location: None,
        preferred_industries: vec![],
        preferred_locations: vec![],
        preferred_org_types: vec![],
        preferred_amount_min: Some(25_000.0),
        preferred_amount_max: Some(200_000.0),
        max_deadline_days: 30,
    }
}

#[test]
fn test_all_criterion_scores_within_bounds() {
    let now = Utc::now();
    let profile = normalize_profile(&create_profile());

    // A spread of grants, from fully aligned to completely sparse
    let grants = vec![
        create_grant("aligned"),
        Grant {
            id: "sparse".to_string(),
            eligible_org_types: vec![],
            industry_focus: None,
            location: None,
            amount_min: None,
            amount_max: None,
            deadline: None,
            funding_purposes: vec![],
        },
        Grant {
            id: "expired".to_string(),
            eligible_org_types: vec!["Cooperative".to_string()],
            industry_focus: Some("agriculture".to_string()),
            location: Some("Bavaria".to_string()),
            amount_min: Some(900_000.0),
            amount_max: Some(950_000.0),
            deadline: Some(now - Duration::days(30)),
            funding_purposes: vec!["equipment".to_string()],
        },
    ];

    for grant in &grants {
        let scores = score_criteria(grant, &profile, now);
        for score in [
            scores.org_type,
            scores.industry,
            scores.location,
            scores.funding_range,
            scores.deadline,
            scores.purpose,
        ] {
            assert!(score <= 100, "criterion score out of range for {}", grant.id);
        }

        let overall = combine_scores(&scores, &ScoringWeights::default());
        assert!(overall <= 100, "overall score out of range for {}", grant.id);
    }
}

#[test]
fn test_org_type_tier_monotonicity() {
    // Raising the organisation-type tier while holding everything else
    // fixed never decreases the overall score.
    let now = Utc::now();
    let profile = normalize_profile(&create_profile());
    let weights = ScoringWeights::default();

    let mut grant = create_grant("g-1");
    let mut previous = 0u8;

    for eligible in [
        vec!["Cooperative".to_string()],        // no match: 0
        vec!["Early-stage startup".to_string()], // direct overlap: 60
        vec!["Startup".to_string()],            // exact: 100
    ] {
        grant.eligible_org_types = eligible;
        let overall = combine_scores(&score_criteria(&grant, &profile, now), &weights);
        assert!(overall >= previous, "overall score decreased across tiers");
        previous = overall;
    }
}

#[test]
fn test_missing_industry_scores_neutral() {
    // Grant with no industry field, profile with industry set
    let mut grant = create_grant("g-1");
    grant.industry_focus = None;
    let profile = normalize_profile(&create_profile());

    assert_eq!(criteria::score_industry(&grant, &profile), 50);
}

#[test]
fn test_strong_candidate_scores_high() {
    // Aligned org type, industry, location, amount and deadline
    let engine = RankingEngine::with_default_weights();
    let mut grant = create_grant("g-1");
    grant.location = Some("Berlin".to_string());
    grant.funding_purposes = vec!["R&D".to_string()];

    let mut profile = create_profile();
    profile.location = Some("Berlin".to_string());

    let result = engine.compute_match(&grant, &profile);

    assert!(result.score >= 90, "expected >= 90, got {}", result.score);
    assert_eq!(result.priority, Priority::High);
}

#[test]
fn test_expired_deadline_demotes_priority() {
    // Same sparse grant with the deadline five days in the past
    let engine = RankingEngine::with_default_weights();
    let mut grant = create_grant("g-1");
    grant.deadline = Some(Utc::now() - Duration::days(5));

    let scores = score_criteria(
        &grant,
        &normalize_profile(&create_profile()),
        Utc::now(),
    );
    assert_eq!(scores.deadline, 0);

    let result = engine.compute_match(&grant, &create_profile());
    assert_ne!(result.priority, Priority::High);
}

#[test]
fn test_reasons_never_empty() {
    let engine = RankingEngine::with_default_weights();
    let profile = create_profile();

    let grants = vec![
        create_grant("aligned"),
        Grant {
            id: "hopeless".to_string(),
            eligible_org_types: vec!["Municipality".to_string()],
            industry_focus: Some("maritime".to_string()),
            location: Some("coastal".to_string()),
            amount_min: Some(5_000_000.0),
            amount_max: Some(9_000_000.0),
            deadline: Some(Utc::now() - Duration::days(1)),
            funding_purposes: vec![],
        },
    ];

    for grant in &grants {
        let result = engine.compute_match(grant, &profile);
        assert!(!result.reasons.is_empty(), "no reasons for {}", grant.id);
    }
}

#[test]
fn test_fallback_reason_for_weak_match() {
    let profile = normalize_profile(&OrganizationProfile {
        org_type: "Municipality".to_string(),
        industry: Some("maritime".to_string()),
        location: None,
        preferred_industries: vec![],
        preferred_locations: vec![],
        preferred_org_types: vec![],
        preferred_amount_min: Some(1_000.0),
        preferred_amount_max: Some(2_000.0),
        max_deadline_days: 7,
    });

    let grant = Grant {
        id: "g-1".to_string(),
        eligible_org_types: vec!["Startup".to_string()],
        industry_focus: Some("software".to_string()),
        location: None,
        amount_min: Some(500_000.0),
        amount_max: Some(800_000.0),
        deadline: Some(Utc::now() + Duration::days(200)),
        funding_purposes: vec![],
    };

    let reasons = generate_reasons(&score_criteria(&grant, &profile, Utc::now()));
    assert_eq!(reasons, vec!["general compatibility"]);
}

#[test]
fn test_compute_match_idempotent() {
    let engine = RankingEngine::with_default_weights();
    let mut grant = create_grant("g-1");
    // Fix the deadline far out so the two calls cannot straddle a day boundary
    grant.deadline = Some(Utc::now() + Duration::days(100));
    let profile = create_profile();

    let first = engine.compute_match(&grant, &profile);
    let second = engine.compute_match(&grant, &profile);

    assert_eq!(first.score, second.score);
    assert_eq!(first.reasons, second.reasons);
    assert_eq!(first.priority, second.priority);
}

#[test]
fn test_custom_weights_change_emphasis() {
    // Shifting all weight onto the deadline makes an expired grant score 0
    let weights = ScoringWeights {
        org_type: 0,
        industry: 0,
        location: 0,
        funding_range: 0,
        deadline: 100,
        purpose: 0,
    };
    let engine = RankingEngine::new(weights);

    let mut grant = create_grant("g-1");
    grant.deadline = Some(Utc::now() - Duration::days(1));

    let result = engine.compute_match(&grant, &create_profile());
    assert_eq!(result.score, 0);
    assert_eq!(result.priority, Priority::Low);
}
