use mindscreen_core::models::risk::RiskLevel;
use mindscreen_core::models::stats::{AssessmentHistory, CommunityStats, RiskDistribution};
use mindscreen_core::models::survey::{Demographic, SurveyResult};
use uuid::Uuid;

fn result(user_id: Option<i64>, level: RiskLevel, at: &str) -> SurveyResult {
    SurveyResult {
        id: Uuid::new_v4(),
        user_id,
        demographic: Demographic::default(),
        responses: serde_json::Map::new(),
        risk_level: level,
        notes: String::new(),
        created_at: at.parse().unwrap(),
    }
}

#[test]
fn empty_results_give_zero_stats() {
    let stats = CommunityStats::from_results(&[]);
    assert_eq!(stats, CommunityStats::default());
}

#[test]
fn distribution_counts_each_tier() {
    let results = vec![
        result(None, RiskLevel::High, "2025-03-01T10:00:00Z"),
        result(Some(1), RiskLevel::Low, "2025-03-02T10:00:00Z"),
        result(Some(2), RiskLevel::Low, "2025-03-03T10:00:00Z"),
        result(Some(1), RiskLevel::Medium, "2025-03-04T10:00:00Z"),
    ];

    let stats = CommunityStats::from_results(&results);
    assert_eq!(stats.total, 4);
    assert_eq!(
        stats.risk_distribution,
        RiskDistribution {
            high: 1,
            medium: 1,
            low: 2
        }
    );
    assert_eq!(stats.risk_distribution.count(RiskLevel::Low), 2);
}

#[test]
fn stats_serialize_with_tier_names() {
    let stats: CommunityStats = [RiskLevel::High, RiskLevel::High].into_iter().collect();
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "total": 2,
            "riskDistribution": { "High": 2, "Medium": 0, "Low": 0 }
        })
    );
}

#[test]
fn history_uses_most_recent_result() {
    let results = vec![
        result(Some(7), RiskLevel::Medium, "2025-05-10T08:00:00Z"),
        result(Some(7), RiskLevel::High, "2025-05-12T08:00:00Z"),
        result(Some(7), RiskLevel::Low, "2025-05-11T08:00:00Z"),
        result(Some(8), RiskLevel::Low, "2025-06-01T08:00:00Z"),
    ];

    let history = AssessmentHistory::for_user(&results, 7);
    assert_eq!(history.total_assessments, 3);
    assert_eq!(history.last_risk_level, Some(RiskLevel::High));
    assert_eq!(
        history.last_assessment,
        Some("2025-05-12T08:00:00Z".parse().unwrap())
    );
}

#[test]
fn history_for_unknown_user_is_empty() {
    let results = vec![result(None, RiskLevel::High, "2025-05-10T08:00:00Z")];
    let history = AssessmentHistory::for_user(&results, 42);
    assert_eq!(history, AssessmentHistory::default());
}

#[test]
fn event_carries_level_and_time_only() {
    let r = result(Some(3), RiskLevel::Medium, "2025-01-01T00:00:00Z");
    let json = serde_json::to_value(r.event()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "riskLevel": "Medium", "timestamp": "2025-01-01T00:00:00Z" })
    );
}

#[test]
fn parse_many_rejects_non_arrays() {
    assert!(SurveyResult::parse_many("{}").is_err());
    assert!(SurveyResult::parse_many("[]").unwrap().is_empty());
}

#[test]
fn stored_result_with_null_demographic_parses() {
    let json = r#"[{
        "id": "6f1c2a4e-8a4b-4a8e-9a57-2f0d5b1f4c11",
        "userId": null,
        "demographic": null,
        "responses": {},
        "riskLevel": "Low",
        "notes": "",
        "createdAt": "2025-04-01T09:00:00Z"
    }]"#;
    let results = SurveyResult::parse_many(json).unwrap();
    assert_eq!(results[0].demographic, Demographic::default());
}
