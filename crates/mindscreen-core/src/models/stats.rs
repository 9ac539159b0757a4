use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;
use super::survey::SurveyResult;

/// Count of results per risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export)]
pub struct RiskDistribution {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    pub fn count(&self, level: RiskLevel) -> u64 {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Anonymized aggregate over every stored result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommunityStats {
    pub total: u64,
    pub risk_distribution: RiskDistribution,
}

impl CommunityStats {
    pub fn from_results(results: &[SurveyResult]) -> Self {
        results.iter().map(|r| r.risk_level).collect()
    }
}

impl FromIterator<RiskLevel> for CommunityStats {
    fn from_iter<I: IntoIterator<Item = RiskLevel>>(iter: I) -> Self {
        let mut stats = CommunityStats::default();
        for level in iter {
            stats.total += 1;
            stats.risk_distribution.record(level);
        }
        stats
    }
}

/// Per-user rollup shown in the admin user list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentHistory {
    pub total_assessments: u64,
    pub last_assessment: Option<jiff::Timestamp>,
    pub last_risk_level: Option<RiskLevel>,
}

impl AssessmentHistory {
    pub fn for_user(results: &[SurveyResult], user_id: i64) -> Self {
        let mut history = AssessmentHistory::default();
        let mut latest: Option<&SurveyResult> = None;

        for result in results.iter().filter(|r| r.user_id == Some(user_id)) {
            history.total_assessments += 1;
            if latest.is_none_or(|l| result.created_at > l.created_at) {
                latest = Some(result);
            }
        }

        if let Some(latest) = latest {
            history.last_assessment = Some(latest.created_at);
            history.last_risk_level = Some(latest.risk_level);
        }
        history
    }
}
