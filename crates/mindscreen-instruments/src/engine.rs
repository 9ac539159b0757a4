use mindscreen_core::models::risk::RiskLevel;
use tracing::debug;

use crate::config::{ScaleConfig, ScoringConfig};
use crate::response::{ResponseSet, coerce_option};
use crate::rules;
use crate::scoring::{RiskAssessment, ScaleScore, ScaleScores};

/// Score a response set against the standard cut-offs.
pub fn score(responses: &ResponseSet) -> RiskAssessment {
    score_with(responses, &ScoringConfig::standard())
}

/// Score a response set against `config`.
///
/// Total over its input: values that do not read as integers count as 0
/// and keys without a known scale prefix are ignored. Completeness is the
/// caller's concern (see [`crate::intake`]).
pub fn score_with(responses: &ResponseSet, config: &ScoringConfig) -> RiskAssessment {
    let scores = ScaleScores {
        depression: scale_score(responses, &config.depression),
        anxiety: scale_score(responses, &config.anxiety),
        stress: scale_score(responses, &config.stress),
    };

    let critical_flags = rules::critical_flags(responses, config);
    let patterns = rules::patterns(&scores, config);
    let risk_level = risk_level(&scores, !critical_flags.is_empty(), config);

    debug!(
        depression = scores.depression.score,
        anxiety = scores.anxiety.score,
        stress = scores.stress.score,
        risk = %risk_level,
        "scored responses"
    );

    let summary = format!(
        "Assessment: {}, {}. Risk: {}.",
        scores.depression.label, scores.anxiety.label, risk_level
    );

    RiskAssessment {
        risk_level,
        scores,
        critical_flags,
        patterns,
        summary,
    }
}

fn scale_score(responses: &ResponseSet, scale: &ScaleConfig) -> ScaleScore {
    let prefix = scale.scale.prefix();
    let sum = responses
        .iter()
        .filter(|(key, _)| key.starts_with(prefix))
        .map(|(_, value)| coerce_option(value))
        .fold(0i32, i32::saturating_add);

    ScaleScore {
        scale: scale.scale,
        score: sum,
        label: scale.severity_label(sum).to_string(),
    }
}

fn risk_level(scores: &ScaleScores, flagged: bool, config: &ScoringConfig) -> RiskLevel {
    let policy = &config.risk;
    let depression = scores.depression.score;
    let anxiety = scores.anxiety.score;
    let stress = scores.stress.score;

    if flagged || depression >= policy.high_depression || anxiety >= policy.high_anxiety {
        RiskLevel::High
    } else if depression >= policy.medium_depression
        || anxiety >= policy.medium_anxiety
        || stress >= policy.medium_stress
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
