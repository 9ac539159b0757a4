//! Turning an incoming questionnaire submission into a stored result and
//! a realtime event.

use mindscreen_core::models::survey::{
    Demographic, NewSurveyEvent, SurveyResult, null_as_default,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::engine::score_with;
use crate::error::InstrumentError;
use crate::response::ResponseSet;
use crate::rules::fired_rules;
use crate::scoring::RiskAssessment;
use crate::validate_all;

/// Body of a questionnaire submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub responses: ResponseSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demographic: Demographic,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// How to treat incomplete or malformed answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntakePolicy {
    /// Score whatever arrived; bad values count as 0.
    #[default]
    Lenient,
    /// Reject submissions that fail instrument validation.
    Strict,
}

#[derive(Debug, Clone, Serialize)]
pub struct Intake {
    pub assessment: RiskAssessment,
    pub result: SurveyResult,
    pub event: NewSurveyEvent,
}

pub fn assess(
    submission: SurveySubmission,
    config: &ScoringConfig,
    policy: IntakePolicy,
) -> Result<Intake, InstrumentError> {
    let problems = validate_all(&submission.responses);
    if !problems.is_empty() {
        match policy {
            IntakePolicy::Strict => return Err(InstrumentError::Incomplete(problems)),
            IntakePolicy::Lenient => {
                warn!(problems = problems.len(), "scoring incomplete submission")
            }
        }
    }

    let assessment = score_with(&submission.responses, config);
    let rules = fired_rules(&submission.responses, &assessment.scores, config);
    let result = SurveyResult {
        id: Uuid::new_v4(),
        user_id: submission.user_id,
        demographic: submission.demographic,
        responses: submission.responses.to_json_map(),
        risk_level: assessment.risk_level,
        notes: assessment.summary.clone(),
        created_at: jiff::Timestamp::now(),
    };
    let event = result.event();

    info!(
        result_id = %result.id,
        risk = %result.risk_level,
        rules = ?rules,
        "survey assessed"
    );

    Ok(Intake {
        assessment,
        result,
        event,
    })
}
