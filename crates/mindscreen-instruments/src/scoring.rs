use std::fmt;

use mindscreen_core::models::risk::RiskLevel;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Label used when a sum is below every severity band.
pub const BASELINE_LABEL: &str = "Normal/Low";

/// The three sub-scales the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScaleId {
    #[serde(rename = "PHQ9")]
    Phq9,
    #[serde(rename = "GAD7")]
    Gad7,
    #[serde(rename = "PSS")]
    Pss,
}

impl ScaleId {
    /// Item-id prefix, including the trailing underscore.
    pub fn prefix(&self) -> &'static str {
        match self {
            ScaleId::Phq9 => "phq_",
            ScaleId::Gad7 => "gad_",
            ScaleId::Pss => "pss_",
        }
    }
}

impl fmt::Display for ScaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScaleId::Phq9 => "PHQ9",
            ScaleId::Gad7 => "GAD7",
            ScaleId::Pss => "PSS",
        })
    }
}

/// One question of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub text: String,
}

/// Inclusive range of selectable option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionRange {
    pub min: i32,
    pub max: i32,
}

impl OptionRange {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Raw sum and severity label for one sub-scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScore {
    pub scale: ScaleId,
    pub score: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleScores {
    pub depression: ScaleScore,
    pub anxiety: ScaleScore,
    pub stress: ScaleScore,
}

/// Outcome of scoring one response set. Built fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub scores: ScaleScores,
    pub critical_flags: Vec<String>,
    pub patterns: Vec<String>,
    pub summary: String,
}

/// What is wrong with a single item in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationProblem {
    Missing,
    NotAnInteger,
    OutOfRange,
    UnknownItem,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_id: String,
    pub problem: ValidationProblem,
    pub expected_range: OptionRange,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        instrument: &str,
        item_id: &str,
        problem: ValidationProblem,
        expected_range: OptionRange,
    ) -> Self {
        let message = match problem {
            ValidationProblem::Missing => format!("{instrument}: {item_id} is unanswered"),
            ValidationProblem::NotAnInteger => {
                format!("{instrument}: {item_id} is not a whole number")
            }
            ValidationProblem::OutOfRange => format!(
                "{instrument}: {item_id} is outside range [{}, {}]",
                expected_range.min, expected_range.max,
            ),
            ValidationProblem::UnknownItem => {
                format!("{instrument}: {item_id} is not an item of this instrument")
            }
        };
        Self {
            item_id: item_id.to_string(),
            problem,
            expected_range,
            message,
        }
    }
}
