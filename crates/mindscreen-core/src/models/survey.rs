use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;
use uuid::Uuid;

use super::risk::RiskLevel;
use crate::error::CoreError;

/// Optional self-reported demographics attached to a submission.
///
/// Read leniently: an age that is not a whole non-negative number (or a
/// string holding one) becomes `None`, as does a non-string gender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographic {
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gender: Option<String>,
}

/// Treat an explicit `null` like an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let age = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|a| u32::try_from(a).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(age)
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// One scored questionnaire submission, as handed to the storage layer.
///
/// `responses` is kept exactly as submitted so a record can be re-scored
/// later under a different configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SurveyResult {
    pub id: Uuid,
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub demographic: Demographic,
    #[ts(type = "Record<string, unknown>")]
    pub responses: serde_json::Map<String, serde_json::Value>,
    pub risk_level: RiskLevel,
    pub notes: String,
    pub created_at: jiff::Timestamp,
}

impl SurveyResult {
    /// Parse an exported array of stored results.
    pub fn parse_many(json: &str) -> Result<Vec<SurveyResult>, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The payload pushed to the realtime feed for this result.
    pub fn event(&self) -> NewSurveyEvent {
        NewSurveyEvent {
            risk_level: self.risk_level,
            timestamp: self.created_at,
        }
    }
}

/// Broadcast after every submission. Carries no responses or identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewSurveyEvent {
    pub risk_level: RiskLevel,
    pub timestamp: jiff::Timestamp,
}
