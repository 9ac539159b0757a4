//! Immutable scoring configuration: severity bands per scale, risk-tier
//! cut-offs and the items the safety rules look at.
//!
//! [`ScoringConfig::standard`] carries the published cut-offs. An override
//! can be loaded from JSON; it is validated once at load time and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::InstrumentError;
use crate::scoring::{BASELINE_LABEL, ScaleId};

/// Inclusive lower bound of a severity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBand {
    pub min: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub scale: ScaleId,
    /// Documented maximum. Reported, not enforced.
    pub max: u32,
    /// Strictly ascending by `min`.
    pub bands: Vec<SeverityBand>,
}

impl ScaleConfig {
    fn new(scale: ScaleId, max: u32, bands: &[(i32, &str)]) -> Self {
        Self {
            scale,
            max,
            bands: bands
                .iter()
                .map(|(min, label)| SeverityBand {
                    min: *min,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// Label of the highest band not exceeding `sum`.
    pub fn severity_label(&self, sum: i32) -> &str {
        let reached = self.bands.partition_point(|b| b.min <= sum);
        match reached {
            0 => BASELINE_LABEL,
            n => self.bands[n - 1].label.as_str(),
        }
    }

    fn validate(&self) -> Result<(), InstrumentError> {
        if let Some(band) = self.bands.iter().find(|b| b.label.trim().is_empty()) {
            return Err(InstrumentError::InvalidConfig(format!(
                "{}: band at {} has an empty label",
                self.scale, band.min
            )));
        }
        if let Some(pair) = self.bands.windows(2).find(|w| w[0].min >= w[1].min) {
            return Err(InstrumentError::InvalidConfig(format!(
                "{}: bands must be strictly ascending, found {} then {}",
                self.scale, pair[0].min, pair[1].min
            )));
        }
        Ok(())
    }
}

/// Cut-offs for the overall tier. All comparisons are `>=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub high_depression: i32,
    pub high_anxiety: i32,
    pub medium_depression: i32,
    pub medium_anxiety: i32,
    pub medium_stress: i32,
}

/// Cut-offs for the comorbidity pattern. Both comparisons are strict `>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComorbidityPolicy {
    pub depression_above: i32,
    pub anxiety_above: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub depression: ScaleConfig,
    pub anxiety: ScaleConfig,
    pub stress: ScaleConfig,
    pub risk: RiskPolicy,
    pub comorbidity: ComorbidityPolicy,
    /// Item whose positive answer raises a self-harm flag.
    pub self_harm_item: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            depression: ScaleConfig::new(
                ScaleId::Phq9,
                27,
                &[
                    (5, "Mild Depression"),
                    (10, "Moderate Depression"),
                    (15, "Moderately Severe Depression"),
                    (20, "Severe Depression"),
                ],
            ),
            anxiety: ScaleConfig::new(
                ScaleId::Gad7,
                21,
                &[
                    (5, "Mild Anxiety"),
                    (10, "Moderate Anxiety"),
                    (15, "Severe Anxiety"),
                ],
            ),
            stress: ScaleConfig::new(
                ScaleId::Pss,
                40,
                &[(14, "Moderate Stress"), (27, "High Perceived Stress")],
            ),
            risk: RiskPolicy {
                high_depression: 20,
                high_anxiety: 15,
                medium_depression: 10,
                medium_anxiety: 10,
                medium_stress: 14,
            },
            comorbidity: ComorbidityPolicy {
                depression_above: 15,
                anxiety_above: 10,
            },
            self_harm_item: "phq_9".to_string(),
        }
    }

    /// Parse and validate a JSON override.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (expected, scale) in [
            (ScaleId::Phq9, &self.depression),
            (ScaleId::Gad7, &self.anxiety),
            (ScaleId::Pss, &self.stress),
        ] {
            if scale.scale != expected {
                return Err(InstrumentError::InvalidConfig(format!(
                    "expected {expected} tables, found {}",
                    scale.scale
                )));
            }
            scale.validate()?;
        }
        if self.self_harm_item.trim().is_empty() {
            return Err(InstrumentError::InvalidConfig(
                "self_harm_item must name an item".to_string(),
            ));
        }
        Ok(())
    }

    /// Scale tables in report order.
    pub fn scales(&self) -> [&ScaleConfig; 3] {
        [&self.depression, &self.anxiety, &self.stress]
    }
}
