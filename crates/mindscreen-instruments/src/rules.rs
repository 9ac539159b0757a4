//! Safety flags and cross-scale patterns. Each rule is a plain named
//! function; the tables below fix the order their messages appear in.

use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::response::{ResponseSet, coerce_option};
use crate::scoring::ScaleScores;

pub const SELF_HARM_FLAG: &str = "User reported thoughts of self-harm (PHQ-9 Q9 > 0)";
pub const COMORBID_PATTERN: &str = "Comorbid Depression and Anxiety pattern detected.";

pub type CriticalFlagRule = fn(&ResponseSet, &ScoringConfig) -> Option<&'static str>;
pub type PatternRule = fn(&ScaleScores, &ScoringConfig) -> Option<&'static str>;

pub const CRITICAL_FLAG_RULES: &[(&str, CriticalFlagRule)] =
    &[("self_harm_ideation", self_harm_ideation)];

pub const PATTERN_RULES: &[(&str, PatternRule)] =
    &[("comorbid_depression_anxiety", comorbid_depression_anxiety)];

/// Any non-zero answer to the self-harm item.
pub fn self_harm_ideation(responses: &ResponseSet, config: &ScoringConfig) -> Option<&'static str> {
    let answer = responses.get(&config.self_harm_item).map(coerce_option)?;
    (answer > 0).then_some(SELF_HARM_FLAG)
}

pub fn comorbid_depression_anxiety(
    scores: &ScaleScores,
    config: &ScoringConfig,
) -> Option<&'static str> {
    let policy = &config.comorbidity;
    (scores.depression.score > policy.depression_above
        && scores.anxiety.score > policy.anxiety_above)
        .then_some(COMORBID_PATTERN)
}

pub fn critical_flags(responses: &ResponseSet, config: &ScoringConfig) -> Vec<String> {
    CRITICAL_FLAG_RULES
        .iter()
        .filter_map(|(name, rule)| {
            let flag = rule(responses, config)?;
            warn!(rule = %name, "critical flag raised");
            Some(flag.to_string())
        })
        .collect()
}

pub fn patterns(scores: &ScaleScores, config: &ScoringConfig) -> Vec<String> {
    PATTERN_RULES
        .iter()
        .filter_map(|(name, rule)| {
            let pattern = rule(scores, config)?;
            debug!(rule = %name, "pattern detected");
            Some(pattern.to_string())
        })
        .collect()
}

/// Names of every rule that fires for these responses, flags first.
pub fn fired_rules(
    responses: &ResponseSet,
    scores: &ScaleScores,
    config: &ScoringConfig,
) -> Vec<&'static str> {
    let flags = CRITICAL_FLAG_RULES
        .iter()
        .filter(|(_, rule)| rule(responses, config).is_some())
        .map(|(name, _)| *name);
    let patterns = PATTERN_RULES
        .iter()
        .filter(|(_, rule)| rule(scores, config).is_some())
        .map(|(name, _)| *name);
    flags.chain(patterns).collect()
}
