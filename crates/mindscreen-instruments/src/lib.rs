//! mindscreen-instruments
//!
//! Screening questionnaire definitions (PHQ-9, GAD-7, PSS) and the scoring
//! engine that turns a set of answers into a risk assessment. Pure
//! computation, no I/O.

pub mod config;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod intake;
pub mod response;
pub mod rules;
pub mod scoring;

pub use engine::{score, score_with};

use error::InstrumentError;
use response::{ResponseSet, strict_option};
use scoring::{Item, OptionRange, ScaleId, ValidationError, ValidationProblem};

/// Caption of each selectable option, indexed by option value.
pub const RESPONSE_OPTIONS: [&str; 4] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier, also the prefix of its item ids (e.g. "phq").
    fn id(&self) -> &str;

    /// Human-readable name (e.g. "PHQ-9").
    fn name(&self) -> &str;

    /// The sub-scale this questionnaire contributes to.
    fn scale(&self) -> ScaleId;

    /// Items in presentation order.
    fn items(&self) -> &[Item];

    /// Valid option values for every item.
    fn option_range(&self) -> OptionRange {
        OptionRange { min: 0, max: 3 }
    }

    /// Nominal maximum of the published instrument. Not enforced: the
    /// four-option form caps PSS at 12, below its documented 40.
    fn max_score(&self) -> u32;

    /// Check that every item is answered with an in-range whole number and
    /// that no unknown item carries this instrument's prefix.
    fn validate_responses(&self, responses: &ResponseSet) -> Vec<ValidationError> {
        let range = self.option_range();
        let mut errors = Vec::new();

        for item in self.items() {
            let problem = match responses.get(&item.id) {
                None => Some(ValidationProblem::Missing),
                Some(value) => match strict_option(value) {
                    None => Some(ValidationProblem::NotAnInteger),
                    Some(v) if !range.contains(v) => Some(ValidationProblem::OutOfRange),
                    Some(_) => None,
                },
            };
            if let Some(problem) = problem {
                errors.push(ValidationError::new(self.name(), &item.id, problem, range));
            }
        }

        let prefix = self.scale().prefix();
        for key in responses.keys() {
            if key.starts_with(prefix) && !self.items().iter().any(|i| i.id == key) {
                errors.push(ValidationError::new(
                    self.name(),
                    key,
                    ValidationProblem::UnknownItem,
                    range,
                ));
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::pss::Pss),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing for ids not in the catalogue.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Run every instrument's validation over one response set.
pub fn validate_all(responses: &ResponseSet) -> Vec<ValidationError> {
    all_instruments()
        .iter()
        .flat_map(|i| i.validate_responses(responses))
        .collect()
}
