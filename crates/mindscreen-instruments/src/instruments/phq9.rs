use crate::scoring::{Item, ScaleId};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, 9-item depression screen.
/// Items rated 0–3 over the last two weeks. Total 0–27. Item 9 asks about
/// self-harm and is checked on its own.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn scale(&self) -> ScaleId {
        ScaleId::Phq9
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            super::items(
                "phq",
                &[
                    "Little interest or pleasure in doing things",
                    "Feeling down, depressed, or hopeless",
                    "Trouble falling or staying asleep, or sleeping too much",
                    "Feeling tired or having little energy",
                    "Poor appetite or overeating",
                    "Feeling bad about yourself or that you are a failure",
                    "Trouble concentrating on things",
                    "Moving or speaking slowly, or being fidgety/restless",
                    "Thoughts that you would be better off dead",
                ],
            )
        });
        &ITEMS
    }

    fn max_score(&self) -> u32 {
        27
    }
}
