use crate::scoring::{Item, ScaleId};
use crate::Instrument;

/// PSS: Perceived Stress Scale, short form.
///
/// The published scale rates items 0–4 and documents a maximum of 40; the
/// form offers four options (0–3) over four items, so observed totals stay
/// within 0–12. Items 2 and 3 are positively worded but are summed as
/// answered, without reverse scoring.
pub struct Pss;

impl Instrument for Pss {
    fn id(&self) -> &str {
        "pss"
    }

    fn name(&self) -> &str {
        "PSS"
    }

    fn scale(&self) -> ScaleId {
        ScaleId::Pss
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            super::items(
                "pss",
                &[
                    "Felt unable to control important things in your life",
                    "Felt confident about handling personal problems",
                    "Felt that things were going your way",
                    "Felt difficulties were piling up so high you could not overcome them",
                ],
            )
        });
        &ITEMS
    }

    fn max_score(&self) -> u32 {
        40
    }
}
