use crate::scoring::{Item, ScaleId};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale. 7 items rated 0–3, total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn scale(&self) -> ScaleId {
        ScaleId::Gad7
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            super::items(
                "gad",
                &[
                    "Feeling nervous, anxious, or on edge",
                    "Not being able to stop or control worrying",
                    "Worrying too much about different things",
                    "Trouble relaxing",
                    "Being so restless that it is hard to sit still",
                    "Becoming easily annoyed or irritable",
                    "Feeling afraid, as if something awful might happen",
                ],
            )
        });
        &ITEMS
    }

    fn max_score(&self) -> u32 {
        21
    }
}
