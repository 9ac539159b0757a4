pub mod gad7;
pub mod phq9;
pub mod pss;

use crate::scoring::Item;

fn items(prefix: &str, texts: &[&str]) -> Vec<Item> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Item {
            id: format!("{prefix}_{}", i + 1),
            text: text.to_string(),
        })
        .collect()
}
