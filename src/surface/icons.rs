use serde::{Deserialize, Serialize};

/// Icon family shown next to a tipping category in the etiquette grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TippingIcon {
    Dining,
    Transport,
    Lodging,
    Guide,
    Default,
}

impl TippingIcon {
    /// Pick an icon by case-insensitive substring match on the category.
    pub fn for_category(category: &str) -> TippingIcon {
        let lower = category.to_lowercase();
        if contains_any(&lower, &["restaurant", "food", "dining"]) {
            TippingIcon::Dining
        } else if contains_any(&lower, &["taxi", "transport", "driver"]) {
            TippingIcon::Transport
        } else if contains_any(&lower, &["hotel", "housekeeping", "porter"]) {
            TippingIcon::Lodging
        } else if contains_any(&lower, &["guide", "tour"]) {
            TippingIcon::Guide
        } else {
            TippingIcon::Default
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
