use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element_text;

static LIST_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// Any of these words marks a list item as a pickup/delivery amenity line.
const PICKUP_KEYWORDS: &[&str] = &["delivery", "takeout", "take-out", "curbside"];

/// Keyword-matched service flags from amenity list items. The
/// delivery/takeout pair records both states whenever a pickup-style line is
/// seen; the remaining flags are only ever set true.
pub fn extract(doc: &Html) -> BTreeMap<String, bool> {
    let mut services = BTreeMap::new();

    for li in doc.select(&LIST_ITEM_SELECTOR) {
        let text = element_text(li);
        if text.is_empty() {
            continue;
        }
        let lowered = text.to_lowercase();

        if PICKUP_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            services.insert("Offers Delivery".to_string(), lowered.contains("delivery"));
            services.insert(
                "Offers Takeout".to_string(),
                lowered.contains("takeout") || lowered.contains("take-out"),
            );
        }
        if lowered.contains("vegan") {
            services.insert("Vegan Options".to_string(), true);
        }
        if lowered.contains("women-owned") || lowered.contains("women owned") {
            services.insert("Women-owned".to_string(), true);
        }
        if lowered.contains("wheelchair") {
            services.insert("Wheelchair Accessible".to_string(), true);
        }
    }

    services
}
