use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::element_text;

static ADDRESS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("address").unwrap());
static ARIA_LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[aria-label]").unwrap());

// Trailing "City, ST ZIP[-ZIP4]". The city is the last run of capitalized
// words before the comma, so street tokens like "Ste D" stay out of it while
// multi-word cities ("San Antonio") stay whole.
static CITY_STATE_ZIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z]+(?:\s[A-Z][A-Za-z]+)*),\s*([A-Z]{2})\s+(\d{5}(?:-\d{4})?)$")
        .unwrap()
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d{3}\)\s*\d{3}[-\s]?\d{4}").unwrap());

#[derive(Debug, Default)]
pub struct AddressParts {
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
}

/// Address block from an explicit address tag, else any element whose
/// accessible label mentions "address". The full string is kept as-is and
/// the trailing city/state/zip split out when the pattern matches.
pub fn address(doc: &Html) -> AddressParts {
    let text = doc
        .select(&ADDRESS_SELECTOR)
        .next()
        .map(element_text)
        .filter(|t| !t.is_empty())
        .or_else(|| {
            doc.select(&ARIA_LABEL_SELECTOR)
                .find(|el| {
                    el.value()
                        .attr("aria-label")
                        .is_some_and(|label| label.to_lowercase().contains("address"))
                })
                .map(element_text)
        });

    let Some(full) = text.filter(|t| !t.is_empty()) else {
        return AddressParts::default();
    };

    let (mut city, mut state, mut zipcode) = (None, None, None);
    if let Some(caps) = CITY_STATE_ZIP_RE.captures(&full) {
        city = Some(caps[1].trim().to_string());
        state = Some(caps[2].to_string());
        zipcode = Some(caps[3].to_string());
    }

    AddressParts {
        full_address: Some(full),
        city,
        state,
        zipcode,
    }
}

/// First US-style phone number anywhere in the page text.
pub fn phone_number(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}
