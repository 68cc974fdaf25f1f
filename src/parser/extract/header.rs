use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::element_text;

static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static ARIA_LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[aria-label]").unwrap());
static RATING_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[itemprop="ratingValue"]"#).unwrap());

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.]+").unwrap());
static REVIEW_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9,]+)\s+reviews?").unwrap());
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\${1,4}").unwrap());

/// Page titles carry a trailing site suffix, e.g. "Kirby Grill - Houston, TX - Yelp".
const TITLE_SITE_SUFFIX: &str = "- Yelp";

/// First non-empty h1, else the document title with the site suffix stripped.
pub fn title(doc: &Html) -> Option<String> {
    for h1 in doc.select(&H1_SELECTOR) {
        let text = element_text(h1);
        if !text.is_empty() {
            return Some(text);
        }
    }

    let full = element_text(doc.select(&TITLE_SELECTOR).next()?);
    let stripped = full.split(TITLE_SITE_SUFFIX).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Leading decimal from the first "star rating" accessible label, falling
/// back to the machine-readable rating meta field.
pub fn rating(doc: &Html) -> Option<String> {
    let label = doc
        .select(&ARIA_LABEL_SELECTOR)
        .filter_map(|el| el.value().attr("aria-label"))
        .find(|label| label.to_lowercase().contains("star rating"));
    if let Some(label) = label {
        if let Some(m) = DECIMAL_RE.find(label) {
            return Some(m.as_str().to_string());
        }
    }

    doc.select(&RATING_META_SELECTOR)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
}

/// "<number> review(s)" anywhere in the page text, kept in "<number> reviews"
/// form. Thousands separators are normalized away later by the cleaner.
pub fn review_count(text: &str) -> Option<String> {
    REVIEW_COUNT_RE
        .captures(text)
        .map(|caps| format!("{} reviews", &caps[1]))
}

/// Claimed status from page-wide substring presence. "unclaimed" is checked
/// first so its "claimed" substring can never win on its own.
pub fn claimed_status(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    if lowered.contains("unclaimed") {
        Some("Unclaimed".to_string())
    } else if lowered.contains("claimed") {
        Some("Claimed".to_string())
    } else {
        None
    }
}

/// First run of one to four dollar signs in the page text.
pub fn price_level(text: &str) -> Option<String> {
    PRICE_RE.find(text).map(|m| m.as_str().to_string())
}
