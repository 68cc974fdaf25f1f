use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::record::BusinessRecord;
use super::text::{clean_scalar, clean_text};

static REVIEW_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// Normalize every string-valued part of a record: scalar fields may become
/// absent when they clean down to nothing, sequence elements are cleaned in
/// place, and mapping values are cleaned one level deep (entries that clean
/// to nothing are dropped). `reviewCount` is additionally rewritten to
/// "<digits> reviews". Pure and idempotent.
pub fn clean_record(record: BusinessRecord) -> BusinessRecord {
    let review_count = normalize_review_count(clean_scalar(record.review_count));

    BusinessRecord {
        title: clean_scalar(record.title),
        rating: clean_scalar(record.rating),
        review_count,
        is_claimed: clean_scalar(record.is_claimed),
        price_level: clean_scalar(record.price_level),
        categories: clean_scalar(record.categories),
        full_address: clean_scalar(record.full_address),
        city: clean_scalar(record.city),
        state: clean_scalar(record.state),
        zipcode: clean_scalar(record.zipcode),
        phone_number: clean_scalar(record.phone_number),
        images: clean_list(record.images),
        website: clean_scalar(record.website),
        hours: clean_map(record.hours),
        business_owner_name: clean_scalar(record.business_owner_name),
        about: clean_scalar(record.about),
        review_highlights: clean_list(record.review_highlights),
        business_services: record.business_services,
        timestamp: clean_text(&record.timestamp),
        url: clean_text(&record.url),
        is_page_not_found: record.is_page_not_found,
        error: clean_scalar(record.error),
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items.iter().map(|s| clean_text(s)).collect()
}

fn clean_map(map: BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.into_iter()
        .filter_map(|(key, value)| {
            let cleaned = clean_text(&value);
            (!cleaned.is_empty()).then(|| (key, cleaned))
        })
        .collect()
}

/// Rewrite any phrasing that contains a digit run as "<digits> reviews",
/// thousands separators stripped. Values without digits pass through.
fn normalize_review_count(value: Option<String>) -> Option<String> {
    let value = value?;
    match REVIEW_DIGITS_RE.find(&value) {
        Some(m) => Some(format!("{} reviews", m.as_str().replace(',', ""))),
        None => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::mapper::map_raw;
    use crate::parser::record::{RawBusiness, RawValue};

    fn messy_record() -> BusinessRecord {
        let raw = RawBusiness {
            title: RawValue::Text("  Kirby\u{a0} Grill  ".to_string()),
            review_count: RawValue::Text("1,234 Reviews!!".to_string()),
            about: RawValue::Text("   ".to_string()),
            images: RawValue::List(vec!["  https://x/photo.jpg \n".to_string()]),
            hours: RawValue::TextMap(
                [
                    ("Mon".to_string(), " 9:00 AM\u{a0}- 5:00 PM ".to_string()),
                    ("Tue".to_string(), "   ".to_string()),
                ]
                .into(),
            ),
            ..Default::default()
        };
        map_raw(raw, " https://www.yelp.com/biz/kirby-grill ", "2026-08-07 12:00:00", false)
    }

    #[test]
    fn cleans_scalars_sequences_and_map_values() {
        let cleaned = clean_record(messy_record());
        assert_eq!(cleaned.title.as_deref(), Some("Kirby Grill"));
        assert_eq!(cleaned.about, None);
        assert_eq!(cleaned.images, vec!["https://x/photo.jpg".to_string()]);
        assert_eq!(
            cleaned.hours.get("Mon").map(String::as_str),
            Some("9:00 AM - 5:00 PM")
        );
        assert!(!cleaned.hours.contains_key("Tue"));
        assert_eq!(cleaned.url, "https://www.yelp.com/biz/kirby-grill");
    }

    #[test]
    fn review_count_normalized_to_digit_run() {
        let cleaned = clean_record(messy_record());
        assert_eq!(cleaned.review_count.as_deref(), Some("1234 reviews"));
    }

    #[test]
    fn review_count_without_digits_passes_through() {
        let mut record = messy_record();
        record.review_count = Some("many reviews".to_string());
        let cleaned = clean_record(record);
        assert_eq!(cleaned.review_count.as_deref(), Some("many reviews"));
    }

    #[test]
    fn cleaning_is_idempotent() {
        let once = clean_record(messy_record());
        let twice = clean_record(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn failure_record_survives_cleaning() {
        let record = BusinessRecord::failure("u", "t", "  fetch  blew up ");
        let cleaned = clean_record(record);
        assert_eq!(cleaned.error.as_deref(), Some("fetch blew up"));
        assert!(cleaned.is_page_not_found);
    }
}
