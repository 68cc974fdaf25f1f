use std::collections::BTreeMap;

use super::record::{BusinessRecord, RawBusiness, RawValue};

/// Coerce the raw attribute values into the canonical record shape. Pure
/// defaulting and type coercion; nothing here interprets markup and nothing
/// here can fail.
pub fn map_raw(
    raw: RawBusiness,
    url: &str,
    timestamp: &str,
    is_page_not_found: bool,
) -> BusinessRecord {
    BusinessRecord {
        title: as_scalar(raw.title),
        rating: as_scalar(raw.rating),
        review_count: as_scalar(raw.review_count),
        is_claimed: as_scalar(raw.is_claimed),
        price_level: as_scalar(raw.price_level),
        categories: join_categories(raw.categories),
        full_address: as_scalar(raw.full_address),
        city: as_scalar(raw.city),
        state: as_scalar(raw.state),
        zipcode: as_scalar(raw.zipcode),
        phone_number: as_scalar(raw.phone_number),
        images: as_list(raw.images),
        website: as_scalar(raw.website),
        hours: as_text_map(raw.hours),
        business_owner_name: as_scalar(raw.business_owner_name),
        about: as_scalar(raw.about),
        review_highlights: as_list(raw.review_highlights),
        business_services: as_flag_map(raw.business_services),
        timestamp: timestamp.to_string(),
        url: url.to_string(),
        is_page_not_found,
        error: None,
    }
}

fn as_scalar(value: RawValue) -> Option<String> {
    match value {
        RawValue::Text(s) => Some(s),
        RawValue::Absent | RawValue::List(_) | RawValue::TextMap(_) | RawValue::FlagMap(_) => None,
    }
}

/// A list joins its non-empty trimmed entries with commas; a lone string is
/// trimmed; anything else is unknown.
fn join_categories(value: RawValue) -> Option<String> {
    match value {
        RawValue::List(items) => Some(
            items
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .collect::<Vec<_>>()
                .join(","),
        ),
        RawValue::Text(s) => Some(s.trim().to_string()),
        RawValue::Absent | RawValue::TextMap(_) | RawValue::FlagMap(_) => None,
    }
}

fn as_list(value: RawValue) -> Vec<String> {
    match value {
        RawValue::Absent => Vec::new(),
        RawValue::Text(s) => vec![s],
        RawValue::List(items) => items,
        RawValue::TextMap(_) | RawValue::FlagMap(_) => Vec::new(),
    }
}

fn as_text_map(value: RawValue) -> BTreeMap<String, String> {
    match value {
        RawValue::TextMap(map) => map,
        RawValue::Absent | RawValue::Text(_) | RawValue::List(_) | RawValue::FlagMap(_) => {
            BTreeMap::new()
        }
    }
}

fn as_flag_map(value: RawValue) -> BTreeMap<String, bool> {
    match value {
        RawValue::FlagMap(map) => map,
        RawValue::Absent | RawValue::Text(_) | RawValue::List(_) | RawValue::TextMap(_) => {
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &[
        "title",
        "rating",
        "reviewCount",
        "isClaimed",
        "priceLevel",
        "categories",
        "fullAddress",
        "city",
        "state",
        "zipcode",
        "phoneNumber",
        "images",
        "website",
        "hours",
        "businessOwnerName",
        "about",
        "reviewhighlights",
        "businessServices",
        "timestamp",
        "url",
        "is_page_not_found",
    ];

    #[test]
    fn output_has_exactly_the_fixed_field_set() {
        let record = map_raw(
            RawBusiness::default(),
            "https://www.yelp.com/biz/kirby-grill-houston",
            "2026-08-07 12:00:00",
            false,
        );
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), FIELDS.len());
        for field in FIELDS {
            assert!(obj.contains_key(*field), "missing field {field}");
        }
    }

    #[test]
    fn defaults_for_empty_raw() {
        let record = map_raw(RawBusiness::default(), "u", "t", true);
        assert!(record.title.is_none());
        assert!(record.categories.is_none());
        assert!(record.images.is_empty());
        assert!(record.review_highlights.is_empty());
        assert!(record.hours.is_empty());
        assert!(record.business_services.is_empty());
        assert!(record.is_page_not_found);
        assert_eq!(record.url, "u");
        assert_eq!(record.timestamp, "t");
        assert!(record.error.is_none());
    }

    #[test]
    fn categories_list_joined_with_commas() {
        let raw = RawBusiness {
            categories: RawValue::List(vec![
                " Seafood ".to_string(),
                String::new(),
                "Bars".to_string(),
            ]),
            ..Default::default()
        };
        let record = map_raw(raw, "u", "t", false);
        assert_eq!(record.categories.as_deref(), Some("Seafood,Bars"));
    }

    #[test]
    fn categories_scalar_trimmed() {
        let raw = RawBusiness {
            categories: RawValue::Text("  Seafood  ".to_string()),
            ..Default::default()
        };
        let record = map_raw(raw, "u", "t", false);
        assert_eq!(record.categories.as_deref(), Some("Seafood"));
    }

    #[test]
    fn scalar_raw_becomes_singleton_sequence() {
        let raw = RawBusiness {
            images: RawValue::Text("https://x/photo.jpg".to_string()),
            ..Default::default()
        };
        let record = map_raw(raw, "u", "t", false);
        assert_eq!(record.images, vec!["https://x/photo.jpg".to_string()]);
    }

    #[test]
    fn non_map_raw_becomes_empty_map() {
        let raw = RawBusiness {
            hours: RawValue::Text("always open".to_string()),
            business_services: RawValue::List(vec!["delivery".to_string()]),
            ..Default::default()
        };
        let record = map_raw(raw, "u", "t", false);
        assert!(record.hours.is_empty());
        assert!(record.business_services.is_empty());
    }
}
