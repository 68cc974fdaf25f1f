use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One extracted attribute before schema mapping. Extraction rules may come
/// back empty-handed, with a single string, a list, or a keyed table, and
/// the mapper has to coerce whichever shape it gets.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Absent,
    Text(String),
    List(Vec<String>),
    TextMap(BTreeMap<String, String>),
    FlagMap(BTreeMap<String, bool>),
}

impl From<Option<String>> for RawValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => RawValue::Text(s),
            None => RawValue::Absent,
        }
    }
}

impl From<Vec<String>> for RawValue {
    fn from(value: Vec<String>) -> Self {
        RawValue::List(value)
    }
}

impl From<BTreeMap<String, String>> for RawValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        RawValue::TextMap(value)
    }
}

impl From<BTreeMap<String, bool>> for RawValue {
    fn from(value: BTreeMap<String, bool>) -> Self {
        RawValue::FlagMap(value)
    }
}

/// Everything the extraction battery found on one page. Any field may be
/// `Absent`; no completeness invariant holds here.
#[derive(Debug, Clone, Default)]
pub struct RawBusiness {
    pub title: RawValue,
    pub rating: RawValue,
    pub review_count: RawValue,
    pub is_claimed: RawValue,
    pub price_level: RawValue,
    pub categories: RawValue,
    pub full_address: RawValue,
    pub city: RawValue,
    pub state: RawValue,
    pub zipcode: RawValue,
    pub phone_number: RawValue,
    pub images: RawValue,
    pub website: RawValue,
    pub hours: RawValue,
    pub business_owner_name: RawValue,
    pub about: RawValue,
    pub review_highlights: RawValue,
    pub business_services: RawValue,
}

/// Canonical output record. Every field is always present as a key when
/// serialized; `None` serializes to JSON null and marks an unknown value.
/// `error` is the one additive exception: it only appears on pipeline
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub title: Option<String>,
    pub rating: Option<String>,
    #[serde(rename = "reviewCount")]
    pub review_count: Option<String>,
    #[serde(rename = "isClaimed")]
    pub is_claimed: Option<String>,
    #[serde(rename = "priceLevel")]
    pub price_level: Option<String>,
    pub categories: Option<String>,
    #[serde(rename = "fullAddress")]
    pub full_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub images: Vec<String>,
    pub website: Option<String>,
    pub hours: BTreeMap<String, String>,
    #[serde(rename = "businessOwnerName")]
    pub business_owner_name: Option<String>,
    pub about: Option<String>,
    #[serde(rename = "reviewhighlights")]
    pub review_highlights: Vec<String>,
    #[serde(rename = "businessServices")]
    pub business_services: BTreeMap<String, bool>,
    pub timestamp: String,
    pub url: String,
    pub is_page_not_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BusinessRecord {
    /// Full-default record for a URL whose processing died unexpectedly.
    /// Same shape as a normal record, plus the `error` description.
    pub fn failure(url: &str, timestamp: &str, error: &str) -> Self {
        BusinessRecord {
            title: None,
            rating: None,
            review_count: None,
            is_claimed: None,
            price_level: None,
            categories: None,
            full_address: None,
            city: None,
            state: None,
            zipcode: None,
            phone_number: None,
            images: Vec::new(),
            website: None,
            hours: BTreeMap::new(),
            business_owner_name: None,
            about: None,
            review_highlights: Vec::new(),
            business_services: BTreeMap::new(),
            timestamp: timestamp.to_string(),
            url: url.to_string(),
            is_page_not_found: true,
            error: Some(error.to_string()),
        }
    }
}
