pub mod content;
pub mod header;
pub mod hours;
pub mod links;
pub mod location;
pub mod services;

use scraper::{ElementRef, Html};

use crate::parser::record::RawBusiness;

/// Parse the markup once and run the full battery of extraction rules.
/// Every rule tolerates missing structure and comes back with its empty or
/// absent default; no rule depends on another's result.
pub fn extract_all(html: &str) -> RawBusiness {
    let doc = Html::parse_document(html);
    let text = visible_text(&doc);

    let address = location::address(&doc);

    RawBusiness {
        title: header::title(&doc).into(),
        rating: header::rating(&doc).into(),
        review_count: header::review_count(&text).into(),
        is_claimed: header::claimed_status(&text).into(),
        price_level: header::price_level(&text).into(),
        categories: links::categories(&doc).into(),
        full_address: address.full_address.into(),
        city: address.city.into(),
        state: address.state.into(),
        zipcode: address.zipcode.into(),
        phone_number: location::phone_number(&text).into(),
        images: links::images(&doc).into(),
        website: links::website(&doc).into(),
        hours: hours::extract(&doc).into(),
        business_owner_name: content::owner_name(&text).into(),
        about: content::about(&doc).into(),
        review_highlights: content::review_highlights(&doc).into(),
        business_services: services::extract(&doc).into(),
    }
}

/// All text in the document, segments trimmed and joined with single spaces.
pub(crate) fn visible_text(doc: &Html) -> String {
    join_text(doc.root_element().text())
}

/// Text of one element and its descendants, trimmed and space-joined.
pub(crate) fn element_text(el: ElementRef) -> String {
    join_text(el.text())
}

fn join_text<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    segments
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──
