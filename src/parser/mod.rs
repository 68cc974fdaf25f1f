pub mod cleaner;
pub mod extract;
pub mod mapper;
pub mod not_found;
pub mod record;
pub mod text;

use record::{BusinessRecord, RawBusiness};

/// Four-stage pipeline: not-found classification → extraction → schema
/// mapping → cleaning. Extraction is skipped for missing, empty, or
/// not-found bodies; mapping and cleaning always run, so the record shape
/// never varies.
pub fn process_page(
    body: Option<&str>,
    status_code: u16,
    url: &str,
    timestamp: &str,
) -> BusinessRecord {
    let is_page_not_found = not_found::detect(body, status_code);

    let raw = match body {
        Some(html) if !is_page_not_found && !html.is_empty() => extract::extract_all(html),
        _ => RawBusiness::default(),
    };

    let mapped = mapper::map_raw(raw, url, timestamp, is_page_not_found);
    cleaner::clean_record(mapped)
}

// ── Tests ──
