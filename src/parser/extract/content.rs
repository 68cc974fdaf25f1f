use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::element_text;

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3").unwrap());
static QUOTE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("q, blockquote, p").unwrap());

static OWNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Business owner:\s*([A-Z][\w\s.\-]+)").unwrap());

const MAX_HIGHLIGHTS: usize = 5;
const MIN_HIGHLIGHT_LEN: usize = 40;

/// Name-like token run following a "Business owner:" marker.
pub fn owner_name(text: &str) -> Option<String> {
    OWNER_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Text of the paragraph run right after an "about the business" heading.
/// Collection stops at the first sibling that is not a paragraph or div.
pub fn about(doc: &Html) -> Option<String> {
    for heading in doc.select(&HEADING_SELECTOR) {
        if !element_text(heading)
            .to_lowercase()
            .contains("about the business")
        {
            continue;
        }

        let mut parts = Vec::new();
        let mut sibling = next_element(heading);
        while let Some(el) = sibling {
            let name = el.value().name();
            if name != "p" && name != "div" {
                break;
            }
            let text = element_text(el);
            if !text.is_empty() {
                parts.push(text);
            }
            sibling = next_element(el);
        }
        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }
    None
}

/// Quote-like texts long enough to read as review excerpts, wrapped in curly
/// quotation marks, capped at `MAX_HIGHLIGHTS`. "review of" texts are
/// navigation prompts, not excerpts.
pub fn review_highlights(doc: &Html) -> Vec<String> {
    let mut highlights = Vec::new();

    for el in doc.select(&QUOTE_SELECTOR) {
        let text = element_text(el);
        if text.chars().count() < MIN_HIGHLIGHT_LEN {
            continue;
        }
        if text.to_lowercase().contains("review of") {
            continue;
        }
        highlights.push(format!("\u{201c}{text}\u{201d}"));
        if highlights.len() >= MAX_HIGHLIGHTS {
            break;
        }
    }

    highlights
}

fn next_element(el: ElementRef) -> Option<ElementRef> {
    el.next_siblings().find_map(ElementRef::wrap)
}
