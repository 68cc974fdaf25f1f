use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces, convert non-breaking spaces to
/// ordinary ones, and trim both ends.
pub fn clean_text(value: &str) -> String {
    let value = value.replace('\u{a0}', " ");
    WHITESPACE_RE.replace_all(&value, " ").trim().to_string()
}

/// Like `clean_text`, but an all-whitespace input becomes `None` instead of
/// an empty string.
pub fn clean_scalar(value: Option<String>) -> Option<String> {
    let cleaned = clean_text(&value?);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(clean_text("  Houston\u{a0} TX  "), "Houston TX");
    }

    #[test]
    fn collapses_inner_runs() {
        assert_eq!(clean_text("a\t\n  b   c"), "a b c");
    }

    #[test]
    fn idempotent() {
        let once = clean_text("  a \u{a0} b ");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn scalar_whitespace_becomes_none() {
        assert_eq!(clean_scalar(Some("  \u{a0}  ".to_string())), None);
        assert_eq!(clean_scalar(None), None);
        assert_eq!(clean_scalar(Some(" ok ".to_string())), Some("ok".to_string()));
    }
}
