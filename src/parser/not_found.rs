/// Page-text phrases that mean the business page does not exist.
const NOT_FOUND_SIGNALS: &[&str] = &[
    "page not found",
    "we looked everywhere",
    "404 error",
    "sorry, we couldn't find",
];

/// Decide whether the response points at a missing page. A 404 status or a
/// missing body is conclusive; otherwise the body is checked for known
/// not-found phrases. Heuristic signal only, never an error.
pub fn detect(body: Option<&str>, status_code: u16) -> bool {
    if status_code == 404 {
        return true;
    }
    let Some(body) = body else {
        return true;
    };

    let lowered = body.to_lowercase();
    NOT_FOUND_SIGNALS.iter().any(|sig| lowered.contains(sig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_wins_regardless_of_body() {
        assert!(detect(Some("<html>perfectly fine page</html>"), 404));
        assert!(detect(None, 404));
    }

    #[test]
    fn missing_body_is_not_found() {
        assert!(detect(None, 200));
        assert!(detect(None, 0));
    }

    #[test]
    fn phrase_signals() {
        assert!(detect(Some("<h1>Page Not Found</h1>"), 200));
        assert!(detect(Some("We looked everywhere, no luck."), 200));
        assert!(detect(Some("this is a 404 ERROR page"), 200));
        assert!(detect(Some("Sorry, we couldn't find that business."), 200));
    }

    #[test]
    fn ordinary_page_passes() {
        assert!(!detect(Some("<h1>Kirby Grill</h1>"), 200));
        assert!(!detect(Some(""), 200));
    }
}
