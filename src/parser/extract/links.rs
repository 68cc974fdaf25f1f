use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element_text;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img[src]").unwrap());

/// Category links use a category path segment or a search filter parameter.
const CATEGORY_PATH_MARKER: &str = "/c/";
const CATEGORY_FILTER_MARKER: &str = "cflt=";

const MAX_IMAGES: usize = 10;

/// Link texts of category-style anchors, de-duplicated by text in
/// first-seen order.
pub fn categories(doc: &Html) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for a in doc.select(&ANCHOR_SELECTOR) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let label = element_text(a);
        if label.is_empty() {
            continue;
        }
        if (href.contains(CATEGORY_PATH_MARKER) || href.contains(CATEGORY_FILTER_MARKER))
            && !categories.contains(&label)
        {
            categories.push(label);
        }
    }

    categories
}

/// First anchor whose text mentions "website". The href is kept verbatim,
/// redirect paths included.
pub fn website(doc: &Html) -> Option<String> {
    for a in doc.select(&ANCHOR_SELECTOR) {
        let label = element_text(a).to_lowercase();
        if label.contains("website") {
            return a.value().attr("href").map(str::to_string);
        }
    }
    None
}

/// Photo URLs: image sources carrying both the site marker and a photo
/// marker, de-duplicated, capped at `MAX_IMAGES`.
pub fn images(doc: &Html) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();

    for img in doc.select(&IMG_SELECTOR) {
        let Some(src) = img.value().attr("src") else {
            continue;
        };
        if src.contains("yelp") && src.contains("photo") && !urls.iter().any(|u| u == src) {
            urls.push(src.to_string());
        }
        if urls.len() >= MAX_IMAGES {
            break;
        }
    }

    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_deduped_in_first_seen_order() {
        let doc = Html::parse_document(
            r#"
            <a href="/search?cflt=tradamerican">American (Traditional)</a>
            <a href="/c/houston/seafood">Seafood</a>
            <a href="/search?cflt=tradamerican">American (Traditional)</a>
            <a href="/biz/somewhere">Not a category</a>
            <a href="/c/houston/bars"></a>
            "#,
        );
        assert_eq!(
            categories(&doc),
            vec!["American (Traditional)".to_string(), "Seafood".to_string()]
        );
    }

    #[test]
    fn website_keeps_redirect_href() {
        let doc = Html::parse_document(
            r#"<a href="/biz_redir?url=http%3A%2F%2Fexample.com">Business website</a>"#,
        );
        assert_eq!(
            website(&doc),
            Some("/biz_redir?url=http%3A%2F%2Fexample.com".to_string())
        );
    }

    #[test]
    fn website_absent_without_matching_label() {
        let doc = Html::parse_document(r#"<a href="http://example.com">Homepage</a>"#);
        assert_eq!(website(&doc), None);
    }

    #[test]
    fn images_need_both_markers() {
        let doc = Html::parse_document(
            r#"
            <img src="https://s3-media0.fl.yelpcdn.com/bphoto/abc/o.jpg">
            <img src="https://s3-media0.fl.yelpcdn.com/bphoto/abc/o.jpg">
            <img src="https://example.com/photo/other.jpg">
            <img src="https://s3-media0.fl.yelpcdn.com/assets/logo.png">
            "#,
        );
        assert_eq!(
            images(&doc),
            vec!["https://s3-media0.fl.yelpcdn.com/bphoto/abc/o.jpg".to_string()]
        );
    }

    #[test]
    fn images_capped() {
        let mut html = String::new();
        for i in 0..15 {
            html.push_str(&format!(
                r#"<img src="https://s3-media0.fl.yelpcdn.com/bphoto/{i}/o.jpg">"#
            ));
        }
        let doc = Html::parse_document(&html);
        assert_eq!(images(&doc).len(), 10);
    }
}
