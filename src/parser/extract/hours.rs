use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::element_text;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

const DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Opening hours from the first table whose text mentions "hours". Each row
/// with at least two cells is matched on its leading day abbreviation; the
/// first matching day wins per row, later rows overwrite earlier ones.
pub fn extract(doc: &Html) -> BTreeMap<String, String> {
    let mut hours = BTreeMap::new();

    let table = doc
        .select(&TABLE_SELECTOR)
        .find(|t| element_text(*t).to_lowercase().contains("hours"));
    let Some(table) = table else {
        return hours;
    };

    for row in table.select(&ROW_SELECTOR) {
        let cells: Vec<_> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < 2 {
            continue;
        }
        let day_text = element_text(cells[0]);
        let value_text = element_text(cells[1]);
        for day in DAYS {
            if day_text.starts_with(day) {
                hours.insert((*day).to_string(), value_text.clone());
                break;
            }
        }
    }

    hours
}
