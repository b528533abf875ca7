//! Result rows from an athlete's profile page.
//!
//! A profile page holds many tables, most of them layout. Performance tables
//! are recognised by their header: the second and third cells hold bold
//! `Event` and `Perf` labels. Inside a performance table, short rows are
//! headings (a season/age-group line such as `2023 U20 Corstorphine`) and
//! rows with at least [`MIN_DATA_CELLS`] cells are results.

use std::sync::LazyLock;

use po10_core::{RaceResult, MIN_DATA_CELLS, NO_VENUE_LINK, VENUE_CELL};
use scraper::{ElementRef, Html, Selector};

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("valid selector"));
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("valid selector"));
static BOLD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("b").expect("valid selector"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

/// Extracts every result row from the performance tables of a profile page,
/// in table order then row order.
///
/// `site_base` replaces the leading `../` of relative venue links.
#[must_use]
pub fn parse_results(html: &str, site_base: &str) -> Vec<RaceResult> {
    let document = Html::parse_document(html);

    let results: Vec<RaceResult> = document
        .select(&TABLE)
        .filter(|table| is_results_table(*table))
        .flat_map(|table| scan_table(table, site_base))
        .collect();

    tracing::debug!(count = results.len(), "extracted result rows");
    results
}

/// Whether a table's second and third cells carry the bold `Event` and `Perf`
/// header labels.
pub(crate) fn is_results_table(table: ElementRef<'_>) -> bool {
    let mut cells = table.select(&CELL).skip(1);
    let (Some(event), Some(perf)) = (cells.next(), cells.next()) else {
        return false;
    };
    bold_text(event).as_deref() == Some("Event") && bold_text(perf).as_deref() == Some("Perf")
}

fn bold_text(cell: ElementRef<'_>) -> Option<String> {
    cell.select(&BOLD).next().map(|b| b.text().collect())
}

/// Converts the rows of one performance table into results.
///
/// The category starts empty for each table and is replaced by every
/// heading row that names one.
pub(crate) fn scan_table(table: ElementRef<'_>, site_base: &str) -> Vec<RaceResult> {
    let mut category = String::new();
    let mut results = Vec::new();

    for row in table.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();

        if cells.len() < MIN_DATA_CELLS {
            let heading = cells.first().map(|c| c.text().collect::<String>());
            if let Some(found) = heading.as_deref().and_then(category_from_heading) {
                tracing::debug!(category = found, "category heading");
                category = found.to_owned();
            }
            continue;
        }

        let texts: Vec<String> = cells.iter().map(|c| c.text().collect()).collect();
        let link = venue_link(cells[VENUE_CELL], site_base);

        let Some(result) = RaceResult::from_cells(&texts, link, category.clone()) else {
            continue;
        };
        if result.is_header_repeat() {
            tracing::debug!("skipping repeated header row");
            continue;
        }
        results.push(result);
    }

    results
}

/// Returns the category named by a heading cell: the second space-separated
/// token, when the text has at least three.
pub(crate) fn category_from_heading(text: &str) -> Option<&str> {
    if text.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() >= 3 {
        Some(tokens[1])
    } else {
        None
    }
}

fn venue_link(cell: ElementRef<'_>, site_base: &str) -> String {
    cell.select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map_or_else(
            || NO_VENUE_LINK.to_owned(),
            |href| rewrite_venue_href(href, site_base),
        )
}

/// Makes a venue href absolute by replacing a leading `../` with the site base.
/// Any other href is returned unchanged.
#[must_use]
pub fn rewrite_venue_href(href: &str, site_base: &str) -> String {
    match href.strip_prefix("../") {
        Some(rest) => format!("{}/{rest}", site_base.trim_end_matches('/')),
        None => href.to_owned(),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
