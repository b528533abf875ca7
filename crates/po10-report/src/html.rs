//! Static summary page listing every athlete's results.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use po10_core::{Athlete, GENERALIZED_COLUMNS, NO_VENUE_LINK};

use crate::csv_out::{AGGREGATE_FILE, RESULTS_DIR};
use crate::error::ReportError;

pub const SUMMARY_FILE: &str = "index.html";

/// Columns of a generalized row rendered as anchors, with their link text.
const LINK_COLUMNS: [(usize, &str); 3] = [(1, "profile"), (2, "profile"), (15, "venue")];

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Athlete Results</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; font-size: 0.9em; }
th, td { border: 1px solid #ccc; padding: 0.25em 0.5em; text-align: left; }
th { background: #eee; }
</style>
</head>
<body>
<h1>Athlete Results</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders the summary page: a download link to the aggregate CSV and one
/// table of every athlete's results.
#[must_use]
pub fn render_summary_html(athletes: &[Athlete], generated_at: DateTime<Utc>) -> String {
    let mut page = String::from(PAGE_HEAD);

    let _ = writeln!(
        page,
        r#"<p><a href="{RESULTS_DIR}/{AGGREGATE_FILE}">Download all results (CSV)</a></p>"#
    );
    let _ = writeln!(
        page,
        "<p>Generated {}</p>",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    page.push_str("<table>\n<thead>\n<tr>");
    for column in GENERALIZED_COLUMNS {
        let _ = write!(page, "<th>{}</th>", escape_html(column));
    }
    page.push_str("</tr>\n</thead>\n<tbody>\n");

    for general in athletes.iter().flat_map(Athlete::generalized) {
        page.push_str("<tr>");
        for (index, value) in general.values().into_iter().enumerate() {
            page.push_str("<td>");
            page.push_str(&render_cell(index, value));
            page.push_str("</td>");
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</tbody>\n</table>\n");
    page.push_str(PAGE_TAIL);
    page
}

/// Writes the summary page to `<out>/index.html`.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory or file cannot be written.
pub fn write_summary_html(
    out_dir: &Path,
    athletes: &[Athlete],
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    fs::create_dir_all(out_dir).map_err(|e| ReportError::io(out_dir, e))?;
    let path = out_dir.join(SUMMARY_FILE);
    fs::write(&path, render_summary_html(athletes, generated_at))
        .map_err(|e| ReportError::io(&path, e))?;

    tracing::info!(path = %path.display(), "wrote summary page");
    Ok(path)
}

fn render_cell(index: usize, value: &str) -> String {
    let link_text = LINK_COLUMNS
        .iter()
        .find(|(column, _)| *column == index)
        .map(|(_, text)| *text);

    match link_text {
        Some(text) if !value.is_empty() && value != NO_VENUE_LINK => {
            format!(r#"<a href="{}">{text}</a>"#, escape_html(value))
        }
        _ => escape_html(value),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
