//! Per-athlete and aggregate CSV files.
//!
//! Dialect: comma delimiter, `|` quote character, minimal quoting, `\n`
//! line endings. Files open with `#` comment lines, then the header row. A
//! field starting with `#` is quoted so it is not read back as a comment.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use po10_core::{Athlete, RosterEntry, GENERALIZED_COLUMNS, RESULT_COLUMNS};

use crate::error::ReportError;

pub const RESULTS_DIR: &str = "results";
pub const AGGREGATE_FILE: &str = "all.csv";

const DELIMITER: u8 = b',';
const QUOTE: u8 = b'|';
const COMMENT: u8 = b'#';

/// Path of an athlete's CSV: `<out>/results/<first>_<last>.csv`.
#[must_use]
pub fn athlete_csv_path(out_dir: &Path, entry: &RosterEntry) -> PathBuf {
    out_dir
        .join(RESULTS_DIR)
        .join(format!("{}.csv", entry.file_stem()))
}

/// Writes one athlete's results, headed by their name and profile links.
///
/// An athlete with no results still gets the comment lines and header row.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory or file cannot be created or
/// written.
pub fn write_athlete_csv(out_dir: &Path, athlete: &Athlete) -> Result<PathBuf, ReportError> {
    let path = athlete_csv_path(out_dir, athlete.entry());
    let links = athlete.links();
    let comments = [
        format!("{} ({})", athlete.full_name(), athlete.entry().club),
        format!(
            "Profile Link 1: {}",
            links.primary.as_deref().unwrap_or("none")
        ),
        format!(
            "Profile Link 2: {}",
            links.secondary.as_deref().unwrap_or("none")
        ),
    ];

    let mut writer = open_with_comments(&path, &comments)?;
    writer
        .write_record(RESULT_COLUMNS)
        .map_err(|e| ReportError::csv(&path, e))?;
    for result in athlete.results() {
        writer
            .write_record(result.values())
            .map_err(|e| ReportError::csv(&path, e))?;
    }
    writer.flush().map_err(|e| ReportError::io(&path, e))?;

    tracing::info!(
        athlete = %athlete.full_name(),
        path = %path.display(),
        rows = athlete.results().len(),
        "wrote athlete CSV"
    );
    Ok(path)
}

/// Writes every athlete's results to `<out>/results/all.csv`, each row
/// prefixed with the athlete's name and profile links. Athletes appear in the
/// order given.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory or file cannot be created or
/// written.
pub fn write_aggregate_csv(out_dir: &Path, athletes: &[Athlete]) -> Result<PathBuf, ReportError> {
    let path = out_dir.join(RESULTS_DIR).join(AGGREGATE_FILE);
    let comments = [format!("Results for {} athletes", athletes.len())];

    let mut writer = open_with_comments(&path, &comments)?;
    writer
        .write_record(GENERALIZED_COLUMNS)
        .map_err(|e| ReportError::csv(&path, e))?;

    let mut rows = 0usize;
    for general in athletes.iter().flat_map(Athlete::generalized) {
        writer
            .write_record(general.values())
            .map_err(|e| ReportError::csv(&path, e))?;
        rows += 1;
    }
    writer.flush().map_err(|e| ReportError::io(&path, e))?;

    tracing::info!(path = %path.display(), rows, "wrote aggregate CSV");
    Ok(path)
}

/// Reads the data rows of a CSV written by this module, skipping comment
/// lines and the header row.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if the file cannot be opened or parsed.
pub fn read_results_csv(path: &Path) -> Result<Vec<Vec<String>>, ReportError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .comment(Some(COMMENT))
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ReportError::csv(path, e))?;

    reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_owned).collect())
                .map_err(|e| ReportError::csv(path, e))
        })
        .collect()
}

fn open_with_comments(
    path: &Path,
    comments: &[String],
) -> Result<csv::Writer<BufWriter<File>>, ReportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ReportError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for comment in comments {
        writeln!(out, "# {comment}").map_err(|e| ReportError::io(path, e))?;
    }

    Ok(WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote(QUOTE)
        .quote_style(QuoteStyle::Necessary)
        .comment(Some(COMMENT))
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out))
}
