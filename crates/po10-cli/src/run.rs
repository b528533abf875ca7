//! Command handlers: drive roster entries through lookup, extraction and
//! report writing.
//!
//! Athletes are processed one at a time, in roster order. An athlete the
//! lookup cannot find is logged and written out with no results; a network
//! failure or non-2xx response aborts the run.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use po10_core::{Athlete, AppConfig, RosterEntry, RESULT_COLUMNS};
use po10_scraper::{Po10Client, ScraperError};

fn build_client(config: &AppConfig) -> anyhow::Result<Po10Client> {
    Po10Client::from_config(config).map_err(|e| anyhow::anyhow!("failed to build client: {e}"))
}

fn load_roster_entries(roster_path: Option<&Path>) -> anyhow::Result<Vec<RosterEntry>> {
    match roster_path {
        Some(path) => po10_core::load_roster(path)
            .with_context(|| format!("loading roster from {}", path.display())),
        None => Ok(po10_core::default_roster()),
    }
}

/// Resolves an athlete's profile links and, if a profile was found, extracts
/// its results.
pub(crate) async fn process_athlete(
    client: &Po10Client,
    entry: RosterEntry,
) -> Result<Athlete, ScraperError> {
    let links = client.resolve(&entry).await?;

    let results = match links.primary.as_deref() {
        Some(link) => {
            let results = client.extract(link).await?;
            tracing::info!(
                athlete = %entry.full_name(),
                results = results.len(),
                "extracted results"
            );
            results
        }
        None => {
            tracing::warn!(athlete = %entry.full_name(), "no profile found; skipping extraction");
            Vec::new()
        }
    };

    Ok(Athlete::new(entry, links, results))
}

/// Runs every roster entry through the pipeline, writing each athlete's CSV
/// as soon as it is complete, then the aggregate CSV and summary page.
pub(crate) async fn scrape_roster(
    client: &Po10Client,
    roster: Vec<RosterEntry>,
    output_dir: &Path,
) -> anyhow::Result<Vec<Athlete>> {
    let mut athletes = Vec::with_capacity(roster.len());

    for entry in roster {
        let name = entry.full_name();
        let athlete = process_athlete(client, entry)
            .await
            .with_context(|| format!("scraping results for {name}"))?;
        po10_report::write_athlete_csv(output_dir, &athlete)?;
        athletes.push(athlete);
    }

    po10_report::write_aggregate_csv(output_dir, &athletes)?;
    po10_report::write_summary_html(output_dir, &athletes, chrono::Utc::now())?;

    Ok(athletes)
}

/// Handler for `po10 scrape`.
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded, a request fails, or a
/// report file cannot be written.
pub(crate) async fn run_scrape_command(
    config: &AppConfig,
    roster_path: Option<&Path>,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let roster = load_roster_entries(roster_path)?;
    let client = build_client(config)?;

    tracing::info!(
        athletes = roster.len(),
        output_dir = %output_dir.display(),
        "starting scrape"
    );
    let athletes = scrape_roster(&client, roster, output_dir).await?;

    let unresolved = athletes.iter().filter(|a| !a.links().is_resolved()).count();
    let rows: usize = athletes.iter().map(|a| a.results().len()).sum();
    tracing::info!(
        athletes = athletes.len(),
        unresolved,
        rows,
        "scrape complete"
    );
    Ok(())
}

/// Handler for `po10 show`.
///
/// # Errors
///
/// Returns an error if the lookup or profile request fails.
pub(crate) async fn run_show_command(
    config: &AppConfig,
    first_name: &str,
    last_name: &str,
    club: Option<&str>,
) -> anyhow::Result<()> {
    let mut entry = RosterEntry::new(first_name, last_name);
    if let Some(club) = club {
        entry = entry.with_club(club);
    }

    let client = build_client(config)?;
    let athlete = process_athlete(&client, entry).await?;
    print!("{}", format_athlete(&athlete));
    Ok(())
}

/// Plain-text listing of an athlete's links and results, one `FIELD: value`
/// line per column.
pub(crate) fn format_athlete(athlete: &Athlete) -> String {
    let links = athlete.links();
    let mut out = format!(
        "{}\nPROFILE LINK 1: {}\nPROFILE LINK 2: {}\n",
        athlete.full_name(),
        links.primary.as_deref().unwrap_or("none"),
        links.secondary.as_deref().unwrap_or("none"),
    );

    for result in athlete.results() {
        out.push('\n');
        for (column, value) in RESULT_COLUMNS.iter().zip(result.values()) {
            let _ = writeln!(out, "{}: {value}", column.to_uppercase());
        }
    }
    out
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
