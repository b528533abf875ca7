use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_CLUB: &str = "Corstorphine";

fn default_club() -> String {
    DEFAULT_CLUB.to_string()
}

/// One athlete to look up, as listed in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_club")]
    pub club: String,
}

impl RosterEntry {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            club: default_club(),
        }
    }

    #[must_use]
    pub fn with_club(mut self, club: &str) -> Self {
        self.club = club.to_string();
        self
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Stem of the per-athlete CSV file name, `<first>_<last>`.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub athletes: Vec<RosterEntry>,
}

/// The roster scraped when no roster file is configured.
#[must_use]
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new("Christopher", "O'Brien"),
        RosterEntry::new("Steven", "O'Brien"),
        RosterEntry::new("Moray", "Anderson"),
    ]
}

/// Load and validate a roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let roster: RosterFile = serde_yaml::from_str(&content)?;
    validate_roster(&roster.athletes)?;

    Ok(roster.athletes)
}

fn validate_roster(entries: &[RosterEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.first_name.trim().is_empty() || entry.last_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "athlete first and last names must be non-empty".to_string(),
            ));
        }

        // Names become file names under results/.
        if entry.file_stem().contains(&['/', '\\'][..]) {
            return Err(ConfigError::Validation(format!(
                "athlete '{}' contains a path separator",
                entry.full_name()
            )));
        }

        let key = (
            entry.first_name.to_lowercase(),
            entry.last_name.to_lowercase(),
        );
        if !seen.insert(key) {
            return Err(ConfigError::Validation(format!(
                "duplicate athlete: '{}'",
                entry.full_name()
            )));
        }
    }

    Ok(())
}
