//! Race-result records and the column schema shared by the extractor and the
//! report writer.
//!
//! A profile-page result row has twelve cells. Only some positions carry a
//! meaning we name; the rest are carried through positionally so the CSV
//! output keeps every column the source table had. Two derived values (the
//! absolute venue link and the category heading in force) are appended.

use crate::roster::RosterEntry;

/// Cells a table row needs before it is treated as a result row.
pub const MIN_DATA_CELLS: usize = 12;

/// Recorded as the venue link when the venue cell has no anchor.
pub const NO_VENUE_LINK: &str = "no venue link";

/// Index of the venue cell within a result row.
pub const VENUE_CELL: usize = 9;

/// Header row of a per-athlete CSV, one name per schema position.
pub const RESULT_COLUMNS: [&str; 14] = [
    "Event",
    "Perf",
    "Col 3",
    "Col 4",
    "Col 5",
    "Pos",
    "Col 7",
    "Col 8",
    "Col 9",
    "Venue",
    "Meeting",
    "Date",
    "Venue Link",
    "Category",
];

/// Header row of the aggregate CSV: athlete identity, then [`RESULT_COLUMNS`].
pub const GENERALIZED_COLUMNS: [&str; 17] = [
    "Athlete",
    "Profile Link 1",
    "Profile Link 2",
    "Event",
    "Perf",
    "Col 3",
    "Col 4",
    "Col 5",
    "Pos",
    "Col 7",
    "Col 8",
    "Col 9",
    "Venue",
    "Meeting",
    "Date",
    "Venue Link",
    "Category",
];

/// Source cell indices of the columns without a named meaning.
const UNNAMED_CELLS: [usize; 6] = [2, 3, 4, 6, 7, 8];

/// One row of an athlete's results table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RaceResult {
    pub event: String,
    pub time: String,
    pub position: String,
    pub venue: String,
    pub meeting: String,
    pub date: String,
    pub venue_link: String,
    pub category: String,
    unnamed: [String; 6],
}

impl RaceResult {
    /// Builds a result from the text of a row's cells plus the two derived
    /// values.
    ///
    /// Returns `None` when the row has fewer than [`MIN_DATA_CELLS`] cells.
    /// Cells past the twelfth are ignored.
    #[must_use]
    pub fn from_cells(cells: &[String], venue_link: String, category: String) -> Option<Self> {
        if cells.len() < MIN_DATA_CELLS {
            return None;
        }

        Some(Self {
            event: cells[0].clone(),
            time: cells[1].clone(),
            position: cells[5].clone(),
            venue: cells[VENUE_CELL].clone(),
            meeting: cells[10].clone(),
            date: cells[11].clone(),
            venue_link,
            category,
            unnamed: UNNAMED_CELLS.map(|i| cells[i].clone()),
        })
    }

    /// Field values in [`RESULT_COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [&str; 14] {
        let [c2, c3, c4, c6, c7, c8] = &self.unnamed;
        [
            self.event.as_str(),
            self.time.as_str(),
            c2.as_str(),
            c3.as_str(),
            c4.as_str(),
            self.position.as_str(),
            c6.as_str(),
            c7.as_str(),
            c8.as_str(),
            self.venue.as_str(),
            self.meeting.as_str(),
            self.date.as_str(),
            self.venue_link.as_str(),
            self.category.as_str(),
        ]
    }

    /// Whether the row is a repeat of the table's header row.
    #[must_use]
    pub fn is_header_repeat(&self) -> bool {
        self.event == "Event"
    }

    /// Returns a copy of this result tagged with the athlete's identity, for
    /// the aggregate report.
    #[must_use]
    pub fn generalize(&self, entry: &RosterEntry, links: &ProfileLinks) -> GeneralizedResult {
        GeneralizedResult {
            athlete: entry.full_name(),
            profile_link_1: links.primary.clone().unwrap_or_default(),
            profile_link_2: links.secondary.clone().unwrap_or_default(),
            result: self.clone(),
        }
    }
}

/// A [`RaceResult`] prefixed with the athlete it belongs to.
///
/// Missing profile links are stored as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralizedResult {
    pub athlete: String,
    pub profile_link_1: String,
    pub profile_link_2: String,
    pub result: RaceResult,
}

impl GeneralizedResult {
    /// Field values in [`GENERALIZED_COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [&str; 17] {
        let [e, t, c2, c3, c4, p, c6, c7, c8, v, m, d, vl, c] = self.result.values();
        [
            self.athlete.as_str(),
            self.profile_link_1.as_str(),
            self.profile_link_2.as_str(),
            e,
            t,
            c2,
            c3,
            c4,
            p,
            c6,
            c7,
            c8,
            v,
            m,
            d,
            vl,
            c,
        ]
    }
}

/// Links found for an athlete by the profile lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileLinks {
    /// Absolute link to the athlete's results profile.
    pub primary: Option<String>,
    /// Second link in the lookup row, taken verbatim.
    pub secondary: Option<String>,
}

impl ProfileLinks {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.primary.is_some()
    }
}

/// An athlete after lookup and extraction have both run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Athlete {
    entry: RosterEntry,
    links: ProfileLinks,
    results: Vec<RaceResult>,
}

impl Athlete {
    #[must_use]
    pub fn new(entry: RosterEntry, links: ProfileLinks, results: Vec<RaceResult>) -> Self {
        Self {
            entry,
            links,
            results,
        }
    }

    #[must_use]
    pub fn entry(&self) -> &RosterEntry {
        &self.entry
    }

    #[must_use]
    pub fn links(&self) -> &ProfileLinks {
        &self.links
    }

    #[must_use]
    pub fn results(&self) -> &[RaceResult] {
        &self.results
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        self.entry.full_name()
    }

    #[must_use]
    pub fn file_stem(&self) -> String {
        self.entry.file_stem()
    }

    /// Every result tagged with this athlete's identity, in result order.
    pub fn generalized(&self) -> impl Iterator<Item = GeneralizedResult> + '_ {
        self.results
            .iter()
            .map(|r| r.generalize(&self.entry, &self.links))
    }
}
