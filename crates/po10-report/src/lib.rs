//! Flat-file reports for scraped athlete results.
//!
//! Everything lands under one output directory:
//!
//! ```text
//! <out>/results/<first>_<last>.csv   one per athlete
//! <out>/results/all.csv              every athlete's rows, with identity columns
//! <out>/index.html                   summary page linking all.csv
//! ```

pub mod csv_out;
pub mod error;
pub mod html;

pub use csv_out::{
    athlete_csv_path, read_results_csv, write_aggregate_csv, write_athlete_csv, AGGREGATE_FILE,
    RESULTS_DIR,
};
pub use error::ReportError;
pub use html::{render_summary_html, write_summary_html, SUMMARY_FILE};
