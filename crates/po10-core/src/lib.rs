pub mod app_config;
pub mod config;
pub mod results;
pub mod roster;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use results::{
    Athlete, GeneralizedResult, ProfileLinks, RaceResult, GENERALIZED_COLUMNS, MIN_DATA_CELLS,
    NO_VENUE_LINK, RESULT_COLUMNS, VENUE_CELL,
};
pub use roster::{default_roster, load_roster, RosterEntry, RosterFile, DEFAULT_CLUB};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read roster file {path}: {source}")]
    RosterFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster file: {0}")]
    RosterFileParse(#[from] serde_yaml::Error),

    #[error("roster validation failed: {0}")]
    Validation(String),
}
