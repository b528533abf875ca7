use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme and host of the results site, without a trailing slash.
    pub site_base_url: String,
    /// Directory that receives `results/` and `index.html`.
    pub output_dir: PathBuf,
    /// Optional YAML roster; the compiled-in roster is used when unset.
    pub roster_path: Option<PathBuf>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
