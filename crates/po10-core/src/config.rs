use std::path::PathBuf;

use url::Url;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SITE_BASE_URL: &str = "http://powerof10.info";
pub const DEFAULT_USER_AGENT: &str = "po10/0.1 (athlete-results)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a config that
/// scrapes the live site into the current directory.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let site_base_url = normalize_site_base(&or_default(
        "PO10_SITE_BASE_URL",
        DEFAULT_SITE_BASE_URL,
    ))?;
    let output_dir = PathBuf::from(or_default("PO10_OUTPUT_DIR", "."));
    let roster_path = lookup("PO10_ROSTER_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let log_level = or_default("PO10_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PO10_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PO10_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        site_base_url,
        output_dir,
        roster_path,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Trims trailing slashes and checks that the value parses as an HTTP(S) URL
/// with a host.
fn normalize_site_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        var: "PO10_SITE_BASE_URL".to_string(),
        reason: format!("{reason}: '{raw}'"),
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("expected an http:// or https:// URL"));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
