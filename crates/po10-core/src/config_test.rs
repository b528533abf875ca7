use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.site_base_url, "http://powerof10.info");
    assert_eq!(cfg.output_dir, PathBuf::from("."));
    assert!(cfg.roster_path.is_none());
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "po10/0.1 (athlete-results)");
}

#[test]
fn site_base_url_trailing_slash_is_trimmed() {
    let mut map = HashMap::new();
    map.insert("PO10_SITE_BASE_URL", "https://www.thepowerof10.info//");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.site_base_url, "https://www.thepowerof10.info");
}

#[test]
fn site_base_url_without_scheme_fails() {
    let mut map = HashMap::new();
    map.insert("PO10_SITE_BASE_URL", "powerof10.info");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PO10_SITE_BASE_URL"),
        "expected InvalidEnvVar(PO10_SITE_BASE_URL), got: {result:?}"
    );
}

#[test]
fn site_base_url_without_host_fails() {
    let mut map = HashMap::new();
    map.insert("PO10_SITE_BASE_URL", "http:///");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn site_base_url_with_space_in_host_fails() {
    let mut map = HashMap::new();
    map.insert("PO10_SITE_BASE_URL", "http://not a host");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PO10_SITE_BASE_URL"),
        "expected InvalidEnvVar(PO10_SITE_BASE_URL), got: {result:?}"
    );
}

#[test]
fn site_base_url_with_other_scheme_fails() {
    let mut map = HashMap::new();
    map.insert("PO10_SITE_BASE_URL", "ftp://powerof10.info");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("PO10_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("PO10_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PO10_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PO10_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn roster_path_and_output_dir_overrides() {
    let mut map = HashMap::new();
    map.insert("PO10_ROSTER_PATH", "./config/athletes.yaml");
    map.insert("PO10_OUTPUT_DIR", "/tmp/po10");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.roster_path,
        Some(PathBuf::from("./config/athletes.yaml"))
    );
    assert_eq!(cfg.output_dir, PathBuf::from("/tmp/po10"));
}

#[test]
fn blank_roster_path_is_ignored() {
    let mut map = HashMap::new();
    map.insert("PO10_ROSTER_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.roster_path.is_none());
}

#[test]
fn user_agent_and_log_level_overrides() {
    let mut map = HashMap::new();
    map.insert("PO10_USER_AGENT", "custom-agent/2.0");
    map.insert("PO10_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "debug");
}
