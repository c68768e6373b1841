// src/config.rs

use std::{env, path::PathBuf, time::Duration};
use tracing::warn;
use url::Url;

const DEFAULT_DATASET: &str = "data/netflix_titles.csv";
const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3/";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Trending lookups are disabled when this is `None`.
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: Url,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            tmdb_api_key: None,
            tmdb_base_url: default_base_url(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// `REELFINDER_DATASET`, `TMDB_API_KEY`, `TMDB_BASE_URL`,
    /// `REELFINDER_HTTP_TIMEOUT_SECS`. Bad values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(path) = lookup("REELFINDER_DATASET").filter(|v| !v.trim().is_empty()) {
            cfg.dataset_path = PathBuf::from(path);
        }

        cfg.tmdb_api_key = lookup("TMDB_API_KEY").filter(|v| !v.trim().is_empty());

        if let Some(raw) = lookup("TMDB_BASE_URL") {
            match Url::parse(&with_trailing_slash(&raw)) {
                Ok(url) => cfg.tmdb_base_url = url,
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid TMDB_BASE_URL"),
            }
        }

        if let Some(raw) = lookup("REELFINDER_HTTP_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.http_timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid REELFINDER_HTTP_TIMEOUT_SECS"),
            }
        }

        cfg
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_TMDB_BASE_URL).expect("default TMDB base URL should parse")
}

// Url::join drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(raw: &str) -> String {
    let raw = raw.trim();
    if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[]));
        assert_eq!(cfg.dataset_path, PathBuf::from("data/netflix_titles.csv"));
        assert_eq!(cfg.tmdb_api_key, None);
        assert_eq!(cfg.tmdb_base_url.as_str(), "https://api.themoviedb.org/3/");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("REELFINDER_DATASET", "/srv/titles.csv"),
            ("TMDB_API_KEY", "abc123"),
            ("TMDB_BASE_URL", "http://localhost:9000/v3"),
            ("REELFINDER_HTTP_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(cfg.dataset_path, PathBuf::from("/srv/titles.csv"));
        assert_eq!(cfg.tmdb_api_key.as_deref(), Some("abc123"));
        assert_eq!(cfg.tmdb_base_url.as_str(), "http://localhost:9000/v3/");
        assert_eq!(cfg.http_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("TMDB_API_KEY", "   "),
            ("TMDB_BASE_URL", "not a url"),
            ("REELFINDER_HTTP_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(cfg.tmdb_api_key, None);
        assert_eq!(cfg.tmdb_base_url.as_str(), "https://api.themoviedb.org/3/");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }
}
