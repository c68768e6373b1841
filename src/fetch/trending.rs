// src/fetch/trending.rs

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};
use url::Url;

use crate::config::Config;

/// Titles shown in a trending reply.
pub const TRENDING_LIMIT: usize = 5;

pub const TRENDING_UNAVAILABLE: &str = "Trending service is currently unavailable.";
pub const TRENDING_ERROR: &str = "Error connecting to movie service.";

#[derive(Debug, Deserialize)]
struct TrendingPage {
    #[serde(default)]
    results: Vec<TrendingMovie>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrendingMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl TrendingMovie {
    /// `"Title (YYYY)"`; the year is blank when the date is missing.
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.title.as_deref().unwrap_or("Untitled"),
            self.release_year().unwrap_or_default()
        )
    }

    fn release_year(&self) -> Option<String> {
        let raw = self.release_date.as_deref()?.trim();
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date.year().to_string()),
            Err(_) => Some(raw.chars().take(4).collect()),
        }
    }
}

/// Daily trending movies from TMDB.
#[derive(Debug, Clone)]
pub struct TrendingClient {
    http: Client,
    base: Url,
    api_key: Option<String>,
}

impl TrendingClient {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(cfg.http_timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base: cfg.tmdb_base_url.clone(),
            api_key: cfg.tmdb_api_key.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// First [`TRENDING_LIMIT`] trending movies of the day.
    pub async fn fetch_trending(&self) -> Result<Vec<TrendingMovie>> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("TMDB_API_KEY is not set");
        };
        let url = self
            .base
            .join("trending/movie/day")
            .with_context(|| format!("joining trending path onto {}", self.base))?;

        let body = self
            .http
            .get(url.clone())
            .query(&[("api_key", api_key), ("language", "en-US")])
            .send()
            .await
            .with_context(|| format!("GET {}", url))?
            .error_for_status()?
            .text()
            .await
            .with_context(|| format!("reading body from {}", url))?;

        let movies = parse_trending_page(&body)?;
        info!(count = movies.len(), "fetched trending movies");
        Ok(movies)
    }

    /// Reply text for a trending request; failures become a fixed message.
    pub async fn trending_reply(&self) -> String {
        if !self.is_configured() {
            return TRENDING_UNAVAILABLE.to_string();
        }
        match self.fetch_trending().await {
            Ok(movies) => render_trending(&movies),
            Err(e) => {
                error!("trending lookup failed: {:#}", e);
                TRENDING_ERROR.to_string()
            }
        }
    }
}

/// Decode a TMDB trending page, keeping the first [`TRENDING_LIMIT`] results.
pub fn parse_trending_page(json: &str) -> Result<Vec<TrendingMovie>> {
    let mut page: TrendingPage =
        serde_json::from_str(json).context("decoding trending response")?;
    page.results.truncate(TRENDING_LIMIT);
    Ok(page.results)
}

pub fn render_trending(movies: &[TrendingMovie]) -> String {
    let labels: Vec<String> = movies.iter().map(TrendingMovie::label).collect();
    format!("Trending today:\n- {}", labels.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "page": 1,
        "results": [
            {"id": 1, "title": "Dune: Part Two", "release_date": "2024-02-27"},
            {"id": 2, "title": "Civil War", "release_date": "2024-04-10"},
            {"id": 3, "title": "Untitled Project"},
            {"id": 4, "title": "Old Print", "release_date": "1999"},
            {"id": 5, "release_date": "2023-11-01"},
            {"id": 6, "title": "Sixth", "release_date": "2024-01-01"}
        ]
    }"#;

    #[test]
    fn test_parse_keeps_first_five() -> Result<()> {
        let movies = parse_trending_page(PAGE)?;
        assert_eq!(movies.len(), TRENDING_LIMIT);
        assert_eq!(movies[0].title.as_deref(), Some("Dune: Part Two"));
        Ok(())
    }

    #[test]
    fn test_render_labels() -> Result<()> {
        let movies = parse_trending_page(PAGE)?;
        assert_eq!(
            render_trending(&movies),
            "Trending today:\n- Dune: Part Two (2024)\n- Civil War (2024)\n- Untitled Project ()\n- Old Print (1999)\n- Untitled (2023)"
        );
        Ok(())
    }

    #[test]
    fn test_missing_results_is_empty() -> Result<()> {
        assert!(parse_trending_page(r#"{"page": 1}"#)?.is_empty());
        assert!(parse_trending_page("<html>").is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_reply_without_key() -> Result<()> {
        let client = TrendingClient::from_config(&Config::default())?;
        assert!(!client.is_configured());
        assert_eq!(client.trending_reply().await, TRENDING_UNAVAILABLE);
        assert!(client.fetch_trending().await.is_err());
        Ok(())
    }
}
