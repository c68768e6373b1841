// src/details.rs

use crate::dataset::Record;
use crate::error::{ResolveError, Result};

/// Characters of the description shown in the general summary.
const SUMMARY_CHARS: usize = 120;

static DURATION_WORDS: &[&str] = &["long", "duration", "time", "length"];
static PLOT_WORDS: &[&str] = &["plot", "story", "about", "summary"];

/// The fields a reply about one title needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub duration: String,
    pub description: String,
    pub release_year: String,
}

impl MovieDetails {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.get("title").to_string(),
            duration: record.get("duration").to_string(),
            description: record.get("description").to_string(),
            release_year: record.get("release_year").to_string(),
        }
    }
}

/// Which part of a title the user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Duration,
    Plot,
    General,
}

impl Emphasis {
    /// Keyword scan of the raw utterance. Duration words beat plot words.
    pub fn detect(utterance: &str) -> Self {
        let text = utterance.to_lowercase();
        if DURATION_WORDS.iter().any(|w| text.contains(w)) {
            Self::Duration
        } else if PLOT_WORDS.iter().any(|w| text.contains(w)) {
            Self::Plot
        } else {
            Self::General
        }
    }
}

pub fn render_details(details: &MovieDetails, emphasis: Emphasis) -> String {
    match emphasis {
        Emphasis::Duration => format!(
            "The duration of '{}' is {}.",
            details.title, details.duration
        ),
        Emphasis::Plot => format!("The plot of '{}': {}", details.title, details.description),
        Emphasis::General => format!(
            "{} ({})\n- Duration: {}\n- Summary: {}...",
            details.title,
            details.release_year,
            details.duration,
            clip(&details.description, SUMMARY_CHARS)
        ),
    }
}

/// User-facing reply for a resolution attempt on `utterance`.
pub fn render_outcome(utterance: &str, outcome: &Result<Record>) -> String {
    match outcome {
        Ok(record) => render_details(&MovieDetails::from_record(record), Emphasis::detect(utterance)),
        Err(ResolveError::EmptyQuery) => "Which movie are you interested in?".to_string(),
        Err(ResolveError::NotFound { hint }) => {
            format!("I couldn't find '{}' in the dataset.", hint)
        }
        Err(ResolveError::DatasetUnavailable { .. }) | Err(ResolveError::Internal(_)) => {
            "The movie catalogue is unavailable right now.".to_string()
        }
    }
}

fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
