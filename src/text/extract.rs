// src/text/extract.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// First `"..."` span in an utterance.
static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("quoted-title pattern should compile"));

/// Lead-in phrases, checked in this order. Only the first one that prefixes
/// the utterance is removed.
static LEAD_IN_PHRASES: &[&str] = &[
    "tell me about",
    "what is",
    "info for",
    "details for",
    "plot of",
    "duration of",
    "story of",
    "how long is",
];

/// Stripped from both ends of the extracted title.
const EDGE_CHARS: &[char] = &['?', '!', '.', ',', '\'', '"'];

/// Pulls the likely title out of a free-text utterance.
///
/// A double-quoted span wins outright. Otherwise one leading phrase from
/// [`LEAD_IN_PHRASES`] is removed (a single pass: `"what is the plot of up"`
/// becomes `"the plot of up"`) and the remainder is trimmed of whitespace and
/// edge punctuation. The result is lower-cased; an empty string means no
/// title could be extracted.
pub fn extract_title(utterance: &str) -> String {
    let lowered = utterance.to_lowercase();
    let text = lowered.trim();

    if let Some(quoted) = QUOTED.captures(text).and_then(|caps| caps.get(1)) {
        return quoted.as_str().trim().to_string();
    }

    let remainder = LEAD_IN_PHRASES
        .iter()
        .find_map(|phrase| text.strip_prefix(*phrase))
        .unwrap_or(text);

    remainder
        .trim_matches(|c: char| c.is_whitespace() || EDGE_CHARS.contains(&c))
        .to_string()
}

/// Picks the title hint for a request: the pre-extracted slot when it holds
/// any non-whitespace text, otherwise whatever [`extract_title`] finds in the
/// utterance.
///
/// A whitespace-only slot counts as absent, so `Some("  ")` falls back to the
/// utterance rather than yielding an empty hint.
pub fn title_hint(slot: Option<&str>, utterance: &str) -> String {
    match slot {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => extract_title(utterance),
    }
}
