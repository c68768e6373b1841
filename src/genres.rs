// src/genres.rs

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// genre → suggested titles, loaded once from the bundled YAML table.
static GENRES: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../data/genres.yaml"))
        .expect("bundled genres.yaml should parse")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// No genre was given.
    AskGenre,
    Titles {
        genre: String,
        titles: &'static [String],
    },
    Unknown(String),
}

/// Looks up `genre` case-insensitively.
pub fn suggest(genre: Option<&str>) -> Suggestion {
    let genre = match genre.map(str::trim) {
        Some(g) if !g.is_empty() => g.to_lowercase(),
        _ => return Suggestion::AskGenre,
    };
    match GENRES.get(&genre) {
        Some(titles) => Suggestion::Titles {
            genre,
            titles: titles.as_slice(),
        },
        None => Suggestion::Unknown(genre),
    }
}

/// Genres the table knows about, sorted.
pub fn known_genres() -> impl Iterator<Item = &'static str> {
    GENRES.keys().map(String::as_str)
}

pub fn render_suggestion(suggestion: &Suggestion) -> String {
    match suggestion {
        Suggestion::AskGenre => "Which genre are you in the mood for?".to_string(),
        Suggestion::Titles { genre, titles } => format!(
            "Here are {} {} movies you might like: {}.",
            titles.len(),
            genre,
            titles.join(", ")
        ),
        Suggestion::Unknown(genre) => format!("I don't have 5 suggestions for '{}' yet.", genre),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_genre_has_five_titles() {
        let genres: Vec<&str> = known_genres().collect();
        assert_eq!(
            genres,
            ["action", "comedy", "drama", "horror", "sci-fi", "thriller"]
        );
        for g in genres {
            match suggest(Some(g)) {
                Suggestion::Titles { titles, .. } => assert_eq!(titles.len(), 5, "{}", g),
                other => panic!("{} not found: {:?}", g, other),
            }
        }
    }

    #[test]
    fn test_suggest_is_case_insensitive() {
        assert_eq!(
            render_suggestion(&suggest(Some("Sci-Fi"))),
            "Here are 5 sci-fi movies you might like: Inception, Interstellar, The Matrix, Blade Runner 2049, Arrival."
        );
    }

    #[test]
    fn test_missing_and_unknown_genre() {
        assert_eq!(suggest(None), Suggestion::AskGenre);
        assert_eq!(suggest(Some("  ")), Suggestion::AskGenre);
        assert_eq!(
            render_suggestion(&suggest(Some("Western"))),
            "I don't have 5 suggestions for 'western' yet."
        );
    }
}
