// src/text/normalize.rs

/// Canonical lookup form of a title: lower-cased, every character other than
/// `a-z`, `0-9` and whitespace replaced by a space, whitespace runs collapsed
/// to one space, ends trimmed.
///
/// Dataset titles and user hints both go through this before comparison, so
/// `"The Matrix!"` and `"the   matrix"` land on the same key.
pub fn normalize(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let spaced: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
