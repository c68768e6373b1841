// src/resolve/similarity.rs

/// Ratcliff/Obershelp similarity in `[0, 1]`.
///
/// Finds the longest common contiguous block, recurses into the unmatched
/// pieces on either side, and scores `2 * matched / (len(a) + len(b))`.
/// Lengths are counted in chars. Two empty strings score `1.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// [`ratio`] over pre-split chars, for scoring one query against many titles.
pub fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matched_len(a, b) as f64 / total as f64
}

fn matched_len(a: &[char], b: &[char]) -> usize {
    let (i, j, size) = longest_block(a, b);
    if size == 0 {
        return 0;
    }
    size + matched_len(&a[..i], &b[..j]) + matched_len(&a[i + size..], &b[j + size..])
}

/// Longest common run as `(start_in_a, start_in_b, len)`. Ties go to the run
/// starting earliest in `a`, then earliest in `b`.
fn longest_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    if a.is_empty() || b.is_empty() {
        return best;
    }

    // run[j + 1]: length of the common run ending at a[i], b[j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let k = curr[j + 1];
            if k > best.2 {
                best = (i + 1 - k, j + 1 - k, k);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bounds() {
        assert!(close(ratio("inception", "inception"), 1.0));
        assert!(close(ratio("", ""), 1.0));
        assert!(close(ratio("abc", ""), 0.0));
        assert!(close(ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn test_known_ratios() {
        // one dropped char: blocks "incep" + "t" + "on"
        assert!(close(ratio("incepton", "inception"), 16.0 / 17.0));
        assert!(close(ratio("abcd", "bcde"), 0.75));
        assert!(close(ratio("abcde", "abcdx"), 0.8));
    }

    #[test]
    fn test_recurses_on_both_sides() {
        // "xabcy" vs "zabcw": only the middle block matches
        assert!(close(ratio("xabcy", "zabcw"), 0.6));
        // "ab_cd" vs "abcd": blocks "ab" and "cd"
        assert!(close(ratio("ab_cd", "abcd"), 8.0 / 9.0));
    }

    #[test]
    fn test_longest_block_tie_break() {
        let a: Vec<char> = "abxab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_block(&a, &b), (0, 0, 2));

        let a: Vec<char> = "ab".chars().collect();
        let b: Vec<char> = "xabab".chars().collect();
        assert_eq!(longest_block(&a, &b), (0, 1, 2));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert!(close(ratio("amélie", "amelie"), 10.0 / 12.0));
    }
}
