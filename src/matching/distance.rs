//! Levenshtein edit distance
//!
//! The single string-similarity primitive used by both resolution stages.
//! Compares raw characters; case normalization is the caller's job and is
//! applied everywhere before this function is reached.

/// Minimum number of single-character insertions, deletions, or
/// substitutions needed to transform `s` into `t`.
///
/// Classic two-row dynamic program: O(|s|·|t|) time, O(|t|) space.
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();

    if s.is_empty() {
        return t.len();
    }
    if t.is_empty() {
        return s.len();
    }

    // prev holds row i-1 of the full DP table, curr row i
    let mut prev: Vec<usize> = (0..=t.len()).collect();
    let mut curr: Vec<usize> = vec![0; t.len() + 1];

    for i in 1..=s.len() {
        curr[0] = i;
        for j in 1..=t.len() {
            let cost = usize::from(s[i - 1] != t[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[t.len()]
}
