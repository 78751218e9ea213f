//! Approximate string matching used by the category resolver.
//!
//! Scores are on a 0-100 scale built on the Indel distance (insertions and
//! deletions only), so a transposition costs less than two substitutions.

/// Indel similarity of two character sequences: `200 * lcs / (len_a + len_b)`.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * longest_common_subsequence(a, b) as f64 / total as f64
}

/// Best [`ratio`] between the shorter string and any same-length window of the
/// longer one. Windows clipped at either edge of the longer string are scored
/// too, so a keyword hanging off the end of the input still earns credit.
pub fn partial_ratio(left: &str, right: &str) -> f64 {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();

    if left.len() == right.len() {
        return best_window(&left, &right).max(best_window(&right, &left));
    }

    if left.len() < right.len() {
        best_window(&left, &right)
    } else {
        best_window(&right, &left)
    }
}

fn best_window(needle: &[char], haystack: &[char]) -> f64 {
    if needle.is_empty() {
        return if haystack.is_empty() { 100.0 } else { 0.0 };
    }

    let width = needle.len();
    let len = haystack.len();
    let mut best = 0.0_f64;

    let leading = (1..width).map(|end| &haystack[..end.min(len)]);
    let full = (0..=len - width).map(|start| &haystack[start..start + width]);
    let trailing = (len - width + 1..len).map(|start| &haystack[start..]);

    for window in leading.chain(full).chain(trailing) {
        best = best.max(ratio(needle, window));
        if best >= 100.0 {
            break;
        }
    }

    best
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; inner.len() + 1];

    for &x in outer {
        let mut diagonal = 0;
        for (j, &y) in inner.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[inner.len()]
}
