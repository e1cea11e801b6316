//! Ratcliff/Obershelp sequence similarity.
//!
//! `ratio(a, b) = 2 * M / (len(a) + len(b))`, where `M` counts the characters
//! in the matching blocks found by repeatedly taking the longest common block
//! and recursing on both sides of it. Lengths are in chars, not bytes.

use std::collections::HashMap;

/// Similarity of two strings on a 0.0..=1.0 scale. Two empty strings score 1.0.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Cheap upper bound on [`sequence_ratio`] from the lengths alone.
pub fn ratio_upper_bound(a: &str, b: &str) -> f64 {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la + lb == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f64 / (la + lb) as f64
}

/// Best-scoring candidate at or above `cutoff`.
///
/// Equal scores go to the lexicographically greater candidate.
pub fn best_close_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        if ratio_upper_bound(candidate, query) < cutoff {
            continue;
        }
        let score = sequence_ratio(candidate, query);
        if score < cutoff {
            continue;
        }
        let better = match best {
            None => true,
            Some((key, best_score)) => score > best_score || (score == best_score && candidate > key),
        };
        if better {
            best = Some((candidate, score));
        }
    }

    best
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, c) in b.iter().enumerate() {
        b2j.entry(*c).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, &b2j, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given ranges.
/// Ties go to the smallest `i`, then the smallest `j`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    // run length of the match ending at (i - 1, j), keyed by j
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best_len {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_len = k;
                }
            }
        }
        j2len = next;
    }

    (best_i, best_j, best_len)
}
