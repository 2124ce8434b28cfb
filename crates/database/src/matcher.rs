//! Approximate string matching based on longest matching blocks.
//!
//! The similarity of two strings is `2 * M / T`, where `T` is the total number
//! of characters in both and `M` is the number of characters covered by
//! matching blocks. The blocks are found by repeatedly taking the longest
//! common substring and recursing on the pieces to its left and right.

use crate::error::{DbError, DbResult};
use std::{cmp::Ordering, collections::HashMap};

/// Default number of close matches to keep
pub const DEFAULT_MAX_MATCHES: usize = 3;

/// Sequences at least this long have their most frequent characters ignored
/// when seeding matches
const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal characters at `a[i..]` and `b[j..]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    pub i: usize,
    pub j: usize,
    pub size: usize,
}

/// Compares a candidate (`a`) against a fixed target (`b`)
///
/// The index over `b` is built once, so reuse one matcher when comparing many
/// candidates against the same target.
#[derive(Debug, Clone, Default)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each character of `b`, minus popular characters
    b2j: HashMap<char, Vec<usize>>,
    b_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let mut matcher = Self::default();
        matcher.set_target(b);
        matcher.set_candidate(a);
        matcher
    }

    pub fn set_candidate(&mut self, a: &str) {
        self.a = a.chars().collect();
    }

    pub fn set_target(&mut self, b: &str) {
        self.b = b.chars().collect();
        self.b2j.clear();
        self.b_counts.clear();

        for (j, &c) in self.b.iter().enumerate() {
            self.b2j.entry(c).or_default().push(j);
            *self.b_counts.entry(c).or_default() += 1;
        }

        let n = self.b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let limit = n / 100 + 1;
            self.b2j.retain(|_, positions| positions.len() <= limit);
        }
    }

    /// Longest block of equal characters within `a[alo..ahi]` and `b[blo..bhi]`
    ///
    /// Among blocks of equal size, the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len = HashMap::new();

            if let Some(positions) = self.b2j.get(&self.a[i]) {
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
                    new_j2len.insert(j, k);

                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }

            j2len = new_j2len;
        }

        // Popular characters never seed a match, but may still extend one
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Block {
            i: best_i,
            j: best_j,
            size: best_size,
        }
    }

    /// Non-overlapping matching blocks in increasing order
    pub fn matching_blocks(&self) -> Vec<Block> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }

            if alo < block.i && blo < block.j {
                queue.push((alo, block.i, blo, block.j));
            }
            if block.i + block.size < ahi && block.j + block.size < bhi {
                queue.push((block.i + block.size, ahi, block.j + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort();
        blocks
    }

    /// Similarity in `[0, 1]`; two empty strings are identical
    pub fn ratio(&self) -> f64 {
        let matches = self.matching_blocks().iter().map(|b| b.size).sum();
        self.scaled(matches)
    }

    /// Upper bound on [`ratio`](Self::ratio) from shared character counts
    pub fn quick_ratio(&self) -> f64 {
        let mut available: HashMap<char, isize> = HashMap::new();
        let mut matches = 0;

        for c in &self.a {
            let remaining = available
                .entry(*c)
                .or_insert_with(|| self.b_counts.get(c).copied().unwrap_or(0) as isize);
            if *remaining > 0 {
                matches += 1;
            }
            *remaining -= 1;
        }

        self.scaled(matches)
    }

    /// Upper bound on [`ratio`](Self::ratio) from the lengths alone
    pub fn real_quick_ratio(&self) -> f64 {
        self.scaled(self.a.len().min(self.b.len()))
    }

    fn scaled(&self, matches: usize) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            1.0
        } else {
            2.0 * matches as f64 / total as f64
        }
    }
}

/// Converts a 0-100 similarity threshold into a ratio cutoff
pub fn threshold_cutoff(threshold: i64) -> DbResult<f64> {
    if !(0..=100).contains(&threshold) {
        return Err(DbError::InvalidArgument(format!(
            "threshold must be between 0 and 100, got {threshold}"
        )));
    }

    Ok(threshold as f64 / 100.0)
}

/// Returns up to `n` candidates whose similarity to `word` is at least
/// `cutoff`, best first
///
/// Candidates with equal scores are ranked in reverse lexicographic order.
pub fn close_matches<'a>(
    word: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    n: usize,
    cutoff: f64,
) -> DbResult<Vec<&'a str>> {
    if n == 0 {
        return Err(DbError::InvalidArgument(
            "number of matches must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&cutoff) {
        return Err(DbError::InvalidArgument(format!(
            "cutoff must be within [0.0, 1.0], got {cutoff}"
        )));
    }

    let mut matcher = SequenceMatcher::default();
    matcher.set_target(word);

    let mut scored: Vec<(f64, &str)> = Vec::new();
    for candidate in candidates {
        matcher.set_candidate(candidate);
        if matcher.real_quick_ratio() >= cutoff && matcher.quick_ratio() >= cutoff {
            let score = matcher.ratio();
            if score >= cutoff {
                scored.push((score, candidate));
            }
        }
    }

    scored.sort_by(|x, y| match y.0.total_cmp(&x.0) {
        Ordering::Equal => y.1.cmp(x.1),
        other => other,
    });
    scored.truncate(n);

    Ok(scored.into_iter().map(|(_, candidate)| candidate).collect())
}
