// src/similarity/mod.rs
//! String similarity scoring.
//!
//! Scores are integers in `0..=100`, higher meaning more alike. The default
//! metric is [`Ratio`], a normalized edit-distance ratio; anything else can be
//! plugged in through the [`Similarity`] trait.

pub mod cache;

pub use cache::{CacheStats, PairKey, SimilarityCache};

/// Highest score a metric may return.
pub const MAX_SCORE: u8 = 100;

/// A symmetric-in-practice scoring function over two strings.
pub trait Similarity: Sync {
    /// Returns a score in `0..=100`.
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Normalized indel ratio: `round(100 * 2 * lcs / (len(a) + len(b)))`.
///
/// Equivalent to a Levenshtein distance where a substitution costs 2.
/// Lengths count `char`s, not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ratio;

impl Similarity for Ratio {
    fn score(&self, a: &str, b: &str) -> u8 {
        ratio(a, b)
    }
}

/// Adapter that lets a plain closure act as a metric.
#[derive(Debug, Clone, Copy)]
pub struct FnSimilarity<F>(pub F);

impl<F> Similarity for FnSimilarity<F>
where
    F: Fn(&str, &str) -> u8 + Sync,
{
    fn score(&self, a: &str, b: &str) -> u8 {
        (self.0)(a, b).min(MAX_SCORE)
    }
}

/// Scores two strings with the default metric.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return MAX_SCORE;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let lensum = a_chars.len() + b_chars.len();
    let matches = lcs_length(&a_chars, &b_chars);

    round_percent(2 * matches, lensum)
}

/// LCS length using two-row DP (space-optimised).
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let n = b.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.fill(0);
    }
    prev[n]
}

/// `100 * num / den` rounded half-to-even, in exact integer arithmetic.
fn round_percent(num: usize, den: usize) -> u8 {
    let scaled = num * 100;
    let q = scaled / den;
    let twice_rem = (scaled % den) * 2;
    let rounded = match twice_rem.cmp(&den) {
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q & 1),
        std::cmp::Ordering::Less => q,
    };
    u8::try_from(rounded.min(usize::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}
