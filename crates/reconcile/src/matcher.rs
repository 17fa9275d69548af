//! Fuzzy "same item" name matching.
//!
//! Untrusted action sources spell item names inconsistently (case,
//! near-duplicate spelling, abbreviation). The matcher resolves a candidate
//! name against the known inventory names with a deterministic tie-break
//! policy, so the same input always yields the same match.

use core::cmp::Ordering;

use chefbyte_core::normalize;

/// Acceptance threshold for [`NameMatcher`]: candidates scoring below this
/// are treated as distinct items.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Similarity between two names, case-insensitive.
///
/// Computed as `2·LCS(a, b) / (|a| + |b|)` over case-folded characters.
/// Symmetric, bounded in [0, 1], and returns 1.0 only for strings that are
/// identical after case folding.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = normalize(a).chars().collect();
    let b: Vec<char> = normalize(b).chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let lcs = lcs_len(&a, &b);
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        core::mem::swap(&mut prev, &mut cur);
        cur[0] = 0;
    }

    prev[b.len()]
}

/// Resolves a candidate item name against the set of known inventory names.
///
/// Pure function of its inputs; no side effects.
#[derive(Debug, Copy, Clone)]
pub struct NameMatcher {
    threshold: f64,
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl NameMatcher {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Best "same item" match for `candidate` among `known_names`, or `None`
    /// when nothing scores at or above the threshold.
    ///
    /// Tie-break among candidates above the threshold: exact case-insensitive
    /// equality first, then highest score, then the lexicographically
    /// smallest name.
    pub fn closest<'a, I>(&self, candidate: &str, known_names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let folded = normalize(candidate);
        let mut best: Option<Scored<'a>> = None;

        for name in known_names {
            let score = similarity(candidate, name);
            if score < self.threshold {
                continue;
            }

            let entry = Scored {
                name,
                score,
                exact: normalize(name) == folded,
            };

            best = Some(match best {
                None => entry,
                Some(current) => preferred(current, entry),
            });
        }

        best.map(|s| s.name)
    }
}

#[derive(Debug, Copy, Clone)]
struct Scored<'a> {
    name: &'a str,
    score: f64,
    exact: bool,
}

fn preferred<'a>(a: Scored<'a>, b: Scored<'a>) -> Scored<'a> {
    if a.exact != b.exact {
        return if a.exact { a } else { b };
    }
    match a.score.total_cmp(&b.score) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => {
            if a.name <= b.name {
                a
            } else {
                b
            }
        }
    }
}
