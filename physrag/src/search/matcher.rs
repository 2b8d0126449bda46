//! Longest-matching-blocks string similarity
//!
//! Implements the Ratcliff/Obershelp "gestalt" matcher: find the longest
//! common run of characters, then recurse on the pieces to its left and right.
//! The similarity ratio is `2 * M / T`, where `M` is the number of matched
//! characters and `T` the total length of both strings.
//!
//! Ranking compatibility depends on reproducing the exact matching blocks,
//! including the "autojunk" heuristic: when the second string is at least
//! [`AUTOJUNK_MIN_LEN`] characters long, characters that occur in it more than
//! `len / 100 + 1` times are not indexed. Runs can still grow across those
//! characters when a neighbouring match is extended.

use std::collections::HashMap;

/// Minimum length of the second sequence before popular characters are ignored
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A run of `size` equal characters starting at `a[a_start]` and `b[b_start]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Sequence matcher over the characters of two strings.
///
/// The second string is indexed once at construction; the first is scanned
/// against that index.
#[derive(Debug)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Build a matcher with the autojunk heuristic enabled.
    pub fn new(a: &str, b: &str) -> Self {
        Self::with_autojunk(a, b, true)
    }

    /// Build a matcher, choosing whether popular characters of `b` are ignored.
    pub fn with_autojunk(a: &str, b: &str, autojunk: bool) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among maximal blocks the one starting earliest in `a` wins, and of
    /// those the one starting earliest in `b`. A zero-sized result is anchored
    /// at `(alo, blo)` and may still be grown by the extension step.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0usize);

        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
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
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Grow the block over equal neighbours, including unindexed characters.
        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        MatchBlock {
            a_start: besti,
            b_start: bestj,
            size: bestsize,
        }
    }

    /// All non-overlapping matching blocks, ordered by position.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort();
        blocks
    }

    /// Similarity in `[0, 1]`; two empty strings are a perfect match.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matches: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matches as f64 / total as f64
    }
}

/// Similarity ratio of two strings as compared character by character.
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
