//! Stop-word-filtered keyword ranking.
//!
//! Top ten terms by frequency, ties broken by first appearance so the
//! ranking is stable for a given input.

use serde::{Deserialize, Serialize};

/// Words excluded from keyword ranking.
const STOP_WORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "because", "been", "but", "by", "can",
    "do", "for", "from", "has", "have", "in", "is", "it", "its", "of", "on", "or", "our", "so",
    "that", "the", "their", "them", "they", "this", "to", "was", "we", "were", "when", "which",
    "who", "will", "with", "you", "your",
];

/// Minimum word length considered for ranking.
const MIN_KEYWORD_LEN: usize = 3;

/// Maximum keywords returned per field.
const MAX_KEYWORDS: usize = 10;

/// A ranked keyword with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: u32,
}

/// Ranks the non-stop-word terms of a field by frequency.
pub fn rank_keywords(text: &str) -> Vec<Keyword> {
    let lower = text.to_lowercase();
    // (word, first_seen_index, count) accumulated in appearance order.
    let mut counts: Vec<(String, usize, u32)> = Vec::new();

    for (index, word) in lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(w))
        .enumerate()
    {
        if let Some(entry) = counts.iter_mut().find(|(w, _, _)| w == word) {
            entry.2 += 1;
        } else {
            counts.push((word.to_string(), index, 1));
        }
    }

    counts.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _, count)| Keyword { word, count })
        .collect()
}
