//! Word frequency over content tokens.

use std::collections::HashMap;

use super::report::WordStat;
use crate::text::{is_punctuation, is_stopword};

/// Lowercase tokens minus punctuation and stopwords, in text order.
pub fn content_words<'a>(lower_tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lower_tokens
        .into_iter()
        .filter(|w| !is_punctuation(w) && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Count every distinct word. Descending count; ties keep first-seen order.
pub fn word_stats(words: &[String]) -> Vec<WordStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<WordStat> = Vec::new();
    for w in words {
        match index.get(w.as_str()) {
            Some(&i) => stats[i].count += 1,
            None => {
                index.insert(w.as_str(), stats.len());
                stats.push(WordStat {
                    word: w.clone(),
                    count: 1,
                });
            }
        }
    }
    // sort_by is stable
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
