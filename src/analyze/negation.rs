//! One-token look-back negation flags for display.
//! Never feeds back into numeric scores.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::text::RawToken;

static NEGATION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "nowhere", "neither", "nor", "hardly",
        "barely", "scarcely", "seldom", "n't", "cannot", "can't", "won't", "wouldn't",
        "couldn't", "shouldn't", "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't",
        "didn't", "haven't", "hasn't", "hadn't", "without",
    ]
    .into_iter()
    .collect()
});

/// True when `lower` is a negator.
pub fn is_negation_word(lower: &str) -> bool {
    NEGATION_WORDS.contains(lower)
}

/// Flag per token: the token right before it is a negator.
/// The first token is never negated.
pub fn negation_flags(tokens: &[RawToken]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(tokens.len());
    if tokens.is_empty() {
        return flags;
    }
    flags.push(false);
    flags.extend(tokens.windows(2).map(|w| is_negation_word(&w[0].lowercase)));
    flags
}

pub(crate) fn warm_up() -> usize {
    NEGATION_WORDS.len()
}
