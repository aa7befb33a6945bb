//! Token highlighting: lexicon category + negation flag per raw token, and
//! the top positive/negative word lists derived from it.

use super::classify::category;
use super::negation::negation_flags;
use super::report::{round_to, Category, HighlightedToken, WordScore};
use crate::scorer::PolarityScorer;
use crate::text::RawToken;

/// Length of each top-word list.
pub const TOP_WORDS: usize = 10;

/// Annotate every token, punctuation included, in order.
pub fn highlight_tokens<S: PolarityScorer + ?Sized>(
    tokens: &[RawToken],
    scorer: &S,
) -> Vec<HighlightedToken> {
    let flags = negation_flags(tokens);
    tokens
        .iter()
        .zip(flags)
        .map(|(tok, negated)| {
            let score = scorer.valence(&tok.lowercase);
            HighlightedToken {
                word: tok.text.clone(),
                category: category(score),
                score,
                negated,
            }
        })
        .collect()
}

/// Positive tokens by descending score; duplicates kept.
pub fn top_positive_words(tokens: &[HighlightedToken]) -> Vec<WordScore> {
    top_words(tokens, Category::Positive, |a, b| b.total_cmp(a))
}

/// Negative tokens, most negative first; duplicates kept.
pub fn top_negative_words(tokens: &[HighlightedToken]) -> Vec<WordScore> {
    top_words(tokens, Category::Negative, |a, b| a.total_cmp(b))
}

fn top_words(
    tokens: &[HighlightedToken],
    wanted: Category,
    order: impl Fn(&f64, &f64) -> std::cmp::Ordering,
) -> Vec<WordScore> {
    let mut out: Vec<WordScore> = tokens
        .iter()
        .filter(|t| t.category == wanted)
        .map(|t| WordScore {
            word: t.word.clone(),
            score: round_to(t.score, 3),
        })
        .collect();
    // stable: equal scores keep text order
    out.sort_by(|a, b| order(&a.score, &b.score));
    out.truncate(TOP_WORDS);
    out
}
