//! Linguistic helpers consumed by the analysis core: tokenizer, sentence
//! segmenter, stopwords, lemmatizer, plus the cosmetic `preprocess_text`.

pub mod lemma;
pub mod segment;
pub mod stopwords;
pub mod tokenize;

pub use lemma::lemmatize;
pub use segment::segment_sentences;
pub use stopwords::is_stopword;
pub use tokenize::{tokenize, tokenize_lower, RawToken};

/// ASCII punctuation characters, in code-point order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// True when `token` is a run of the punctuation string (`"!"`, `"."`, `"()"`, ...).
/// Tokens like `"..."` or `"n't"` are not.
pub fn is_punctuation(token: &str) -> bool {
    PUNCTUATION.contains(token)
}

/// Lowercase → tokenize → drop stopwords and punctuation → lemmatize → join with spaces.
pub fn preprocess_text(text: &str) -> String {
    tokenize_lower(text)
        .into_iter()
        .filter(|w| !is_stopword(w) && !is_punctuation(w))
        .map(|w| lemmatize(&w))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn warm_up() -> usize {
    stopwords::warm_up() + tokenize("warm up").len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_tokens() {
        assert!(is_punctuation("."));
        assert!(is_punctuation("!"));
        assert!(is_punctuation("'"));
        assert!(!is_punctuation("word"));
        assert!(!is_punctuation("n't"));
        assert!(!is_punctuation("..."));
    }

    #[test]
    fn preprocess_drops_stopwords_and_lemmatizes() {
        assert_eq!(
            preprocess_text("The books are on the tables!"),
            "book table"
        );
    }

    #[test]
    fn preprocess_of_blank_text_is_empty() {
        assert_eq!(preprocess_text("   "), "");
    }
}
