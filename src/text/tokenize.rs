//! Word tokenizer.
//!
//! Case-preserving, treebank-flavoured: punctuation becomes its own token,
//! contractions are split (`don't` → `do` + `n't`, `I'm` → `I` + `'m`),
//! acronyms (`U.S.`), common abbreviations (`Mr.`) and numbers (`3.2`, `1,000`)
//! stay whole.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          \b(?i:mr|mrs|ms|dr|prof|sr|jr|st|vs|etc|inc|ltd|co)\.(?:\B|$)   # abbreviations
        | [A-Za-z]\.(?:[A-Za-z]\.)+                                     # acronyms: U.S.A.
        | \d+(?:[.,:]\d+)*\b                                            # numbers
        | \w+(?:[-'’]\w+)*                                              # words
        | \.\.\.                                                        # ellipsis
        | --                                                            # dash
        | [:;]-?[()]                                                    # emoticons
        | [:;]-?[DPp]\b                                                 # :D only when standalone
        | <3
        | \S                                                            # anything else
        ",
    )
    .expect("tokenizer regex")
});

/// A single token with its lowercase form and 0-based position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub lowercase: String,
    pub position: usize,
}

/// Tokenize `input`, preserving case.
pub fn tokenize(input: &str) -> Vec<RawToken> {
    let mut out: Vec<RawToken> = Vec::new();
    for m in TOKEN_RE.find_iter(input) {
        for piece in split_contraction(m.as_str()) {
            let position = out.len();
            out.push(RawToken {
                text: piece.to_string(),
                lowercase: piece.to_lowercase(),
                position,
            });
        }
    }
    out
}

/// Lowercase token strings (the filtering variant).
pub fn tokenize_lower(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| t.lowercase).collect()
}

/// Split clitics off a word token. Returns one or two slices of `word`.
fn split_contraction(word: &str) -> Vec<&str> {
    let lower = word.to_lowercase();
    if lower.len() != word.len() {
        return vec![word];
    }

    // n't / n’t
    for suffix in ["n't", "n’t"] {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            let cut = word.len() - suffix.len();
            return vec![&word[..cut], &word[cut..]];
        }
    }

    if lower == "cannot" {
        return vec![&word[..3], &word[3..]];
    }

    const CLITICS: [&str; 12] = [
        "'s", "'m", "'d", "'re", "'ve", "'ll", "’s", "’m", "’d", "’re", "’ve", "’ll",
    ];
    for suffix in CLITICS {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            let cut = word.len() - suffix.len();
            return vec![&word[..cut], &word[cut..]];
        }
    }

    vec![word]
}
