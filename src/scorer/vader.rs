//! Rule-based valence scorer in the VADER family.
//!
//! Per word: lexicon valence, adjusted by
//! - capitalization emphasis (ALL CAPS word in mixed-case text),
//! - up to three preceding booster/dampener words,
//! - negators within the three preceding words (`× -0.74`),
//! - "no"/"least" special cases.
//!
//! Per text: `but` shifts weight to the clause after it, `!`/`?` amplify,
//! and the sum is normalized to `compound = x / sqrt(x² + 15)`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::{PolarityScorer, PolarityScores};
use crate::lexicon::Lexicon;

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const ALPHA: f64 = 15.0;

static NEGATE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't",
        "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt",
        "havent", "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't",
        "isn't", "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor",
        "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
        "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont",
        "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
    ]
    .into_iter()
    .collect()
});

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = [
        "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
        "deeply", "effing", "enormously", "entirely", "especially", "exceptionally",
        "extremely", "fabulously", "flipping", "flippin", "fricking", "frickin", "frigging",
        "friggin", "fully", "fucking", "greatly", "hella", "highly", "hugely", "incredibly",
        "intensely", "majorly", "more", "most", "particularly", "purely", "quite", "really",
        "remarkably", "so", "substantially", "thoroughly", "totally", "tremendously", "uber",
        "unbelievably", "unusually", "utterly", "very",
    ];
    let decr = [
        "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little",
        "marginally", "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
        "sortof", "sort-of",
    ];
    incr.into_iter()
        .map(|w| (w, B_INCR))
        .chain(decr.into_iter().map(|w| (w, B_DECR)))
        .collect()
});

/// Lexicon-driven scorer; cheap to clone (the lexicon is shared).
#[derive(Debug, Clone)]
pub struct Vader {
    lexicon: Arc<Lexicon>,
}

impl Default for Vader {
    fn default() -> Self {
        Self::new()
    }
}

impl Vader {
    /// Scorer over the embedded lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::embedded())
    }

    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`. Text with no scorable words is fully neutral.
    pub fn score(&self, text: &str) -> PolarityScores {
        let words = words_and_emoticons(text);
        if words.is_empty() {
            return PolarityScores::NEUTRAL;
        }
        let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = is_cap_diff(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let lower = lowers[i].as_str();
            let kind_of = lower == "kind" && lowers.get(i + 1).is_some_and(|n| n == "of");
            if BOOSTERS.contains_key(lower) || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&words, &lowers, i, cap_diff));
        }

        but_check(&lowers, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(
        &self,
        words: &[&str],
        lowers: &[String],
        i: usize,
        cap_diff: bool,
    ) -> f64 {
        let Some(base) = self.lexicon.get(&lowers[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" as a determiner of a rated word is not itself negative
        if lowers[i] == "no" && lowers.get(i + 1).is_some_and(|n| self.lexicon.contains(n)) {
            valence = 0.0;
        }
        let no_before = (i > 0 && lowers[i - 1] == "no")
            || (i > 1 && lowers[i - 2] == "no")
            || (i > 2 && lowers[i - 3] == "no" && matches!(lowers[i - 1].as_str(), "or" | "nor"));
        if no_before {
            valence = base * N_SCALAR;
        }

        if cap_diff && is_upper(words[i]) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let prev = i - (start_i + 1);
            if self.lexicon.contains(&lowers[prev]) {
                continue;
            }
            let mut s = scalar_inc_dec(words[prev], &lowers[prev], valence, cap_diff);
            if start_i == 1 {
                s *= 0.95;
            } else if start_i == 2 {
                s *= 0.9;
            }
            valence += s;
            valence = negation_check(valence, lowers, start_i, i);
        }

        self.least_check(valence, lowers, i)
    }

    fn least_check(&self, valence: f64, lowers: &[String], i: usize) -> f64 {
        if i == 0 || lowers[i - 1] != "least" || self.lexicon.contains(&lowers[i - 1]) {
            return valence;
        }
        if i > 1 && matches!(lowers[i - 2].as_str(), "at" | "very") {
            return valence;
        }
        valence * N_SCALAR
    }
}

impl PolarityScorer for Vader {
    fn polarity_scores(&self, text: &str) -> anyhow::Result<PolarityScores> {
        self.score(text).validate()
    }

    fn valence(&self, word: &str) -> f64 {
        self.lexicon.valence(word)
    }
}

/// Whitespace split, surrounding punctuation stripped from words (kept on
/// short tokens so emoticons survive), single characters dropped.
fn words_and_emoticons(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|tok| {
            let stripped = tok.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                tok
            } else {
                stripped
            }
        })
        .filter(|w| w.chars().count() > 1)
        .collect()
}

fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Some, but not all, words are ALL CAPS.
fn is_cap_diff(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_upper(w)).count();
    caps > 0 && caps < words.len()
}

fn negated(lower: &str) -> bool {
    NEGATE.contains(lower) || lower.contains("n't")
}

fn scalar_inc_dec(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(&b) = BOOSTERS.get(lower) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -b } else { b };
    if cap_diff && is_upper(word) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

fn negation_check(valence: f64, lowers: &[String], start_i: usize, i: usize) -> f64 {
    let w = |k: usize| lowers[i - k].as_str();
    match start_i {
        0 if negated(w(1)) => valence * N_SCALAR,
        1 => {
            if w(2) == "never" && matches!(w(1), "so" | "this") {
                valence * 1.25
            } else if w(2) == "without" && w(1) == "doubt" {
                valence
            } else if negated(w(2)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if w(3) == "never" && (matches!(w(2), "so" | "this") || matches!(w(1), "so" | "this")) {
                valence * 1.25
            } else if w(3) == "without" && (w(2) == "doubt" || w(1) == "doubt") {
                valence
            } else if negated(w(3)) {
                valence * N_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// Words before "but" count half, words after it count one and a half.
fn but_check(lowers: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lowers.iter().position(|w| w == "but") else {
        return;
    };
    for (si, s) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *s *= 0.5;
        } else if si > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.matches('!').count().min(4) as f64 * 0.292;
    let qm = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0f64, 0.0f64, 0.0f64);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count;
    if total <= 0.0 {
        return PolarityScores::NEUTRAL;
    }
    PolarityScores {
        compound,
        pos: (pos_sum / total).abs(),
        neg: (neg_sum / total).abs(),
        neu: (neu_count / total).abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v() -> Vader {
        Vader::new()
    }

    fn sums_to_one(s: PolarityScores) -> bool {
        (s.pos + s.neg + s.neu - 1.0).abs() < 1e-9
    }

    #[test]
    fn positive_text() {
        let s = v().score("I love this! It is amazing and wonderful.");
        assert!(s.compound >= 0.05, "{s:?}");
        assert!(s.pos > 0.0);
        assert!(sums_to_one(s));
    }

    #[test]
    fn negative_text() {
        let s = v().score("I hate this. It is terrible and awful.");
        assert!(s.compound <= -0.05, "{s:?}");
        assert!(s.neg > 0.0);
        assert!(sums_to_one(s));
    }

    #[test]
    fn neutral_text() {
        let s = v().score("The book is on the table.");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neu, 1.0);
    }

    #[test]
    fn text_without_words_is_neutral() {
        assert_eq!(v().score("!"), PolarityScores::NEUTRAL);
        assert_eq!(v().score(""), PolarityScores::NEUTRAL);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = v().score("I am happy");
        let negated = v().score("I am not happy");
        assert!(plain.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn boosters_intensify() {
        let plain = v().score("The food is good");
        let boosted = v().score("The food is very good");
        assert!(boosted.compound > plain.compound);
    }

    #[test]
    fn dampeners_soften() {
        let plain = v().score("The food is good");
        let damped = v().score("The food is slightly good");
        assert!(damped.compound < plain.compound);
    }

    #[test]
    fn caps_emphasis_in_mixed_case_text() {
        let plain = v().score("The food is good");
        let shouted = v().score("The food is GOOD");
        assert!(shouted.compound > plain.compound);
    }

    #[test]
    fn exclamation_amplifies() {
        let plain = v().score("The food is good");
        let excited = v().score("The food is good!!!");
        assert!(excited.compound > plain.compound);
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = v().score("The food is good but the service is terrible");
        assert!(s.compound < 0.0, "{s:?}");
    }

    #[test]
    fn no_before_rated_word_is_neutralized() {
        // "no" alone is negative; as a determiner it only negates what follows
        let alone = v().score("no");
        assert!(alone.compound < 0.0);
        let s = v().score("there is no problem");
        assert!(s.compound > 0.0, "{s:?}");
    }

    #[test]
    fn compound_stays_in_range_for_long_text() {
        let text = "love ".repeat(200);
        let s = v().score(&text);
        assert!(s.compound <= 1.0 && s.compound > 0.9);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn valence_lookup_via_trait() {
        let vd = v();
        assert!(PolarityScorer::valence(&vd, "love") > 0.0);
        assert_eq!(PolarityScorer::valence(&vd, "table"), 0.0);
    }
}
