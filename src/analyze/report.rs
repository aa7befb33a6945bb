//! Report data model: the JSON shape consumed by the UI.

use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Polarity label for a document or a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

/// Magnitude tier over `|compound|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    #[serde(rename = "Very strong")]
    VeryStrong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very strong",
        }
    }
}

/// How much of the text carries identifiable sentiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clarity {
    Ambiguous,
    Moderate,
    Clear,
}

/// Display category of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
}

/// Scores of one non-empty sentence, rounded to 4 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub text: String,
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub label: Label,
}

/// One raw token annotated for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedToken {
    /// Original case.
    pub word: String,
    pub category: Category,
    pub score: f64,
    pub negated: bool,
}

/// A sentiment-bearing word and its lexicon score (3 decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
}

/// Occurrence count of a content word. Serialized as a `[word, count]` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    pub word: String,
    pub count: usize,
}

impl Serialize for WordStat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.word)?;
        t.serialize_element(&self.count)?;
        t.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TextStats {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
}

/// The full sentiment report for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub label: Label,
    pub strength: Strength,
    pub summary: String,
    pub text_stats: TextStats,
    pub sentiment_clarity: Clarity,
    pub sentence_sentiments: Vec<SentenceScore>,
    pub score_descriptions: BTreeMap<&'static str, &'static str>,
    pub top_positive_words: Vec<WordScore>,
    pub top_negative_words: Vec<WordScore>,
    pub preprocessed_text: String,
    pub word_stats: Vec<WordStat>,
    pub highlighted_tokens: Vec<HighlightedToken>,
}

pub const EMPTY_SUMMARY: &str = "No text to analyze.";

impl AnalysisReport {
    /// Canonical report for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self {
            compound: 0.0,
            pos: 0.0,
            neg: 0.0,
            neu: 1.0,
            label: Label::Neutral,
            strength: Strength::Weak,
            summary: EMPTY_SUMMARY.to_string(),
            text_stats: TextStats::default(),
            sentiment_clarity: Clarity::Ambiguous,
            sentence_sentiments: Vec::new(),
            score_descriptions: BTreeMap::new(),
            top_positive_words: Vec::new(),
            top_negative_words: Vec::new(),
            preprocessed_text: String::new(),
            word_stats: Vec::new(),
            highlighted_tokens: Vec::new(),
        }
    }
}

/// Tooltip text for each score field.
pub fn score_descriptions() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("pos", "Proportion of text that is positive (0–1)."),
        ("neg", "Proportion of text that is negative (0–1)."),
        ("neu", "Proportion of text that is neutral (0–1)."),
        (
            "compound",
            "Overall sentiment from -1 (most negative) to +1 (most positive).",
        ),
    ])
}

/// Round half away from zero to `places` decimals.
pub(crate) fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}
