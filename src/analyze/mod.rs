// src/analyze/mod.rs
//! Analysis pipeline entry: turns raw text into an [`AnalysisReport`].
//!
//! Order:
//! 1) trim; blank input → canonical empty report (no scorer call)
//! 2) whole-document polarity scores
//! 3) sentence breakdown (+ mixed-label detection)
//! 4) token highlighting with negation flags, top positive/negative words
//! 5) content-word frequencies
//! 6) label / strength / clarity tiers and summary line
//! 7) text statistics, optional preprocessed text, tooltip descriptions

pub mod classify;
pub mod frequency;
pub mod highlight;
pub mod negation;
pub mod report;
pub mod sentences;
pub mod summary;

use tracing::{debug, info};

pub use crate::analyze::report::{
    AnalysisReport, Category, Clarity, HighlightedToken, Label, SentenceScore, Strength,
    TextStats, WordScore, WordStat,
};
pub use crate::analyze::sentences::SentenceBreakdown;

use crate::logging::anon_hash;
use crate::scorer::{PolarityScorer, Vader};
use crate::text::{self, is_punctuation};

/// Knobs that do not affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Compute the cosmetic `preprocessed_text` field.
    pub include_preprocessed: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            include_preprocessed: true,
        }
    }
}

/// Stateless report builder over a shared, read-only scorer.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<S = Vader> {
    scorer: S,
    options: AnalyzerOptions,
}

impl SentimentAnalyzer<Vader> {
    /// Analyzer over the embedded lexicon.
    pub fn new() -> Self {
        Self::with_scorer(Vader::new())
    }
}

impl Default for SentimentAnalyzer<Vader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PolarityScorer> SentimentAnalyzer<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn options(mut self, options: AnalyzerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Build the full report for `text`. A scorer failure aborts the whole
    /// call; no partial report is returned.
    pub fn analyze(&self, text: &str) -> anyhow::Result<AnalysisReport> {
        let text = text.trim();
        if text.is_empty() {
            debug!(target: "analyze", "blank input, returning empty report");
            return Ok(AnalysisReport::empty());
        }
        let id = anon_hash(text);

        // (2) whole document, raw text so punctuation/caps still count
        let doc = self.scorer.polarity_scores(text)?;

        // (3) sentences
        let breakdown = sentences::score_sentences(text, &self.scorer)?;
        debug!(
            target: "analyze",
            %id,
            sentences = breakdown.sentences.len(),
            mixed = breakdown.is_mixed(),
            "sentences scored"
        );

        // (4) highlighting over raw (case-preserving) tokens
        let tokens = text::tokenize(text);
        let highlighted = highlight::highlight_tokens(&tokens, &self.scorer);
        let top_positive_words = highlight::top_positive_words(&highlighted);
        let top_negative_words = highlight::top_negative_words(&highlighted);

        // (5) frequencies
        let content = frequency::content_words(tokens.iter().map(|t| t.lowercase.as_str()));
        let word_stats = frequency::word_stats(&content);

        // (6) tiers + summary
        let label = classify::label(doc.compound);
        let strength = classify::strength(doc.compound);
        let clarity = classify::clarity(doc.compound, doc.neu);
        let summary = summary::summarize(label, strength, breakdown.is_mixed());

        // (7) stats
        let text_stats = TextStats {
            word_count: tokens.iter().filter(|t| !is_punctuation(&t.text)).count(),
            sentence_count: breakdown.sentences.len(),
            char_count: text.chars().count(),
        };
        let preprocessed_text = if self.options.include_preprocessed {
            text::preprocess_text(text)
        } else {
            String::new()
        };

        info!(
            target: "analyze",
            %id,
            chars = text_stats.char_count,
            words = text_stats.word_count,
            label = label.as_str(),
            compound = doc.compound,
            "analysis complete"
        );

        Ok(AnalysisReport {
            compound: doc.compound,
            pos: doc.pos,
            neg: doc.neg,
            neu: doc.neu,
            label,
            strength,
            summary,
            text_stats,
            sentiment_clarity: clarity,
            sentence_sentiments: breakdown.sentences,
            score_descriptions: report::score_descriptions(),
            top_positive_words,
            top_negative_words,
            preprocessed_text,
            word_stats,
            highlighted_tokens: highlighted,
        })
    }
}

pub(crate) fn warm_up() -> usize {
    negation::warm_up()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::PolarityScores;

    fn analyze(s: &str) -> AnalysisReport {
        SentimentAnalyzer::new().analyze(s).unwrap()
    }

    #[test]
    fn positive_example() {
        let r = analyze("I love this! It is amazing and wonderful.");
        assert_eq!(r.label, Label::Positive);
        assert!(r.pos > 0.0);
        assert_eq!(r.text_stats.sentence_count, 2);
        assert!(r.summary.starts_with("The text is "));
        assert!(r.summary.ends_with(" positive."));
    }

    #[test]
    fn negative_example() {
        let r = analyze("I hate this. It is terrible and awful.");
        assert_eq!(r.label, Label::Negative);
        assert!(r.neg > 0.0);
    }

    #[test]
    fn neutral_example() {
        let r = analyze("The book is on the table.");
        assert_eq!(r.label, Label::Neutral);
        assert_eq!(r.strength, Strength::Weak);
        assert_eq!(r.sentiment_clarity, Clarity::Ambiguous);
        assert_eq!(r.summary, "The text is weak neutral.");
    }

    #[test]
    fn negated_token_example() {
        let r = analyze("I am not happy.");
        let happy = r.highlighted_tokens.iter().find(|t| t.word == "happy").unwrap();
        assert!(happy.negated);
    }

    #[test]
    fn blank_input_is_canonical_empty_report() {
        assert_eq!(analyze(""), AnalysisReport::empty());
        assert_eq!(analyze("  \n\t "), AnalysisReport::empty());
    }

    #[test]
    fn text_stats_follow_tokens() {
        let r = analyze("  Good day. Bad night!  ");
        assert_eq!(r.text_stats.char_count, "Good day. Bad night!".len());
        assert_eq!(r.text_stats.word_count, 4);
        assert_eq!(r.text_stats.sentence_count, 2);
        assert_eq!(r.highlighted_tokens.len(), 6);
    }

    #[test]
    fn mixed_sentences_add_note_but_keep_document_label() {
        let r = analyze("I love this phone. The battery is terrible.");
        assert!(r.summary.contains("both positive and negative"));
        assert_eq!(r.label, classify::label(r.compound));
    }

    #[test]
    fn colon_glued_words_keep_their_own_polarity() {
        let r = analyze("Result:Disaster");
        let words: Vec<_> = r.highlighted_tokens.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["Result", ":", "Disaster"]);
        assert_eq!(r.highlighted_tokens[2].category, Category::Negative);
        assert!(r.top_positive_words.is_empty());

        let r = analyze("Reason:Poor service");
        let stats: Vec<_> = r.word_stats.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(stats, vec!["reason", "poor", "service"]);
        assert_eq!(r.top_negative_words[0].word, "Poor");
    }

    #[test]
    fn word_stats_count_content_words() {
        let r = analyze("Great food, great service. The food was great!");
        assert_eq!(r.word_stats[0].word, "great");
        assert_eq!(r.word_stats[0].count, 3);
        assert_eq!(r.word_stats[1].word, "food");
        assert_eq!(r.word_stats[1].count, 2);
    }

    #[test]
    fn preprocessed_text_can_be_disabled() {
        let on = analyze("The books are great");
        assert_eq!(on.preprocessed_text, "book great");
        let off = SentimentAnalyzer::new()
            .options(AnalyzerOptions {
                include_preprocessed: false,
            })
            .analyze("The books are great")
            .unwrap();
        assert!(off.preprocessed_text.is_empty());
        assert_eq!(off.compound, on.compound);
    }

    #[test]
    fn descriptions_are_attached() {
        let r = analyze("fine");
        assert_eq!(r.score_descriptions.len(), 4);
        assert!(r.score_descriptions.contains_key("compound"));
    }

    struct Broken;

    impl PolarityScorer for Broken {
        fn polarity_scores(&self, _text: &str) -> anyhow::Result<PolarityScores> {
            anyhow::bail!("lexicon unavailable")
        }
        fn valence(&self, _word: &str) -> f64 {
            0.0
        }
    }

    #[test]
    fn scorer_failure_fails_the_call() {
        let a = SentimentAnalyzer::with_scorer(Broken);
        assert!(a.analyze("anything at all").is_err());
        // blank input never reaches the scorer
        assert!(a.analyze("   ").is_ok());
    }
}
