//! Per-sentence scoring.

use std::collections::BTreeSet;

use super::classify::label;
use super::report::{round_to, Label, SentenceScore};
use crate::scorer::PolarityScorer;
use crate::text::segment_sentences;

/// Sentence breakdown plus the set of labels seen across sentences.
#[derive(Debug, Clone, Default)]
pub struct SentenceBreakdown {
    pub sentences: Vec<SentenceScore>,
    pub labels: BTreeSet<Label>,
}

impl SentenceBreakdown {
    /// Both polar labels occur somewhere in the text.
    pub fn is_mixed(&self) -> bool {
        self.labels.contains(&Label::Positive) && self.labels.contains(&Label::Negative)
    }
}

/// Segment `text`, score each non-empty sentence as written (case and
/// punctuation intact), round to 4 decimals.
pub fn score_sentences<S: PolarityScorer + ?Sized>(
    text: &str,
    scorer: &S,
) -> anyhow::Result<SentenceBreakdown> {
    let mut out = SentenceBreakdown::default();
    for raw in segment_sentences(text) {
        let sent = raw.trim();
        if sent.is_empty() {
            continue;
        }
        let s = scorer.polarity_scores(sent)?;
        let l = label(s.compound);
        out.labels.insert(l);
        out.sentences.push(SentenceScore {
            text: sent.to_string(),
            compound: round_to(s.compound, 4),
            pos: round_to(s.pos, 4),
            neg: round_to(s.neg, 4),
            neu: round_to(s.neu, 4),
            label: l,
        });
    }
    Ok(out)
}
