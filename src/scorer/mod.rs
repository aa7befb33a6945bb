//! # Polarity Scorer
//! Narrow interface to a sentiment intensity scorer, plus the bundled
//! lexicon + heuristics implementation ([`Vader`]).
//!
//! The analysis core only needs two things from a scorer:
//! - `polarity_scores(text)` → `{compound, pos, neg, neu}`
//! - `valence(word)` → raw lexicon rating (0 when unknown)

mod vader;

pub use vader::Vader;

use serde::Serialize;

/// Four-way polarity output for one unit of text.
///
/// `compound ∈ [-1, 1]`; `pos`, `neg`, `neu ∈ [0, 1]` and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityScores {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

impl PolarityScores {
    /// Scores of a text carrying no sentiment at all.
    pub const NEUTRAL: PolarityScores = PolarityScores {
        compound: 0.0,
        pos: 0.0,
        neg: 0.0,
        neu: 1.0,
    };

    /// Reject outputs that break the scorer contract.
    pub fn validate(self) -> anyhow::Result<Self> {
        let all = [self.compound, self.pos, self.neg, self.neu];
        if all.iter().any(|x| !x.is_finite()) {
            anyhow::bail!("scorer returned non-finite value: {self:?}");
        }
        if !(-1.0..=1.0).contains(&self.compound) {
            anyhow::bail!("scorer compound out of range: {}", self.compound);
        }
        if [self.pos, self.neg, self.neu]
            .iter()
            .any(|x| !(0.0..=1.0).contains(x))
        {
            anyhow::bail!("scorer proportion out of range: {self:?}");
        }
        Ok(self)
    }
}

/// A sentiment intensity scorer. Implementations are read-only after
/// construction and shared across concurrent analyses.
pub trait PolarityScorer: Send + Sync {
    /// Score raw text (case and punctuation preserved).
    fn polarity_scores(&self, text: &str) -> anyhow::Result<PolarityScores>;

    /// Lexicon valence of a single lowercase word, `0.0` when unknown.
    fn valence(&self, word: &str) -> f64;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for std::sync::Arc<T> {
    fn polarity_scores(&self, text: &str) -> anyhow::Result<PolarityScores> {
        (**self).polarity_scores(text)
    }

    fn valence(&self, word: &str) -> f64 {
        (**self).valence(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_valid() {
        assert!(PolarityScores::NEUTRAL.validate().is_ok());
    }

    #[test]
    fn out_of_range_compound_is_rejected() {
        let s = PolarityScores {
            compound: 1.5,
            ..PolarityScores::NEUTRAL
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn nan_is_rejected() {
        let s = PolarityScores {
            pos: f64::NAN,
            ..PolarityScores::NEUTRAL
        };
        assert!(s.validate().is_err());
    }
}
