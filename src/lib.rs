// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod lexicon;
pub mod logging;
pub mod metrics;
pub mod scorer;
pub mod text;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    AnalysisReport, AnalyzerOptions, Category, Clarity, Label, SentimentAnalyzer, Strength,
};
pub use crate::api::router;
pub use crate::scorer::{PolarityScorer, PolarityScores, Vader};

use once_cell::sync::Lazy;
use tracing::info;

use crate::lexicon::Lexicon;

static DEFAULT_ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::new);

/// Load the embedded lexicon and word lists up front so the first request
/// does not pay for it. Safe to call more than once.
pub fn init() -> anyhow::Result<()> {
    // Validate before forcing the lazy table, which would panic on bad data.
    let parsed = Lexicon::from_json_str(lexicon::EMBEDDED_JSON)
        .map_err(|e| anyhow::anyhow!("embedded lexicon is invalid: {e}"))?;
    if parsed.is_empty() {
        anyhow::bail!("embedded lexicon is empty");
    }

    let lexicon = Lexicon::embedded();
    let words = text::warm_up() + analyze::warm_up();
    Lazy::force(&DEFAULT_ANALYZER);
    info!(lexicon_entries = lexicon.len(), word_lists = words, "sentiment resources loaded");
    Ok(())
}

/// Analyze with the default (embedded-lexicon) analyzer.
pub fn analyze(text: &str) -> anyhow::Result<AnalysisReport> {
    DEFAULT_ANALYZER.analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init().unwrap();
        init().unwrap();
    }

    #[test]
    fn top_level_analyze_uses_default_analyzer() {
        let report = analyze("I love this product!").unwrap();
        assert_eq!(report.label, Label::Positive);
        assert_eq!(analyze("   ").unwrap(), AnalysisReport::empty());
    }
}
