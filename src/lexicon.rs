//! # Valence Lexicon
//! Word → valence table backing the polarity scorer and the token highlighter.
//!
//! - Embedded table (`sentiment_lexicon.json`) compiled into the binary.
//! - Optional override file (same JSON shape) merged on top at startup.
//! - Keys are lowercase; valences are clamped to `[-4.0, 4.0]`.
//! - Unknown words have valence `0.0`.

use once_cell::sync::Lazy;
use std::{collections::HashMap, fs, path::Path, sync::Arc};
use tracing::info;

/// Lowest/highest valence a lexicon entry may carry.
pub const VALENCE_MIN: f64 = -4.0;
pub const VALENCE_MAX: f64 = 4.0;

pub(crate) const EMBEDDED_JSON: &str = include_str!("../sentiment_lexicon.json");

static EMBEDDED: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    Arc::new(Lexicon::from_json_str(EMBEDDED_JSON).expect("valid sentiment lexicon"))
});

/// Read-only valence table. Cheap to share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Shared handle to the compiled-in table.
    pub fn embedded() -> Arc<Lexicon> {
        EMBEDDED.clone()
    }

    /// Parse a `{"word": valence, ...}` JSON object.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let map: HashMap<String, f64> = serde_json::from_str(raw)?;
        let mut lex = Self::default();
        lex.extend(map)?;
        Ok(lex)
    }

    /// Embedded table with the entries of `path` merged on top (file wins).
    pub fn with_overrides<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read lexicon overrides at {}: {}", path.display(), e)
        })?;
        let extra: HashMap<String, f64> = serde_json::from_str(&content)?;
        let mut lex = (*Self::embedded()).clone();
        let n = extra.len();
        lex.extend(extra)?;
        info!(target: "lexicon", path = %path.display(), entries = n, "lexicon overrides merged");
        Ok(lex)
    }

    fn extend(&mut self, map: HashMap<String, f64>) -> anyhow::Result<()> {
        for (word, v) in map {
            if !v.is_finite() {
                anyhow::bail!("non-finite valence for lexicon entry '{word}'");
            }
            let key = word.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            self.entries.insert(key, v.clamp(VALENCE_MIN, VALENCE_MAX));
        }
        Ok(())
    }

    /// Valence of an already-lowercased word, `None` when absent.
    #[inline]
    pub fn get(&self, lower: &str) -> Option<f64> {
        self.entries.get(lower).copied()
    }

    /// Valence of a word (case-insensitive), `0.0` when absent.
    #[inline]
    pub fn valence(&self, word: &str) -> f64 {
        match self.entries.get(word) {
            Some(v) => *v,
            None => self.get(&word.to_lowercase()).unwrap_or(0.0),
        }
    }

    #[inline]
    pub fn contains(&self, lower: &str) -> bool {
        self.entries.contains_key(lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
