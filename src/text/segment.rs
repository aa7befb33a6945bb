//! Sentence segmenter.
//!
//! Uses Unicode sentence boundaries (UAX #29), then repairs splits that land
//! right after a known abbreviation ("Dr. Smith", "vs. them").

use unicode_segmentation::UnicodeSegmentation;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "e.g",
    "i.e", "approx", "dept", "fig", "gen", "gov", "lt", "mt", "sgt",
];

/// Split `text` into sentences. Returned slices borrow `text` and keep their
/// surrounding whitespace; callers trim.
pub fn segment_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0usize;

    for seg in text.split_sentence_bounds() {
        let seg_start = offset;
        offset += seg.len();
        let from = *start.get_or_insert(seg_start);

        if ends_with_abbreviation(seg) && offset < text.len() {
            // glue onto the next segment
            continue;
        }
        out.push(&text[from..offset]);
        start = None;
    }

    if let Some(from) = start {
        out.push(&text[from..]);
    }
    out
}

fn ends_with_abbreviation(seg: &str) -> bool {
    let trimmed = seg.trim_end();
    let Some(stem) = trimmed.strip_suffix('.') else {
        return false;
    };
    let last = stem
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or("")
        .to_lowercase();
    ABBREVIATIONS.contains(&last.as_str())
}
