//! One-line human-readable summary.

use super::report::{Label, Strength};

pub const MIXED_NOTE: &str = " The text contains both positive and negative parts.";

/// `"The text is {strength} {label}."`, plus a note when sentences disagree.
/// The headline always reflects the document score.
pub fn summarize(label: Label, strength: Strength, mixed: bool) -> String {
    let mut s = format!(
        "The text is {} {}.",
        strength.as_str().to_lowercase(),
        label.as_str().to_lowercase()
    );
    if mixed {
        s.push_str(MIXED_NOTE);
    }
    s
}
