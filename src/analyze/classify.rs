//! Tiered classification: label, strength and clarity from document scores.
//! Pure functions, no state.

use super::report::{Category, Clarity, Label, Strength};

/// `compound` at or beyond ±0.05 is polar.
pub const POLARITY_THRESHOLD: f64 = 0.05;

pub fn label(compound: f64) -> Label {
    if compound >= POLARITY_THRESHOLD {
        Label::Positive
    } else if compound <= -POLARITY_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// Same thresholds as [`label`], applied to a word valence.
pub fn category(score: f64) -> Category {
    if score >= POLARITY_THRESHOLD {
        Category::Positive
    } else if score <= -POLARITY_THRESHOLD {
        Category::Negative
    } else {
        Category::Neutral
    }
}

/// Tiers over `|compound|`: [0, 0.2) [0.2, 0.5) [0.5, 0.7) [0.7, 1].
pub fn strength(compound: f64) -> Strength {
    let a = compound.abs();
    if a >= 0.7 {
        Strength::VeryStrong
    } else if a >= 0.5 {
        Strength::Strong
    } else if a >= 0.2 {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}

/// First matching branch wins: ambiguous, then moderate, then clear.
pub fn clarity(compound: f64, neu: f64) -> Clarity {
    if neu >= 0.75 {
        Clarity::Ambiguous
    } else if neu >= 0.5 || compound.abs() < 0.2 {
        Clarity::Moderate
    } else {
        Clarity::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_boundaries_are_inclusive() {
        assert_eq!(label(0.05), Label::Positive);
        assert_eq!(label(-0.05), Label::Negative);
        assert_eq!(label(0.0499), Label::Neutral);
        assert_eq!(label(-0.0499), Label::Neutral);
        assert_eq!(label(1.0), Label::Positive);
        assert_eq!(label(-1.0), Label::Negative);
    }

    #[test]
    fn category_matches_label_thresholds() {
        assert_eq!(category(0.05), Category::Positive);
        assert_eq!(category(-0.05), Category::Negative);
        assert_eq!(category(0.0), Category::Neutral);
        assert_eq!(category(3.2), Category::Positive);
    }

    #[test]
    fn strength_tiers_partition_without_gaps() {
        assert_eq!(strength(0.0), Strength::Weak);
        assert_eq!(strength(0.1999), Strength::Weak);
        assert_eq!(strength(0.2), Strength::Moderate);
        assert_eq!(strength(0.4999), Strength::Moderate);
        assert_eq!(strength(0.5), Strength::Strong);
        assert_eq!(strength(-0.5), Strength::Strong);
        assert_eq!(strength(0.6999), Strength::Strong);
        assert_eq!(strength(0.7), Strength::VeryStrong);
        assert_eq!(strength(-1.0), Strength::VeryStrong);
    }

    #[test]
    fn clarity_first_branch_wins() {
        // high neutrality beats everything
        assert_eq!(clarity(0.9, 0.75), Clarity::Ambiguous);
        assert_eq!(clarity(0.9, 0.5), Clarity::Moderate);
        // weak compound is moderate even when neu is low
        assert_eq!(clarity(0.19, 0.1), Clarity::Moderate);
        assert_eq!(clarity(-0.8, 0.3), Clarity::Clear);
        assert_eq!(clarity(0.2, 0.4999), Clarity::Clear);
    }
}
