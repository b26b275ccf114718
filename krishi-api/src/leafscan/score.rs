//! Score aggregation, label selection and confidence normalization
//!
//! The per-disease scores are fixed, interpretable linear combinations of
//! the bucket ratios, not learned weights. Reproducibility depends on the
//! exact constants and strict comparison boundaries below.

use super::types::{ColorRatios, Disease, DiseaseScores};

/// Guards the confidence division when max and min scores nearly cancel
const SCORE_EPSILON: f64 = 1e-6;
/// Lower clamp on non-degenerate confidence
const CONFIDENCE_FLOOR: f64 = 0.1;
/// Upper clamp on non-degenerate confidence
const CONFIDENCE_CEILING: f64 = 0.95;
/// Fixed confidence when all four scores are identical
const DEGENERATE_CONFIDENCE: f64 = 0.6;

/// Compute the four disease scores from bucket ratios.
pub fn aggregate(ratios: &ColorRatios) -> DiseaseScores {
    let ColorRatios {
        green,
        yellow,
        brown,
        dark,
    } = *ratios;

    DiseaseScores {
        // dark lesions plus penalty for reduced green coverage
        early_blight: 1.2 * dark + (0.4 - green).max(0.0),
        // brownish patches, small bonus at moderate green coverage
        rust: 1.0 * brown + if green > 0.3 && green < 0.7 { 0.1 } else { 0.0 },
        // yellow areas, small bonus when green is still present
        leaf_spot: 1.1 * yellow + if green > 0.3 { 0.05 } else { 0.0 },
        // high green coverage, discounted by everything else
        healthy: green - 0.5 * (yellow + brown + dark),
    }
}

/// Pick the winning label and its confidence.
///
/// The winner is the maximum score, with ties resolved to the earlier
/// entry in [`Disease::ALL`] order. Confidence measures how dominant the
/// winner is over the full score spread: when all four scores are
/// identical it is fixed at the degenerate 0.6, otherwise it is
/// `(best - min) / (|max| + |min| + epsilon)` clamped to [0.1, 0.95].
pub fn select(scores: &DiseaseScores) -> (Disease, f64) {
    let entries = scores.entries();

    let (mut best_label, mut max_score) = entries[0];
    let mut min_score = entries[0].1;
    for &(label, score) in &entries[1..] {
        if score > max_score {
            max_score = score;
            best_label = label;
        }
        if score < min_score {
            min_score = score;
        }
    }

    let confidence = if max_score == min_score {
        DEGENERATE_CONFIDENCE
    } else {
        let spread = max_score.abs() + min_score.abs() + SCORE_EPSILON;
        ((max_score - min_score) / spread).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    };

    (best_label, confidence)
}
