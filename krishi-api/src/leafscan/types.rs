//! Classifier data model
//!
//! Entities threaded between pipeline stages. All are created, consumed
//! and discarded within a single analysis call.

use super::AnalysisError;
use serde::{Deserialize, Serialize};

/// The closed set of disease labels the heuristic can produce.
///
/// `ALL` fixes the iteration order used for label selection; ties at the
/// top score resolve to the earlier entry. The order is a deterministic
/// tie-break, not a ranking of disease severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    EarlyBlight,
    Rust,
    LeafSpot,
    Healthy,
}

impl Disease {
    /// Stable iteration order for score tables
    pub const ALL: [Disease; 4] = [
        Disease::EarlyBlight,
        Disease::Rust,
        Disease::LeafSpot,
        Disease::Healthy,
    ];

    /// Wire label (snake_case, matching the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::EarlyBlight => "early_blight",
            Disease::Rust => "rust",
            Disease::LeafSpot => "leaf_spot",
            Disease::Healthy => "healthy",
        }
    }
}

/// Bucket counters accumulated by the pixel sampler.
///
/// Buckets are independent predicates, not a partition: one pixel may land
/// in several buckets, so `total` bounds each bucket but the buckets need
/// not sum to `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColorBucketCounts {
    /// Pixels visited (incremented exactly once per sampled pixel)
    pub total: u64,
    pub greenish: u64,
    pub yellowish: u64,
    pub brownish: u64,
    pub dark_lesion: u64,
}

impl ColorBucketCounts {
    /// Convert counts to ratios. Fails if no pixels were sampled, which
    /// guards the division and keeps the zero-pixel case out of scoring.
    pub fn ratios(&self) -> Result<ColorRatios, AnalysisError> {
        if self.total == 0 {
            return Err(AnalysisError::EmptyImage);
        }
        let total = self.total as f64;
        Ok(ColorRatios {
            green: self.greenish as f64 / total,
            yellow: self.yellowish as f64 / total,
            brown: self.brownish as f64 / total,
            dark: self.dark_lesion as f64 / total,
        })
    }
}

/// Per-bucket coverage ratios, each in [0, 1].
///
/// The ratios need not sum to 1 (see [`ColorBucketCounts`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRatios {
    #[serde(rename = "greenRatio")]
    pub green: f64,
    #[serde(rename = "yellowRatio")]
    pub yellow: f64,
    #[serde(rename = "brownRatio")]
    pub brown: f64,
    #[serde(rename = "darkRatio")]
    pub dark: f64,
}

impl ColorRatios {
    /// Display form: each ratio rounded to 3 decimal places
    pub fn rounded(&self) -> ColorRatios {
        ColorRatios {
            green: round3(self.green),
            yellow: round3(self.yellow),
            brown: round3(self.brown),
            dark: round3(self.dark),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Heuristic score per disease label.
///
/// Scores are unnormalized real values (unbounded sign and magnitude);
/// higher means stronger evidence, not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiseaseScores {
    pub early_blight: f64,
    pub rust: f64,
    pub leaf_spot: f64,
    pub healthy: f64,
}

impl DiseaseScores {
    /// Entries in the stable [`Disease::ALL`] order
    pub fn entries(&self) -> [(Disease, f64); 4] {
        [
            (Disease::EarlyBlight, self.early_blight),
            (Disease::Rust, self.rust),
            (Disease::LeafSpot, self.leaf_spot),
            (Disease::Healthy, self.healthy),
        ]
    }
}

/// Final classifier output for one image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: Disease,
    /// Clamped to [0.1, 0.95], or exactly 0.6 when all scores tie
    pub confidence: f64,
    /// Display-rounded bucket ratios
    pub metrics: ColorRatios,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disease_wire_labels() {
        assert_eq!(Disease::EarlyBlight.as_str(), "early_blight");
        assert_eq!(
            serde_json::to_string(&Disease::LeafSpot).unwrap(),
            "\"leaf_spot\""
        );
    }

    #[test]
    fn test_ratios_require_nonzero_total() {
        let counts = ColorBucketCounts::default();
        assert!(counts.ratios().is_err());
    }

    #[test]
    fn test_ratios_division() {
        let counts = ColorBucketCounts {
            total: 4,
            greenish: 2,
            yellowish: 1,
            brownish: 0,
            dark_lesion: 4,
        };
        let ratios = counts.ratios().unwrap();
        assert_eq!(ratios.green, 0.5);
        assert_eq!(ratios.yellow, 0.25);
        assert_eq!(ratios.brown, 0.0);
        assert_eq!(ratios.dark, 1.0);
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let ratios = ColorRatios {
            green: 0.123456,
            yellow: 0.9996,
            brown: 0.0004,
            dark: 1.0 / 3.0,
        };
        let rounded = ratios.rounded();
        assert_eq!(rounded.green, 0.123);
        assert_eq!(rounded.yellow, 1.0);
        assert_eq!(rounded.brown, 0.0);
        assert_eq!(rounded.dark, 0.333);
    }

    #[test]
    fn test_metrics_serialize_with_ratio_keys() {
        let ratios = ColorRatios {
            green: 0.5,
            yellow: 0.25,
            brown: 0.0,
            dark: 0.125,
        };
        let json = serde_json::to_value(ratios).unwrap();
        assert_eq!(json["greenRatio"], 0.5);
        assert_eq!(json["darkRatio"], 0.125);
    }
}
