//! Leaf image disease classifier
//!
//! Heuristic, model-free classification of leaf photographs. The pipeline is
//! four pure stages run synchronously per request:
//!
//! 1. [`normalize`] - decode the uploaded bytes, strip alpha, resize to a
//!    fixed analysis width preserving aspect ratio
//! 2. [`sample`] - walk the raster at a stride bounded by a fixed sample
//!    budget, counting coarse color buckets
//! 3. [`score`] - turn bucket ratios into per-disease heuristic scores
//! 4. label selection and confidence normalization (also in [`score`])
//!
//! No state outlives a single [`analyze`] call, so concurrent request
//! handlers may invoke the classifier freely.

pub mod config;
pub mod normalize;
pub mod sample;
pub mod score;
pub mod types;

pub use config::HeuristicConfig;
pub use types::{ClassificationResult, ColorBucketCounts, ColorRatios, Disease, DiseaseScores};

use thiserror::Error;

/// Failures internal to the analysis pipeline.
///
/// Callers at the HTTP boundary convert these into the degraded "unknown"
/// classification rather than a request-level fault.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Input bytes are not a supported image format, or are truncated/corrupt
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// Image has zero pixels after normalization
    #[error("image contains no pixels")]
    EmptyImage,
}

/// Run the full classification pipeline on one encoded image buffer.
///
/// Confidence is rounded to 2 decimals and the color ratios to 3 decimals
/// for display; the label decision itself uses unrounded scores.
pub fn analyze(buffer: &[u8], cfg: &HeuristicConfig) -> Result<ClassificationResult, AnalysisError> {
    let plane = normalize::normalize(buffer, cfg.analysis_width)?;
    let counts = sample::sample(&plane, cfg)?;
    let ratios = counts.ratios()?;
    let scores = score::aggregate(&ratios);
    let (label, confidence) = score::select(&scores);

    Ok(ClassificationResult {
        label,
        confidence: round2(confidence),
        metrics: ratios.rounded(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
