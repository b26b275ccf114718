//! Tuning constants for the leaf classifier
//!
//! Every threshold the pipeline uses lives here so the heuristic can be
//! tuned and tested without touching pipeline logic. Channel intensities
//! are 8-bit (0-255); margins are expressed in the same units.

/// Classifier tuning knobs with the production defaults.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicConfig {
    /// Width every image is resized to before sampling (height follows
    /// the source aspect ratio)
    pub analysis_width: u32,
    /// Upper bound on sampled pixels; the sampler derives its stride from
    /// this so very large images stay cheap to analyze
    pub sample_budget: u32,
    /// Greenish: green must exceed both red and blue by more than this
    pub green_margin: i16,
    /// Yellowish: minimum red intensity
    pub yellow_min_red: u8,
    /// Yellowish: minimum green intensity
    pub yellow_min_green: u8,
    /// Yellowish: blue must stay below this
    pub yellow_max_blue: u8,
    /// Yellowish: |red - green| must stay below this
    pub yellow_max_channel_gap: i16,
    /// Brownish: minimum red intensity (with red > green > blue ordering)
    pub brown_min_red: u8,
    /// Brownish: minimum green intensity
    pub brown_min_green: u8,
    /// Brownish: blue must stay below this
    pub brown_max_blue: u8,
    /// Dark lesion: broadcast luminance must stay below this
    pub dark_max_luminance: f64,
    /// Dark lesion: green must stay below this
    pub dark_max_green: u8,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            analysis_width: 256,
            sample_budget: 40_000,
            green_margin: 15,
            yellow_min_red: 120,
            yellow_min_green: 120,
            yellow_max_blue: 100,
            yellow_max_channel_gap: 40,
            brown_min_red: 80,
            brown_min_green: 40,
            brown_max_blue: 80,
            dark_max_luminance: 40.0,
            dark_max_green: 50,
        }
    }
}
