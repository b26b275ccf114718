//! Pixel sampling stage
//!
//! Walks the normalized raster in row-major order at a stride derived from
//! a fixed sample budget, so the number of inspected pixels stays bounded
//! regardless of image resolution. Each visited pixel is tested against
//! four independent color-bucket predicates; a pixel may land in several
//! buckets or in none.

use super::config::HeuristicConfig;
use super::types::ColorBucketCounts;
use super::AnalysisError;
use image::RgbImage;

/// Stride between sampled pixels: `max(1, pixel_count / budget)`.
///
/// Images at or below the budget are sampled exhaustively (stride 1); the
/// stride grows (non-strictly) with pixel count above it.
pub fn sample_stride(pixel_count: usize, budget: u32) -> usize {
    (pixel_count / budget.max(1) as usize).max(1)
}

/// Sample the plane and accumulate color-bucket counts.
///
/// `total` is incremented exactly once per visited pixel, independent of
/// bucket membership. A zero-pixel plane is rejected here so downstream
/// ratio computation never divides by zero.
pub fn sample(plane: &RgbImage, cfg: &HeuristicConfig) -> Result<ColorBucketCounts, AnalysisError> {
    let pixel_count = plane.width() as usize * plane.height() as usize;
    if pixel_count == 0 {
        return Err(AnalysisError::EmptyImage);
    }

    let step = sample_stride(pixel_count, cfg.sample_budget);
    let data = plane.as_raw();
    let mut counts = ColorBucketCounts::default();

    for idx in (0..pixel_count).step_by(step) {
        let base = idx * 3;
        let (r, g, b) = (data[base], data[base + 1], data[base + 2]);
        counts.total += 1;

        if is_greenish(r, g, b, cfg) {
            counts.greenish += 1;
        }
        if is_yellowish(r, g, b, cfg) {
            counts.yellowish += 1;
        }
        if is_brownish(r, g, b, cfg) {
            counts.brownish += 1;
        }
        if is_dark_lesion(r, g, b, cfg) {
            counts.dark_lesion += 1;
        }
    }

    Ok(counts)
}

/// Green dominates both red and blue by more than the margin
fn is_greenish(r: u8, g: u8, b: u8, cfg: &HeuristicConfig) -> bool {
    let (r, g, b) = (r as i16, g as i16, b as i16);
    g > r + cfg.green_margin && g > b + cfg.green_margin
}

/// Red and green both high, blue low, red and green close together
fn is_yellowish(r: u8, g: u8, b: u8, cfg: &HeuristicConfig) -> bool {
    r > cfg.yellow_min_red
        && g > cfg.yellow_min_green
        && b < cfg.yellow_max_blue
        && (r as i16 - g as i16).abs() < cfg.yellow_max_channel_gap
}

/// Strict red > green > blue ordering with per-channel bounds
fn is_brownish(r: u8, g: u8, b: u8, cfg: &HeuristicConfig) -> bool {
    r > g && g > b && r > cfg.brown_min_red && g > cfg.brown_min_green && b < cfg.brown_max_blue
}

/// Low broadcast luminance and low green
fn is_dark_lesion(r: u8, g: u8, b: u8, cfg: &HeuristicConfig) -> bool {
    luminance(r, g, b) < cfg.dark_max_luminance && g < cfg.dark_max_green
}

/// Broadcast-luma brightness estimate (ITU-R BT.601 coefficients)
fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn cfg() -> HeuristicConfig {
        HeuristicConfig::default()
    }

    #[test]
    fn test_stride_one_at_or_below_budget() {
        assert_eq!(sample_stride(1, 40_000), 1);
        assert_eq!(sample_stride(39_999, 40_000), 1);
        assert_eq!(sample_stride(40_000, 40_000), 1);
    }

    #[test]
    fn test_stride_grows_above_budget() {
        assert_eq!(sample_stride(80_000, 40_000), 2);
        assert_eq!(sample_stride(80_001, 40_000), 2);
        assert_eq!(sample_stride(400_000, 40_000), 10);
    }

    #[test]
    fn test_stride_monotone_in_pixel_count() {
        let mut last = 0;
        for pixels in (0..1_000_000).step_by(7_919) {
            let stride = sample_stride(pixels.max(1), 40_000);
            assert!(stride >= last, "stride decreased at {pixels} pixels");
            last = stride;
        }
    }

    #[test]
    fn test_total_matches_visited_positions() {
        // 300x200 = 60000 pixels, stride 1 (60000/40000 = 1)
        let plane = RgbImage::from_pixel(300, 200, Rgb([0, 0, 0]));
        let counts = sample(&plane, &cfg()).unwrap();
        assert_eq!(counts.total, 60_000);

        // 400x300 = 120000 pixels, stride 3, ceil(120000/3) positions
        let plane = RgbImage::from_pixel(400, 300, Rgb([0, 0, 0]));
        let counts = sample(&plane, &cfg()).unwrap();
        assert_eq!(counts.total, 40_000);
    }

    #[test]
    fn test_single_pixel_plane_samples_once() {
        let plane = RgbImage::from_pixel(1, 1, Rgb([200, 10, 10]));
        let counts = sample(&plane, &cfg()).unwrap();
        assert_eq!(counts.total, 1);
    }

    #[test]
    fn test_buckets_never_exceed_total() {
        let plane = RgbImage::from_pixel(50, 50, Rgb([150, 130, 20]));
        let counts = sample(&plane, &cfg()).unwrap();
        assert!(counts.greenish <= counts.total);
        assert!(counts.yellowish <= counts.total);
        assert!(counts.brownish <= counts.total);
        assert!(counts.dark_lesion <= counts.total);
    }

    #[test]
    fn test_greenish_margin_is_strict() {
        let c = cfg();
        assert!(is_greenish(100, 116, 100, &c));
        // exactly +15 on either channel does not qualify
        assert!(!is_greenish(100, 115, 90, &c));
        assert!(!is_greenish(90, 115, 100, &c));
    }

    #[test]
    fn test_yellowish_boundaries() {
        let c = cfg();
        assert!(is_yellowish(150, 150, 50, &c));
        // boundary values are exclusive
        assert!(!is_yellowish(120, 150, 50, &c));
        assert!(!is_yellowish(150, 120, 50, &c));
        assert!(!is_yellowish(150, 150, 100, &c));
        // channel gap of exactly 40 fails
        assert!(!is_yellowish(180, 140, 50, &c));
        assert!(is_yellowish(179, 140, 50, &c));
    }

    #[test]
    fn test_brownish_requires_strict_ordering() {
        let c = cfg();
        assert!(is_brownish(150, 100, 50, &c));
        // red == green breaks the strict ordering
        assert!(!is_brownish(150, 150, 50, &c));
        // green == blue breaks it too
        assert!(!is_brownish(150, 50, 50, &c));
        assert!(!is_brownish(80, 60, 40, &c), "red at threshold fails");
        assert!(!is_brownish(150, 100, 80, &c), "blue at threshold fails");
    }

    #[test]
    fn test_dark_lesion_luminance_and_green_gates() {
        let c = cfg();
        assert!(is_dark_lesion(30, 30, 30, &c));
        // luminance below 40 but green too high
        assert!(!is_dark_lesion(0, 60, 0, &c));
        // green low but luminance too high
        assert!(!is_dark_lesion(200, 0, 0, &c));
    }

    #[test]
    fn test_one_pixel_can_land_in_multiple_buckets() {
        // red > green > blue with both channels bright enough for yellow
        let (r, g, b) = (160, 130, 60);
        let c = cfg();
        assert!(is_yellowish(r, g, b, &c));
        assert!(is_brownish(r, g, b, &c));
    }

    #[test]
    fn test_luminance_coefficients() {
        assert_eq!(luminance(255, 0, 0), 0.299 * 255.0);
        assert_eq!(luminance(0, 255, 0), 0.587 * 255.0);
        assert_eq!(luminance(0, 0, 255), 0.114 * 255.0);
    }
}
