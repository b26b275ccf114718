//! Image normalization stage
//!
//! Decodes an arbitrary-format image buffer and produces the fixed-width
//! RGB raster the sampler walks. Any alpha channel is dropped during the
//! RGB8 conversion.

use super::AnalysisError;
use image::{imageops::FilterType, GenericImageView, RgbImage};

/// Decode, resize to `target_width` preserving aspect ratio, and strip alpha.
///
/// Sources narrower than the target are upsampled rather than rejected;
/// the classifier must not assume a minimum input resolution. The derived
/// height is rounded to the nearest pixel with a floor of 1.
pub fn normalize(buffer: &[u8], target_width: u32) -> Result<RgbImage, AnalysisError> {
    let decoded = image::load_from_memory(buffer)?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::EmptyImage);
    }

    let target_height =
        ((height as f64 * target_width as f64 / width as f64).round() as u32).max(1);
    let resized = decoded.resize_exact(target_width, target_height, FilterType::Triangle);

    Ok(resized.to_rgb8())
}
