//! Image loading into BGR pixel grids
//!
//! This module provides a single entry point for decoding raster images
//! (JPEG, PNG, BMP, GIF, TIFF, WebP) through the `image` crate.
//!
//! ## Design
//!
//! Analysis works on a [`BgrImage`]: a tightly packed grid of 8-bit pixels in
//! B, G, R order, the layout OpenCV-style loaders hand out. The container is
//! sniffed from the file contents first and only falls back to the extension,
//! so a mislabelled PNG still decodes. Histogram helpers that want plain RGB
//! use [`load_rgb`] directly.

use crate::error::{AnalysisError, Result};
use image::{ImageReader, RgbImage};
use std::path::Path;

/// Decoded image in B, G, R channel order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BgrImage {
    /// Build from a packed RGB buffer, swapping to BGR order
    pub fn from_rgb_raw(width: u32, height: u32, rgb_data: &[u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if rgb_data.len() != expected {
            return Err(AnalysisError::ProcessingError(format!(
                "RGB buffer for {}x{} image must hold {} bytes, got {}",
                width,
                height,
                expected,
                rgb_data.len()
            )));
        }

        let data = rgb_data
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();

        Ok(Self { width, height, data })
    }

    /// Build from an `image` RGB buffer
    pub fn from_rgb_image(rgb: &RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        let data = rgb
            .pixels()
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the grid
    pub fn pixel_count(&self) -> usize {
        self.data.len() / 3
    }

    /// Pixel at (x, y) as `[b, g, r]`, or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate pixels in row-major order as `[b, g, r]`
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|px| [px[0], px[1], px[2]])
    }
}

/// Load an image from disk as an RGB buffer
///
/// Any color type the decoder produces (grayscale, alpha, 16-bit) is
/// converted to 8-bit RGB.
///
/// # Errors
///
/// Returns `AnalysisError::ImageLoadError` if:
/// - File cannot be opened
/// - Format is not recognized
/// - Decoding fails
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        AnalysisError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        AnalysisError::image_load(format!("Failed to read image header: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| {
        AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    log::trace!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}

/// Load an image from disk in BGR channel order
///
/// # Example
///
/// ```rust,no_run
/// use leaf_colorscan::image_loader::load_image;
/// use std::path::Path;
///
/// let img = load_image(Path::new("leaf.jpg"))?;
/// println!("Loaded image: {}x{}", img.width(), img.height());
/// # Ok::<(), leaf_colorscan::AnalysisError>(())
/// ```
pub fn load_image(path: &Path) -> Result<BgrImage> {
    let rgb = load_rgb(path)?;
    Ok(BgrImage::from_rgb_image(&rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_bgr_conversion() {
        // 2x2 image: red, green, blue, white
        let rgb_data = vec![
            255, 0, 0,
            0, 255, 0,
            0, 0, 255,
            255, 255, 255,
        ];

        let img = BgrImage::from_rgb_raw(2, 2, &rgb_data).unwrap();

        assert_eq!(img.pixel(0, 0), Some([0, 0, 255]));
        assert_eq!(img.pixel(1, 0), Some([0, 255, 0]));
        assert_eq!(img.pixel(0, 1), Some([255, 0, 0]));
        assert_eq!(img.pixel(1, 1), Some([255, 255, 255]));
        assert_eq!(img.pixel(2, 0), None);
        assert_eq!(img.pixel_count(), 4);
    }

    #[test]
    fn test_from_rgb_image_matches_raw() {
        let rgb = RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let from_image = BgrImage::from_rgb_image(&rgb);
        let from_raw = BgrImage::from_rgb_raw(3, 2, rgb.as_raw()).unwrap();
        assert_eq!(from_image, from_raw);
        assert_eq!(from_image.pixel(2, 1), Some([7, 20, 20]));
    }

    #[test]
    fn test_malformed_buffer_rejected() {
        let err = BgrImage::from_rgb_raw(2, 2, &[0; 11]).unwrap_err();
        assert!(matches!(err, AnalysisError::ProcessingError(_)));

        assert!(BgrImage::from_rgb_raw(1, 1, &[1, 2]).is_err());
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageLoadError { .. }));
    }
}
