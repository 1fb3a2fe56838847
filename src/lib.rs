//! # Leaf Colorscan
//!
//! A Rust crate for measuring the color composition of segmented plant images.
//!
//! This library reports, for an image whose background has been masked to
//! pure black:
//! - The share of foreground pixels falling in a yellow HSV range
//! - The share of foreground pixels falling in a green HSV range
//! - RGB channel and green/yellow brightness histograms, as plain data
//!
//! ## Example
//!
//! ```rust,no_run
//! use leaf_colorscan::{color_proportions, try_color_proportions};
//! use std::path::Path;
//!
//! // Never fails: unreadable files count as (0.0, 0.0)
//! let (yellow, green) = color_proportions(Path::new("leaf.png"));
//!
//! // Reports why a file could not be analyzed
//! let result = try_color_proportions(Path::new("leaf.png"))?;
//! println!("yellow {:.1}%, green {:.1}%", result.yellow * 100.0, result.green * 100.0);
//! # Ok::<(), leaf_colorscan::AnalysisError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod config;
pub mod image_loader;
pub mod color;
pub mod histogram;

pub use error::{AnalysisError, Result};
pub use config::{AnalysisConfig, HistogramConfig};
pub use color::{
    ColorClassificationConfig, ColorProportionAnalyzer, ColorProportions, ColorRange,
};

/// Fraction of yellow and green pixels among non-black pixels of an image
///
/// Uses the default proportion thresholds (yellow H 20-40, green H 40-80).
/// Any failure to load or process the image is logged as a warning and
/// yields `(0.0, 0.0)`, the same value an all-black image produces.
///
/// # Arguments
///
/// * `image_path` - Path to a JPEG, PNG, BMP or other decodable image
///
/// # Returns
///
/// `(yellow_fraction, green_fraction)`, each in `[0.0, 1.0]`
pub fn color_proportions(image_path: &Path) -> (f64, f64) {
    ColorProportionAnalyzer::new()
        .analyze_path(image_path)
        .as_tuple()
}

/// Like [`color_proportions`], but reports failures
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - Image cannot be opened or decoded
/// - Decoded pixel data is malformed
pub fn try_color_proportions(image_path: &Path) -> Result<ColorProportions> {
    ColorProportionAnalyzer::new().try_analyze_path(image_path)
}
