//! Green/yellow proportion analysis
//!
//! Classifies pixels of an image into yellow and green HSV buckets and reports
//! each bucket's share of the non-background pixels:
//! - Background is pure black (all channels zero), as left by segmentation
//! - Both ratios share the non-background count as denominator
//! - An image with no foreground yields zero for both ratios
//!
//! [`ColorProportionAnalyzer::try_analyze_path`] reports load and processing
//! failures; [`ColorProportionAnalyzer::analyze_path`] logs them and returns
//! [`ColorProportions::neutral`] so a scan over many files keeps going.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::{
    color::{
        classification::{non_background_mask, ColorClassificationConfig},
        ColorConverter,
    },
    config::AnalysisConfig,
    image_loader::{load_image, BgrImage},
    Result,
};

/// Share of yellow and green pixels among non-background pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorProportions {
    /// Yellow pixels / non-background pixels (0.0-1.0)
    pub yellow: f64,
    /// Green pixels / non-background pixels (0.0-1.0)
    pub green: f64,
    /// Pixels with at least one non-zero channel
    pub non_background_pixels: usize,
    /// Non-background pixels inside the yellow range
    pub yellow_pixels: usize,
    /// Non-background pixels inside the green range
    pub green_pixels: usize,
}

impl ColorProportions {
    /// Result used for empty images and swallowed failures
    pub const fn neutral() -> Self {
        Self {
            yellow: 0.0,
            green: 0.0,
            non_background_pixels: 0,
            yellow_pixels: 0,
            green_pixels: 0,
        }
    }

    fn from_counts(non_background: usize, yellow: usize, green: usize) -> Self {
        if non_background == 0 {
            return Self::neutral();
        }
        let total = non_background as f64;
        Self {
            yellow: yellow as f64 / total,
            green: green as f64 / total,
            non_background_pixels: non_background,
            yellow_pixels: yellow,
            green_pixels: green,
        }
    }

    /// `(yellow, green)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.yellow, self.green)
    }

    /// True if no pixel was counted, whether from an empty image or a failure
    pub fn is_neutral(&self) -> bool {
        self.non_background_pixels == 0
    }
}

impl Default for ColorProportions {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Analyzer computing yellow/green proportions
#[derive(Debug, Clone)]
pub struct ColorProportionAnalyzer {
    converter: ColorConverter,
    classification: ColorClassificationConfig,
}

impl Default for ColorProportionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorProportionAnalyzer {
    /// Create an analyzer with the proportion thresholds
    pub fn new() -> Self {
        Self::with_config(ColorClassificationConfig::proportion_defaults())
    }

    /// Create an analyzer with custom yellow/green ranges
    pub fn with_config(classification: ColorClassificationConfig) -> Self {
        Self {
            converter: ColorConverter::new(),
            classification,
        }
    }

    /// Create an analyzer from the `proportions` section of a config
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::with_config(config.proportions)
    }

    /// Yellow/green ranges this analyzer classifies with
    pub fn classification(&self) -> &ColorClassificationConfig {
        &self.classification
    }

    /// Compute proportions for an already decoded image
    pub fn analyze(&self, image: &BgrImage) -> ColorProportions {
        let hsv_image = self.converter.convert_image(image);
        let foreground = non_background_mask(image);
        let yellow_mask = self.classification.yellow.mask(&hsv_image);
        let green_mask = self.classification.green.mask(&hsv_image);

        let mut non_background = 0usize;
        let mut yellow = 0usize;
        let mut green = 0usize;

        for ((&fg, &is_yellow), &is_green) in foreground
            .iter()
            .zip(yellow_mask.iter())
            .zip(green_mask.iter())
        {
            if !fg {
                continue;
            }
            non_background += 1;
            yellow += is_yellow as usize;
            green += is_green as usize;
        }

        log::debug!(
            "{}x{} image: {} non-background, {} yellow, {} green",
            image.width(),
            image.height(),
            non_background,
            yellow,
            green
        );

        ColorProportions::from_counts(non_background, yellow, green)
    }

    /// Load an image and compute its proportions
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError` if:
    /// - Image cannot be opened or decoded (`ImageLoadError`)
    /// - Decoded pixel data is malformed (`ProcessingError`)
    pub fn try_analyze_path(&self, path: &Path) -> Result<ColorProportions> {
        let image = load_image(path)?;
        Ok(self.analyze(&image))
    }

    /// Load an image and compute its proportions, never failing
    ///
    /// Failures are logged as warnings and collapse to
    /// [`ColorProportions::neutral`]. Use [`Self::try_analyze_path`] to tell
    /// an all-background image apart from a failure.
    pub fn analyze_path(&self, path: &Path) -> ColorProportions {
        match self.try_analyze_path(path) {
            Ok(proportions) => proportions,
            Err(e) => {
                log::warn!("Error processing image {}: {}", path.display(), e);
                ColorProportions::neutral()
            }
        }
    }
}
