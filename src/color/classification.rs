//! HSV color buckets and pixel masks
//!
//! A [`ColorRange`] is an inclusive box in 8-bit HSV space. The two color
//! buckets this crate cares about, yellow and green, are grouped into a
//! [`ColorClassificationConfig`]. Proportion analysis and intensity
//! distributions each carry their own config, since their thresholds differ.

use serde::{Deserialize, Serialize};
use crate::{
    constants::{distribution, hsv, proportion},
    error::{AnalysisError, Result},
    image_loader::BgrImage,
    color::conversion::HsvImage,
};

/// Inclusive HSV range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    /// Lower bound `[h, s, v]`
    pub lower: [u8; 3],
    /// Upper bound `[h, s, v]`
    pub upper: [u8; 3],
}

impl ColorRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// True when every component lies within its bounds
    pub fn contains(&self, pixel: [u8; 3]) -> bool {
        (0..3).all(|i| pixel[i] >= self.lower[i] && pixel[i] <= self.upper[i])
    }

    /// Membership mask over an HSV image, row-major
    pub fn mask(&self, image: &HsvImage) -> Vec<bool> {
        image.pixels().iter().map(|&px| self.contains(px)).collect()
    }

    /// Check bounds are ordered and hues fit the 0-179 scale
    ///
    /// `name` prefixes the parameter reported in errors, e.g. `"green"`.
    pub fn validate(&self, name: &str) -> Result<()> {
        const AXES: [&str; 3] = ["hue", "saturation", "value"];

        if self.upper[0] > hsv::HUE_MAX {
            return Err(AnalysisError::invalid_parameter(
                format!("{}.upper.hue", name),
                self.upper[0],
            ));
        }

        for (i, axis) in AXES.iter().enumerate() {
            if self.lower[i] > self.upper[i] {
                return Err(AnalysisError::invalid_parameter(
                    format!("{}.lower.{}", name, axis),
                    format!("{} > upper {}", self.lower[i], self.upper[i]),
                ));
            }
        }

        Ok(())
    }
}

/// Named yellow and green buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorClassificationConfig {
    pub yellow: ColorRange,
    pub green: ColorRange,
}

impl ColorClassificationConfig {
    /// Thresholds used for green/yellow proportions
    ///
    /// Yellow: H 20-40, S 100-255, V 100-255.
    /// Green: H 40-80, S 40-255, V 40-255.
    pub const fn proportion_defaults() -> Self {
        Self {
            yellow: ColorRange::new(proportion::YELLOW_LOWER, proportion::YELLOW_UPPER),
            green: ColorRange::new(proportion::GREEN_LOWER, proportion::GREEN_UPPER),
        }
    }

    /// Thresholds used for intensity distributions and highlight overlays
    ///
    /// Green: H 35-85, S 50-255, V 50-255.
    /// Yellow: H 20-35, S 50-255, V 50-255.
    pub const fn distribution_defaults() -> Self {
        Self {
            yellow: ColorRange::new(distribution::YELLOW_LOWER, distribution::YELLOW_UPPER),
            green: ColorRange::new(distribution::GREEN_LOWER, distribution::GREEN_UPPER),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.yellow.validate("yellow")?;
        self.green.validate("green")
    }
}

impl Default for ColorClassificationConfig {
    fn default() -> Self {
        Self::proportion_defaults()
    }
}

/// Pixels with at least one non-zero channel
///
/// Pure black is treated as masked-out background in segmented images.
pub fn non_background_mask(image: &BgrImage) -> Vec<bool> {
    image.pixels().map(|px| px.iter().any(|&c| c != 0)).collect()
}
