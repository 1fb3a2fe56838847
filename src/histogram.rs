//! Histogram data for color composition plots
//!
//! Produces the numbers behind RGB channel histograms and green/yellow
//! intensity histograms, plus an overlay image with matched pixels painted.
//! Rendering is left to the caller; everything here is plain data that
//! serializes to JSON.
//!
//! Unlike proportion analysis, black pixels are not excluded here.

use std::path::Path;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use crate::{
    color::{ColorClassificationConfig, ColorConverter},
    constants::{highlight, histogram::MAX_BINS},
    error::{AnalysisError, Result},
    image_loader::{load_rgb, BgrImage},
};

/// Equal-width histogram over 8-bit intensities 0-255
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Empty histogram with `bins` bins
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` unless `1 <= bins <= 256`.
    pub fn new(bins: usize) -> Result<Self> {
        if bins == 0 || bins > MAX_BINS {
            return Err(AnalysisError::invalid_parameter("bins", bins));
        }
        Ok(Self {
            counts: vec![0; bins],
        })
    }

    /// Count one intensity
    pub fn add(&mut self, value: u8) {
        let idx = value as usize * self.counts.len() / 256;
        self.counts[idx] += 1;
    }

    /// Per-bin counts
    pub fn bins(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of counted values
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Half-open intensity interval `[lo, hi)` covered by bin `index`
    pub fn bin_range(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.counts.len() {
            return None;
        }
        let width = 256.0 / self.counts.len() as f64;
        Some((index as f64 * width, (index + 1) as f64 * width))
    }
}

/// Red, green and blue channel histograms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHistograms {
    pub red: Histogram,
    pub green: Histogram,
    pub blue: Histogram,
}

impl ChannelHistograms {
    pub fn from_rgb(image: &RgbImage, bins: usize) -> Result<Self> {
        let mut red = Histogram::new(bins)?;
        let mut green = Histogram::new(bins)?;
        let mut blue = Histogram::new(bins)?;

        for px in image.pixels() {
            red.add(px[0]);
            green.add(px[1]);
            blue.add(px[2]);
        }

        Ok(Self { red, green, blue })
    }

    pub fn from_path(path: &Path, bins: usize) -> Result<Self> {
        Self::from_rgb(&load_rgb(path)?, bins)
    }
}

/// V-channel (brightness) histograms of green and yellow pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDistribution {
    pub green: Histogram,
    pub yellow: Histogram,
}

impl ValueDistribution {
    pub fn from_rgb(
        image: &RgbImage,
        classification: &ColorClassificationConfig,
        bins: usize,
    ) -> Result<Self> {
        let converter = ColorConverter::new();
        let mut green = Histogram::new(bins)?;
        let mut yellow = Histogram::new(bins)?;

        for px in image.pixels() {
            let hsv = converter.rgb_to_hsv(px[0], px[1], px[2]);
            if classification.green.contains(hsv) {
                green.add(hsv[2]);
            }
            if classification.yellow.contains(hsv) {
                yellow.add(hsv[2]);
            }
        }

        Ok(Self { green, yellow })
    }

    pub fn from_path(
        path: &Path,
        classification: &ColorClassificationConfig,
        bins: usize,
    ) -> Result<Self> {
        Self::from_rgb(&load_rgb(path)?, classification, bins)
    }
}

/// Copy of `image` with green matches painted pure green, then yellow
/// matches painted pure yellow (yellow wins where both match)
pub fn highlight_matches(image: &RgbImage, classification: &ColorClassificationConfig) -> RgbImage {
    let converter = ColorConverter::new();
    let hsv_image = converter.convert_image(&BgrImage::from_rgb_image(image));
    let green_mask = classification.green.mask(&hsv_image);
    let yellow_mask = classification.yellow.mask(&hsv_image);

    let mut highlighted = image.clone();
    for (i, px) in highlighted.pixels_mut().enumerate() {
        if green_mask[i] {
            *px = Rgb(highlight::GREEN);
        }
        if yellow_mask[i] {
            *px = Rgb(highlight::YELLOW);
        }
    }
    highlighted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_binning() {
        let mut hist = Histogram::new(50).unwrap();
        hist.add(0);
        hist.add(5);
        hist.add(6);
        hist.add(255);

        assert_eq!(hist.bins().len(), 50);
        assert_eq!(hist.bins()[0], 2);
        assert_eq!(hist.bins()[1], 1);
        assert_eq!(hist.bins()[49], 1);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.bin_range(0), Some((0.0, 5.12)));
        assert_eq!(hist.bin_range(50), None);
    }

    #[test]
    fn test_histogram_rejects_bad_bins() {
        assert!(Histogram::new(0).is_err());
        assert!(Histogram::new(257).is_err());
        assert!(Histogram::new(256).is_ok());
    }

    #[test]
    fn test_channel_histograms() {
        let img = RgbImage::from_fn(4, 1, |x, _| Rgb([x as u8, 100, 255]));
        let hists = ChannelHistograms::from_rgb(&img, 256).unwrap();

        assert_eq!(hists.red.bins()[0..4], [1, 1, 1, 1]);
        assert_eq!(hists.green.bins()[100], 4);
        assert_eq!(hists.blue.bins()[255], 4);
        assert_eq!(hists.red.total(), 4);
    }

    #[test]
    fn test_value_distribution_uses_given_ranges() {
        // yellow H=30, green H=60, red H=0, black
        let img = RgbImage::from_vec(
            4,
            1,
            vec![200, 200, 43, 43, 200, 43, 200, 0, 0, 0, 0, 0],
        )
        .unwrap();
        let config = ColorClassificationConfig::distribution_defaults();
        let dist = ValueDistribution::from_rgb(&img, &config, 256).unwrap();

        assert_eq!(dist.yellow.total(), 1);
        assert_eq!(dist.green.total(), 1);
        assert_eq!(dist.yellow.bins()[200], 1);
        assert_eq!(dist.green.bins()[200], 1);
    }

    #[test]
    fn test_highlight_matches() {
        let img = RgbImage::from_vec(3, 1, vec![200, 200, 43, 43, 200, 43, 200, 0, 0]).unwrap();
        let config = ColorClassificationConfig::distribution_defaults();
        let out = highlight_matches(&img, &config);

        assert_eq!(out.get_pixel(0, 0), &Rgb(highlight::YELLOW));
        assert_eq!(out.get_pixel(1, 0), &Rgb(highlight::GREEN));
        assert_eq!(out.get_pixel(2, 0), &Rgb([200, 0, 0]));
    }

    #[test]
    fn test_highlight_yellow_wins_overlap() {
        // (213, 255, 0) is about 70 degrees, H=35, inside both distribution ranges
        let img = RgbImage::from_vec(1, 1, vec![213, 255, 0]).unwrap();
        let config = ColorClassificationConfig::distribution_defaults();
        let hsv = ColorConverter::new().rgb_to_hsv(213, 255, 0);
        assert_eq!(hsv, [35, 255, 255]);
        assert!(config.green.contains(hsv) && config.yellow.contains(hsv));

        let out = highlight_matches(&img, &config);
        assert_eq!(out.get_pixel(0, 0), &Rgb(highlight::YELLOW));
    }
}
