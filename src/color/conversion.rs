//! Color space conversion utilities
//!
//! Converts 8-bit BGR/RGB pixels into 8-bit HSV using the OpenCV scale:
//! - H: hue angle in degrees divided by two, 0-179
//! - S: saturation scaled to 0-255
//! - V: value (brightest channel), 0-255
//!
//! H and S are computed as exact ratios of integers and rounded half up, so
//! ties such as 161 degrees (H = 80.5) always land on the same side.

use crate::{constants::hsv, image_loader::BgrImage};

/// Image in 8-bit HSV, same dimensions and pixel order as its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl HsvImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels in row-major order as `[h, s, v]`
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }
}

/// Converter from 8-bit RGB triples to 8-bit HSV
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    pub fn new() -> Self {
        Self
    }

    /// Convert RGB (0-255) to HSV `[h, s, v]`
    ///
    /// Achromatic pixels (including black) get hue 0 and saturation 0.
    pub fn rgb_to_hsv(&self, r: u8, g: u8, b: u8) -> [u8; 3] {
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
        let v = r.max(g).max(b);
        let diff = v - r.min(g).min(b);
        if diff == 0 {
            return [0, 0, v as u8];
        }

        // hue in degrees is num / diff
        let mut num = if v == r {
            60 * (g - b)
        } else if v == g {
            120 * diff + 60 * (b - r)
        } else {
            240 * diff + 60 * (r - g)
        };
        if num < 0 {
            num += 360 * diff;
        }

        let steps = i32::from(hsv::HUE_STEPS);
        let mut h = (num + diff) / (2 * diff);
        if h >= steps {
            h -= steps;
        }
        let s = (510 * diff + v) / (2 * v);

        [h as u8, s as u8, v as u8]
    }

    /// Convert BGR (0-255) to HSV `[h, s, v]`
    pub fn bgr_to_hsv(&self, b: u8, g: u8, r: u8) -> [u8; 3] {
        self.rgb_to_hsv(r, g, b)
    }

    /// Convert a whole BGR image, preserving pixel correspondence
    pub fn convert_image(&self, image: &BgrImage) -> HsvImage {
        let pixels = image
            .pixels()
            .map(|[b, g, r]| self.bgr_to_hsv(b, g, r))
            .collect();

        HsvImage {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(converter.rgb_to_hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(converter.rgb_to_hsv(0, 0, 255), [120, 255, 255]);
        assert_eq!(converter.rgb_to_hsv(255, 255, 0), [30, 255, 255]);
    }

    #[test]
    fn test_achromatic() {
        let converter = ColorConverter::new();
        assert_eq!(converter.rgb_to_hsv(0, 0, 0), [0, 0, 0]);
        assert_eq!(converter.rgb_to_hsv(255, 255, 255), [0, 0, 255]);
        assert_eq!(converter.rgb_to_hsv(128, 128, 128), [0, 0, 128]);
    }

    #[test]
    fn test_reference_yellow_and_green() {
        let converter = ColorConverter::new();
        // min channel 43 on a max of 200 gives S = round(157 * 255 / 200) = 200
        assert_eq!(converter.rgb_to_hsv(200, 200, 43), [30, 200, 200]);
        assert_eq!(converter.rgb_to_hsv(43, 200, 43), [60, 200, 200]);
    }

    #[test]
    fn test_bgr_order() {
        let converter = ColorConverter::new();
        assert_eq!(
            converter.bgr_to_hsv(43, 200, 200),
            converter.rgb_to_hsv(200, 200, 43)
        );
        assert_eq!(converter.bgr_to_hsv(255, 0, 0), [120, 255, 255]);
    }

    #[test]
    fn test_hue_wraps_below_180() {
        let converter = ColorConverter::new();
        // 359 degrees rounds to 180 and must wrap to 0
        let [h, _, _] = converter.rgb_to_hsv(255, 0, 4);
        assert!(h <= hsv::HUE_MAX);
        assert_eq!(h, 0);
    }

    #[test]
    fn test_convert_image_preserves_layout() {
        let converter = ColorConverter::new();
        let bgr = BgrImage::from_rgb_raw(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
        let hsv_image = converter.convert_image(&bgr);

        assert_eq!(hsv_image.width(), 2);
        assert_eq!(hsv_image.height(), 1);
        assert_eq!(hsv_image.pixels(), &[[0, 255, 255], [120, 255, 255]]);
    }

    #[test]
    fn test_hue_half_step_rounds_up() {
        let converter = ColorConverter::new();
        // 161 degrees exactly: H = 80.5 rounds to 81, outside green's H <= 80
        assert_eq!(converter.rgb_to_hsv(16, 76, 57), [81, 201, 76]);
        // 159 degrees exactly: H = 79.5 rounds to 80
        assert_eq!(converter.rgb_to_hsv(16, 76, 55), [80, 201, 76]);
    }

    #[test]
    fn test_saturation_half_step_rounds_up() {
        let converter = ColorConverter::new();
        // S = 255 * 1 / 2 = 127.5
        assert_eq!(converter.rgb_to_hsv(2, 1, 1), [0, 128, 2]);
        // S = 255 * 3 / 6 = 127.5
        assert_eq!(converter.rgb_to_hsv(3, 6, 3), [60, 128, 6]);
    }
}
