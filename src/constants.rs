//! Classification thresholds and scale constants for color analysis
//!
//! Hue, saturation and value bounds use the 8-bit HSV convention common to
//! OpenCV-style pipelines: hue is half the angle in degrees (0-179),
//! saturation and value span 0-255.

/// 8-bit HSV scale
pub mod hsv {
    /// Largest representable hue (359 degrees / 2)
    pub const HUE_MAX: u8 = 179;

    /// Number of distinct hue values
    pub const HUE_STEPS: u16 = 180;
}

/// Bounds used when computing green/yellow proportions
pub mod proportion {
    /// Yellow lower bound (H, S, V)
    pub const YELLOW_LOWER: [u8; 3] = [20, 100, 100];
    /// Yellow upper bound (H, S, V)
    pub const YELLOW_UPPER: [u8; 3] = [40, 255, 255];

    /// Green lower bound (H, S, V)
    pub const GREEN_LOWER: [u8; 3] = [40, 40, 40];
    /// Green upper bound (H, S, V)
    pub const GREEN_UPPER: [u8; 3] = [80, 255, 255];
}

/// Bounds used when building green/yellow intensity distributions
///
/// These intentionally differ from [`proportion`]: roughly 35-85 degrees
/// halved for green and 20-35 for yellow, with a looser saturation floor.
pub mod distribution {
    /// Green lower bound (H, S, V)
    pub const GREEN_LOWER: [u8; 3] = [35, 50, 50];
    /// Green upper bound (H, S, V)
    pub const GREEN_UPPER: [u8; 3] = [85, 255, 255];

    /// Yellow lower bound (H, S, V)
    pub const YELLOW_LOWER: [u8; 3] = [20, 50, 50];
    /// Yellow upper bound (H, S, V)
    pub const YELLOW_UPPER: [u8; 3] = [35, 255, 255];
}

/// Histogram defaults
pub mod histogram {
    /// One bin per 8-bit intensity for RGB channel histograms
    pub const CHANNEL_BINS: usize = 256;

    /// Bins for the V-channel distribution of green/yellow pixels
    pub const VALUE_BINS: usize = 50;

    /// Upper limit on bins for any 8-bit histogram
    pub const MAX_BINS: usize = 256;
}

/// Colors painted over matched pixels in highlight overlays (RGB)
pub mod highlight {
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
}
