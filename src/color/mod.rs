//! Color classification and proportion analysis module
//!
//! This module handles HSV conversion, the yellow/green color buckets,
//! and computing each bucket's share of an image's foreground.

pub mod conversion;
pub mod classification;
pub mod analysis;

pub use conversion::{ColorConverter, HsvImage};
pub use classification::{non_background_mask, ColorClassificationConfig, ColorRange};
pub use analysis::{ColorProportionAnalyzer, ColorProportions};
