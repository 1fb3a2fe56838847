//! Configuration for color composition analysis.
//!
//! Groups the tunable thresholds used by the analyzers so they can be kept in
//! a JSON file next to a dataset and reloaded for reproducible runs.
//!
//! ```no_run
//! use leaf_colorscan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), leaf_colorscan::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - `proportions`: yellow/green ranges for [`crate::ColorProportionAnalyzer`]
//! - `distribution`: yellow/green ranges for [`crate::histogram::ValueDistribution`]
//!   and highlight overlays
//! - [`HistogramConfig`]: bin counts

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::{
    color::ColorClassificationConfig,
    constants::histogram,
    error::{AnalysisError, Result},
};

/// Complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Ranges used for green/yellow proportions
    #[serde(default = "ColorClassificationConfig::proportion_defaults")]
    pub proportions: ColorClassificationConfig,

    /// Ranges used for intensity distributions and overlays
    #[serde(default = "ColorClassificationConfig::distribution_defaults")]
    pub distribution: ColorClassificationConfig,

    /// Histogram bin counts
    #[serde(default)]
    pub histogram: HistogramConfig,
}

/// Histogram bin counts.
///
/// Both histograms span intensities 0-255; bins must be in 1..=256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Bins per RGB channel histogram
    pub channel_bins: usize,

    /// Bins for green/yellow V-channel histograms
    pub value_bins: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            channel_bins: histogram::CHANNEL_BINS,
            value_bins: histogram::VALUE_BINS,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            proportions: ColorClassificationConfig::proportion_defaults(),
            distribution: ColorClassificationConfig::distribution_defaults(),
            histogram: HistogramConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check ranges and bin counts
    pub fn validate(&self) -> Result<()> {
        self.proportions.validate()?;
        self.distribution.validate()?;

        for (name, bins) in [
            ("histogram.channel_bins", self.histogram.channel_bins),
            ("histogram.value_bins", self.histogram.value_bins),
        ] {
            if bins == 0 || bins > histogram::MAX_BINS {
                return Err(AnalysisError::invalid_parameter(name, bins));
            }
        }

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
