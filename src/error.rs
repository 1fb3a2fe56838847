//! Error types for the leaf_colorscan library

use thiserror::Error;

/// Result type alias for leaf_colorscan operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for color composition analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be opened or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pixel data could not be converted or classified
    #[error("Processing error: {0}")]
    ProcessingError(String),

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if a scan over many images can skip this failure and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::ImageLoadError { .. } | AnalysisError::ProcessingError(_)
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file exists and is a JPEG, PNG or BMP.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("The setting '{}' has an invalid value ({}).", parameter, value)
            }
            AnalysisError::ConfigError { .. } => {
                "Could not read the configuration file. Please check it is valid JSON.".to_string()
            }
            _ => "Color analysis failed. Please try with a different image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_image_load_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AnalysisError::image_load("Failed to open image file: a.png", io);

        assert_eq!(err.to_string(), "Failed to load image: Failed to open image file: a.png");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(AnalysisError::ProcessingError("bad buffer".into()).is_recoverable());
        assert!(!AnalysisError::invalid_parameter("histogram.value_bins", 0).is_recoverable());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = AnalysisError::invalid_parameter("yellow.upper.hue", 200);
        assert_eq!(err.to_string(), "Invalid parameter: yellow.upper.hue = 200");
        assert!(err.user_message().contains("yellow.upper.hue"));
    }
}
