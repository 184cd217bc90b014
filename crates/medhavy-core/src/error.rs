//! Error types for the Medhavy site

use thiserror::Error;

/// Main error type for site primitives and form flows
#[derive(Error, Debug)]
pub enum SiteError {
    /// A cycling typewriter needs at least one word with text
    #[error("Typewriter has no words to type")]
    EmptyWordList,

    /// A carousel needs at least one slide
    #[error("Carousel has no slides")]
    EmptyCarousel,

    /// Manual slide selection outside the slide list
    #[error("Slide index {index} out of range (carousel has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// Visibility threshold outside [0, 1]
    #[error("Invalid visibility threshold: {0}")]
    InvalidThreshold(f64),

    /// Animation parameters that cannot produce a frame sequence
    #[error("Invalid animation: {0}")]
    InvalidAnimation(String),

    /// Modal slug that is not part of the registry
    #[error("Unknown modal kind: {0}")]
    UnknownModalKind(String),

    /// A required form field was left blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A submission is already running for this form
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Operation not allowed in the current form state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// The submission backend rejected the form
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Settings could not be applied
    #[error("Settings error: {0}")]
    Settings(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::SlideOutOfRange { index: 4, len: 3 };
        assert_eq!(
            format!("{}", err),
            "Slide index 4 out of range (carousel has 3 slides)"
        );

        let err = SiteError::MissingRequiredField("email".to_string());
        assert_eq!(format!("{}", err), "Missing required field: email");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }
}
