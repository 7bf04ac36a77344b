//! Error types for the portfolio showcase

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A fragment or lookup named a project that is not in the catalog
    #[error("Project not found: {0}")]
    UnknownProject(String),

    /// A lightbox was requested with no images to show
    #[error("Gallery has no images")]
    EmptyGallery,

    /// Action is not legal in the current view state
    #[error("Cannot {action} while in {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// Embedded catalog document failed validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration value out of range
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::UnknownProject("slingshot".to_string());
        assert_eq!(format!("{}", err), "Project not found: slingshot");

        let err = PortfolioError::InvalidTransition {
            action: "select tab",
            state: "detail",
        };
        assert_eq!(err.to_string(), "Cannot select tab while in detail");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
