//! Error types for the report engine.
//!
//! The normalization and layout passes are pure string transformations and
//! cannot fail; errors only arise from caller-supplied layout options and
//! from I/O while serializing PDF output.

/// Result type alias for report engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or rendering a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Layout options describe a page with no usable content area
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_message() {
        let err = Error::InvalidGeometry("margin exceeds page width".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid page geometry"));
        assert!(msg.contains("margin exceeds page width"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: Error = io_err.into();
        assert!(format!("{}", err).contains("disk full"));
    }
}
