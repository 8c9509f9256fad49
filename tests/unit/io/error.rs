//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use wavetile::io::error::{SolverError, invalid_parameter};

    // Tests the invalid parameter constructor formats all three parts
    // Verified by dropping the reason from the display output
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("rows", &10_001, &"exceeds maximum of 10000");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'rows' = '10001': exceeds maximum of 10000"
        );
    }

    // Tests queue errors name the failing operation or key
    // Verified by printing a generic message for queue errors
    #[test]
    fn test_queue_error_display() {
        let underflow = SolverError::QueueUnderflow {
            operation: "extract_min",
        };
        assert_eq!(
            underflow.to_string(),
            "Entropy queue underflow during extract_min"
        );

        let missing = SolverError::PriorityNotFound { key: 17 };
        assert_eq!(missing.to_string(), "No queue entry for cell key 17");
    }

    // Tests file system errors expose their underlying source
    // Verified by returning None from source() for FileSystem
    #[test]
    fn test_source_chaining() {
        let err = SolverError::FileSystem {
            path: PathBuf::from("/tmp/out.png"),
            operation: "create parent directory",
            source: std::io::Error::other("disk full"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("create parent directory"));
        assert!(err.to_string().contains("/tmp/out.png"));

        let plain = SolverError::PriorityNotFound { key: 0 };
        assert!(plain.source().is_none());
    }

    // Tests the io::Error conversion lands in the FileSystem variant
    // Verified by converting into InvalidParameter instead
    #[test]
    fn test_from_io_error() {
        let err: SolverError = std::io::Error::other("denied").into();
        assert!(matches!(err, SolverError::FileSystem { .. }));
    }
}
