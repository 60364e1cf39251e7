//! Tests for error construction and formatting

#[cfg(test)]
mod tests {
    use marginweave::MarginError;
    use marginweave::io::error::{file_system_error, invalid_parameter};
    use marginweave::spatial::{Seed, Side};
    use std::error::Error;

    // Tests parameter errors carry their fields into the message
    // Verified by dropping the reason from Display
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("cell_size", &0, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'cell_size' = '0': must be at least 1"
        );
        assert!(err.source().is_none());
    }

    // Tests file system errors keep the path, operation and source
    // Verified by returning None from source
    #[test]
    fn test_file_system_error() {
        let err = file_system_error(
            "out/missing.png",
            "create file",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("out/missing.png"));
        assert!(err.source().is_some());
    }

    // Tests parse failures name the rejected input
    // Verified by formatting the error without the input
    #[test]
    fn test_parse_error_messages() {
        let side_err = "sideways".parse::<Side>().unwrap_err();
        assert!(side_err.to_string().contains("'sideways'"));

        let seed_err = "1021".parse::<Seed>().unwrap_err();
        assert!(matches!(&seed_err, MarginError::InvalidSeed { value } if value == "1021"));
        assert!(seed_err.to_string().contains("four binary digits"));
    }

    // Tests io errors convert with an unknown path
    // Verified by mapping io errors to InvalidParameter
    #[test]
    fn test_from_io_error() {
        let err: MarginError = std::io::Error::other("boom").into();
        assert!(matches!(err, MarginError::FileSystem { .. }));
        assert!(err.to_string().contains("<unknown>"));
    }
}
