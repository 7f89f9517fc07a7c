//! Unit tests for error handling
//!
//! Tests error types, conversions, and error message formatting.

#[cfg(test)]
mod tests {
    use std::io;

    use crate::errors::EchoPulseError;

    // ====== Error Type Tests ======

    #[test]
    fn test_custom_error() {
        let error = EchoPulseError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = EchoPulseError::Config("Invalid configuration".to_string());
        assert!(matches!(error, EchoPulseError::Config(_)));
        assert!(format!("{error}").contains("configuration"));
    }

    #[test]
    fn test_invalid_url_error_carries_input() {
        let error = EchoPulseError::InvalidUrl("https://example.com/nothing".to_string());
        assert_eq!(
            format!("{error}"),
            "Invalid URL: https://example.com/nothing"
        );
    }

    #[test]
    fn test_empty_replies_error() {
        assert_eq!(
            EchoPulseError::EmptyReplies.to_string(),
            "No replies found"
        );
    }

    // ====== Error Conversion Tests ======

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: EchoPulseError = io_err.into();
        assert!(matches!(err, EchoPulseError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: Result<serde_json::Value, _> = serde_json::from_str("{invalid json}");
        let json_err = parse_result.unwrap_err();
        let err: EchoPulseError = json_err.into();
        assert!(matches!(err, EchoPulseError::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let parse_result: Result<toml::Value, _> = toml::from_str("level = ");
        let toml_err = parse_result.unwrap_err();
        let err: EchoPulseError = toml_err.into();
        assert!(matches!(err, EchoPulseError::TomlParsing(_)));
    }

    // ====== Error Propagation Tests ======

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> crate::Result<String> {
            let content = std::fs::read_to_string("/definitely/not/here/echopulse.toml")?;
            Ok(content)
        }

        assert!(matches!(read_missing(), Err(EchoPulseError::Io(_))));
    }

    #[test]
    fn test_error_debug_format() {
        let error = EchoPulseError::Custom("Debug test".to_string());
        assert!(format!("{error:?}").contains("Custom"));
    }
}
