//! Error types for the router web exporter

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// HTTP transport error talking to the WebDriver endpoint
    #[error("WebDriver transport error")]
    Transport(#[from] reqwest::Error),

    /// WebDriver protocol-level error
    #[error("WebDriver error: {0}")]
    WebDriver(String),

    /// A required DOM element could not be located
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// HTML table shape mismatch
    #[error("Parse error: {0}")]
    Parse(String),

    /// Non-numeric metric text
    #[error("Value error: {0}")]
    Value(String),

    /// Post-login landing page did not match the home page
    #[error("Login verification failed: expected {expected}, got {actual}")]
    LoginVerification { expected: String, actual: String },

    /// JSON serialization error
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Background task failure
    #[error("Task join error: {0}")]
    Join(String),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_element_not_found_error() {
        let err = AppError::ElementNotFound("id=networkstats".to_string());
        assert_eq!(err.to_string(), "Element not found: id=networkstats");
    }

    #[test]
    fn test_parse_error() {
        let err = AppError::Parse("row has 2 cells but 8 headers declared".to_string());
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_login_verification_error() {
        let err = AppError::LoginVerification {
            expected: "http://192.168.0.1/home.htm".to_string(),
            actual: "http://192.168.0.1/login.htm".to_string(),
        };
        assert!(err.to_string().contains("home.htm"));
        assert!(err.to_string().contains("login.htm"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_result = "invalid".parse::<std::net::IpAddr>();
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::AddrParse(_)));
    }
}
