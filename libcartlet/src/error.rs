//! Error types for Cartlet

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CartletError>;

#[derive(Error, Debug)]
pub enum CartletError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CartletError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CartletError::InvalidInput(_) => 3,
            CartletError::Api(ApiError::Network(_)) => 2,
            CartletError::Api(_) => 1,
            CartletError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures talking to the storefront backend.
///
/// The three variants mirror the three ways a one-shot REST call can go
/// wrong: the request never reached the server, the server answered with a
/// non-2xx status, or the body was not the JSON we expected.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = CartletError::InvalidInput("empty id".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_network_error() {
        let error = CartletError::Api(ApiError::Network("connection refused".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_http_error() {
        let error = CartletError::Api(ApiError::Http {
            status: 404,
            body: "not found".to_string(),
        });
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_parse_error() {
        let error = CartletError::Api(ApiError::Parse("expected array".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = CartletError::Config(ConfigError::MissingField("api.base_url".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_http_error_message_includes_status_and_body() {
        let error = ApiError::Http {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 500: boom");
    }

    #[test]
    fn test_error_conversion_from_api_error() {
        let api_error = ApiError::Network("dns failure".to_string());
        let error: CartletError = api_error.into();

        match error {
            CartletError::Api(ApiError::Network(msg)) => assert!(msg.contains("dns")),
            _ => panic!("Expected CartletError::Api"),
        }
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("ui.page_size".to_string());
        let error: CartletError = config_error.into();

        assert!(matches!(error, CartletError::Config(_)));
    }

    #[test]
    fn test_error_message_formatting() {
        let error = CartletError::Api(ApiError::Network("connection reset".to_string()));
        assert_eq!(
            format!("{}", error),
            "API error: Network error: connection reset"
        );
    }
}
