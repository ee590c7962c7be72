use thiserror::Error;

/// User-facing notification texts for gateway failures.
pub mod messages {
    pub const RATE_LIMITED: &str = "Превышен лимит запросов. Попробуйте позже.";
    pub const FORBIDDEN: &str = "Ошибка доступа. Проверьте API ключ.";
    pub const NOT_FOUND: &str = "Данные не найдены.";
    pub const UPSTREAM: &str = "Произошла ошибка при загрузке данных.";
    pub const GENERIC: &str = "Произошла ошибка.";
}

#[derive(Debug, Error)]
pub enum AppError {
    // Gateway taxonomy
    #[error("API rate limit exceeded (429) (URL: {url})")]
    RateLimited { url: String },

    #[error("API access forbidden (403), check the API key (URL: {url})")]
    Forbidden { url: String },

    #[error("API resource not found (404): {url}")]
    NotFound { url: String },

    #[error("Upstream API error{}: {message} (URL: {url})", format_status(.status))]
    Upstream {
        status: Option<u16>,
        message: String,
        url: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a rate limit error (429)
    pub fn rate_limited(url: impl Into<String>) -> Self {
        Self::RateLimited { url: url.into() }
    }

    /// Create a forbidden error (403)
    pub fn forbidden(url: impl Into<String>) -> Self {
        Self::Forbidden { url: url.into() }
    }

    /// Create a not found error (404)
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Create an upstream error for any other non-2xx status, network failure
    /// or unreadable body. `status` is `None` when no response was received.
    pub fn upstream(status: Option<u16>, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Maps an HTTP status code into the gateway taxonomy.
    pub fn from_status(status: u16, reason: impl Into<String>, url: impl Into<String>) -> Self {
        match status {
            429 => Self::rate_limited(url),
            403 => Self::forbidden(url),
            404 => Self::not_found(url),
            _ => Self::upstream(Some(status), reason, url),
        }
    }

    /// True for errors raised by the remote data gateway
    pub fn is_gateway_error(&self) -> bool {
        matches!(
            self,
            AppError::RateLimited { .. }
                | AppError::Forbidden { .. }
                | AppError::NotFound { .. }
                | AppError::Upstream { .. }
        )
    }

    /// Check if error indicates data not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    /// Message shown to the user when this error reaches the notification boundary.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::RateLimited { .. } => messages::RATE_LIMITED,
            AppError::Forbidden { .. } => messages::FORBIDDEN,
            AppError::NotFound { .. } => messages::NOT_FOUND,
            AppError::Upstream { .. } => messages::UPSTREAM,
            _ => messages::GENERIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_datetime_parse_error_helper() {
        let error = AppError::datetime_parse_error("Invalid date format");
        assert!(matches!(error, AppError::DateTimeParse(_)));
        assert_eq!(
            error.to_string(),
            "Date/time parsing error: Invalid date format"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_from_status_maps_taxonomy() {
        let url = "https://api.example.com/competitions";
        assert!(matches!(
            AppError::from_status(429, "Too Many Requests", url),
            AppError::RateLimited { .. }
        ));
        assert!(matches!(
            AppError::from_status(403, "Forbidden", url),
            AppError::Forbidden { .. }
        ));
        assert!(matches!(
            AppError::from_status(404, "Not Found", url),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            AppError::from_status(500, "Internal Server Error", url),
            AppError::Upstream {
                status: Some(500),
                ..
            }
        ));
        assert!(matches!(
            AppError::from_status(400, "Bad Request", url),
            AppError::Upstream {
                status: Some(400),
                ..
            }
        ));
    }

    #[test]
    fn test_upstream_display_with_and_without_status() {
        let with_status = AppError::upstream(Some(502), "Bad Gateway", "https://api.example.com");
        assert_eq!(
            with_status.to_string(),
            "Upstream API error (502): Bad Gateway (URL: https://api.example.com)"
        );

        let without_status =
            AppError::upstream(None, "connection refused", "https://api.example.com");
        assert_eq!(
            without_status.to_string(),
            "Upstream API error: connection refused (URL: https://api.example.com)"
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::rate_limited("u").user_message(),
            messages::RATE_LIMITED
        );
        assert_eq!(AppError::forbidden("u").user_message(), messages::FORBIDDEN);
        assert_eq!(AppError::not_found("u").user_message(), messages::NOT_FOUND);
        assert_eq!(
            AppError::upstream(Some(500), "x", "u").user_message(),
            messages::UPSTREAM
        );
        assert_eq!(
            AppError::config_error("x").user_message(),
            messages::GENERIC
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(AppError::not_found("u").is_not_found());
        assert!(!AppError::forbidden("u").is_not_found());
        assert!(AppError::rate_limited("u").is_gateway_error());
        assert!(AppError::upstream(None, "x", "u").is_gateway_error());
        assert!(!AppError::config_error("x").is_gateway_error());
        assert!(!AppError::datetime_parse_error("x").is_gateway_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: AppError = io_error.into();
        assert!(matches!(error, AppError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: missing");
    }
}
