use thiserror::Error;

/// The single failure shape surfaced past the use-case boundary.
///
/// The transport taxonomy collapses to one case here; callers only branch
/// on success vs. a failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unknown(String),
}

impl From<tmdb::TmdbError> for ApiError {
    fn from(e: tmdb::TmdbError) -> Self {
        ApiError::Unknown(e.to_string())
    }
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unknown(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_collapse_to_one_case() {
        let server = tmdb::TmdbError::Server {
            status_code: 503,
            message: "upstream unavailable".to_string(),
        };
        let error = ApiError::from(server);

        let ApiError::Unknown(message) = &error;
        assert!(!message.is_empty());
        assert!(message.contains("503"));
    }

    #[test]
    fn test_invalid_request_keeps_its_message() {
        let invalid = tmdb::TmdbError::InvalidRequest("relative URL".to_string());
        let error = ApiError::from(invalid);
        assert!(error.message().contains("relative URL"));
    }
}
