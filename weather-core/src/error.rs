//! Error taxonomy for the submission and retrieval flows.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to callers of [`crate::WeatherService`].
///
/// Every variant is terminal for the current request only.
#[derive(Debug, Error)]
pub enum Error {
    /// The submission was malformed; no provider call was made.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The provider answered but reported a problem with the query.
    #[error("Weather API error: {0}")]
    Provider(String),

    /// The provider could not be reached or answered with a non-success status.
    #[error("{0}")]
    Transport(String),

    #[error("Weather data not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Provider(_) => 400,
            Self::NotFound(_) => 404,
            Self::Transport(_) | Self::Storage(_) | Self::Unexpected(_) => 500,
        }
    }

    /// Message placed in the `detail` field of the error body.
    pub fn detail(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Provider(info) => format!("Weather API error: {info}"),
            Self::Transport(msg) => msg.clone(),
            Self::NotFound(_) => "Weather data not found".to_string(),
            Self::Storage(msg) | Self::Unexpected(msg) => format!("Internal server error: {msg}"),
        }
    }
}

/// Outcome classes of a single call to the weather provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach provider: {0}")]
    Unreachable(String),

    #[error("provider responded with status {0}")]
    Status(u16),

    #[error("provider reported an error: {0}")]
    Reported(String),

    #[error("provider response was not valid JSON: {0}")]
    InvalidBody(String),
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unreachable(msg) => {
                Error::Transport(format!("Failed to connect to weather service: {msg}"))
            }
            ProviderError::Status(_) => Error::Transport(
                "Failed to fetch weather data from WeatherStack API".to_string(),
            ),
            ProviderError::Reported(info) => Error::Provider(info),
            ProviderError::InvalidBody(msg) => Error::Unexpected(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(Error::Validation("x".into()).status_code(), 422);
        assert_eq!(Error::Provider("x".into()).status_code(), 400);
        assert_eq!(Error::Transport("x".into()).status_code(), 500);
        assert_eq!(Error::NotFound("x".into()).status_code(), 404);
        assert_eq!(Error::Unexpected("x".into()).status_code(), 500);
    }

    #[test]
    fn reported_provider_error_embeds_info() {
        let err: Error = ProviderError::Reported("Invalid location".into()).into();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.detail(), "Weather API error: Invalid location");
    }

    #[test]
    fn non_success_status_maps_to_transport() {
        let err: Error = ProviderError::Status(503).into();

        assert_eq!(err.status_code(), 500);
        assert!(err.detail().contains("Failed to fetch weather data"));
    }

    #[test]
    fn invalid_body_maps_to_unexpected() {
        let err: Error = ProviderError::InvalidBody("expected value at line 1".into()).into();

        assert!(matches!(err, Error::Unexpected(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.detail(), "Internal server error: expected value at line 1");
    }

    #[test]
    fn storage_error_is_internal() {
        let err = Error::Storage("disk full".into());

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.detail(), "Internal server error: disk full");
    }

    #[test]
    fn not_found_detail_hides_id() {
        let err = Error::NotFound("abc".into());
        assert_eq!(err.detail(), "Weather data not found");
    }
}
