use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Body sent when the `text` query parameter is absent or empty
pub const MISSING_TEXT_MESSAGE: &str = "Error: \"text\" query parameter is required.";

/// Body sent when the provider answers with anything but 200
pub const PROVIDER_FAILURE_MESSAGE: &str = "Failed to fetch audio from provider.";

/// Body sent when the provider cannot be reached
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Server error while trying to fetch audio.";

/// TTS proxy errors
///
/// Each variant renders as a fixed plain-text body; provider bodies and
/// transport details never reach the caller.
#[derive(Debug, Error)]
pub enum TtsError {
    /// The caller did not supply any text
    #[error("\"text\" query parameter is missing or empty")]
    MissingText,

    /// Provider answered with a non-200 status, relayed as-is
    #[error("provider responded with {0}")]
    ProviderStatus(StatusCode),

    /// Provider could not be reached
    #[error("provider unreachable: {0}")]
    Transport(String),

    /// Audio stream failed after the response headers were sent
    #[error("audio stream interrupted: {0}")]
    Stream(String),

    /// Invalid provider setup
    #[error("configuration error: {0}")]
    Config(String),
}

impl TtsError {
    /// Get the HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingText => StatusCode::BAD_REQUEST,
            Self::ProviderStatus(status) => *status,
            Self::Transport(_) | Self::Stream(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to API consumers
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::MissingText => MISSING_TEXT_MESSAGE,
            Self::ProviderStatus(_) => PROVIDER_FAILURE_MESSAGE,
            Self::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
            Self::Stream(_) | Self::Config(_) => "Internal server error",
        }
    }
}

impl IntoResponse for TtsError {
    fn into_response(self) -> Response {
        (self.status_code(), self.client_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(error: TtsError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn missing_text_is_a_client_error() {
        let (status, body) = render(TtsError::MissingText).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Error: \"text\" query parameter is required.");
    }

    #[tokio::test]
    async fn provider_status_is_relayed_without_provider_body() {
        let (status, body) = render(TtsError::ProviderStatus(StatusCode::TOO_MANY_REQUESTS)).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, "Failed to fetch audio from provider.");
    }

    #[tokio::test]
    async fn transport_failure_hides_cause() {
        let (status, body) = render(TtsError::Transport("dns error: no such host".to_owned())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Server error while trying to fetch audio.");
    }
}
