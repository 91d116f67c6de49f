use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Please provide a valid input")]
    InvalidInput,

    #[error("{0}")]
    Configuration(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text placed in the `message` field of the error envelope.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput => self.to_string(),
            Self::Configuration(msg) => msg.clone(),
            Self::Upstream(msg) | Self::Internal(msg) => {
                format!("Error processing message: {}", msg)
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}

#[cfg_attr(not(feature = "server"), allow(dead_code))]
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

impl From<&AppError> for ErrorEnvelope {
    fn from(err: &AppError) -> Self {
        Self {
            status: "error",
            message: err.user_message(),
        }
    }
}

#[cfg(feature = "server")]
mod server_impl {
    use super::{AppError, ErrorEnvelope};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl AppError {
        pub fn status_code(&self) -> StatusCode {
            if self.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            (self.status_code(), Json(ErrorEnvelope::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::InvalidInput.user_message(),
            "Please provide a valid input"
        );
        assert_eq!(
            AppError::Configuration("GROQ_API_KEY is not set".into()).user_message(),
            "GROQ_API_KEY is not set"
        );
        assert_eq!(
            AppError::Upstream("401 Unauthorized".into()).user_message(),
            "Error processing message: 401 Unauthorized"
        );
        assert_eq!(
            AppError::Internal("boom".into()).user_message(),
            "Error processing message: boom"
        );
    }

    #[test]
    fn test_invalid_input_display_matches_envelope() {
        let err = AppError::InvalidInput;
        assert_eq!(err.to_string(), err.user_message());
    }

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(ErrorEnvelope::from(&AppError::InvalidInput)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "Please provide a valid input"})
        );
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn test_into_response_status() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        let resp = AppError::InvalidInput.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::Upstream("timed out".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Error processing message: timed out");
    }
}
