use mindful_errors::AppError;
use serde::Deserialize;

/// Body accepted by `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Parses a raw request body. Anything that is not a JSON object with a
    /// string `message` field is invalid input.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected chat body: {}", e);
            AppError::InvalidInput
        })
    }

    /// Returns the message untouched if it holds anything besides whitespace.
    pub fn validated_message(&self) -> Result<&str, AppError> {
        if self.message.trim().is_empty() {
            return Err(AppError::InvalidInput);
        }
        Ok(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_body() {
        let req = ChatRequest::parse(br#"{"message":"I feel anxious"}"#).unwrap();
        assert_eq!(req.validated_message().unwrap(), "I feel anxious");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let req = ChatRequest::parse(br#"{"message":"hi","mood":3}"#).unwrap();
        assert_eq!(req.message, "hi");
    }

    #[test]
    fn test_parse_invalid_bodies() {
        let bodies: [&[u8]; 6] = [
            b"{}",
            b"",
            b"not json",
            b"[]",
            br#"{"message":null}"#,
            br#"{"message":42}"#,
        ];
        for body in bodies {
            assert_eq!(ChatRequest::parse(body).unwrap_err(), AppError::InvalidInput);
        }
    }

    #[test]
    fn test_blank_messages_rejected() {
        for message in ["", "   ", "\n\t "] {
            assert_eq!(
                ChatRequest::new(message).validated_message().unwrap_err(),
                AppError::InvalidInput
            );
        }
    }

    #[test]
    fn test_message_kept_verbatim() {
        let req = ChatRequest::new("  hello there \n");
        assert_eq!(req.validated_message().unwrap(), "  hello there \n");
    }
}
