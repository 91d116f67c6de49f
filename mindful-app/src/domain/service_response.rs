use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// JSON envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServiceResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            response: None,
            message: Some(message.into()),
        }
    }

    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            response: Some(response.into()),
            message: None,
        }
    }
}
