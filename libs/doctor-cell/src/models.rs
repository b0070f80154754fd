use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Name appointments are keyed on, e.g. "Jason Held".
    pub name: String,
    /// Name shown in pickers, e.g. "Dr. Jason Held".
    pub display_name: String,
}

impl Doctor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: format!("Dr. {}", name),
        }
    }
}

/// A message in the remote conversations collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub receiver: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<MessagingError> for shared_models::AppError {
    fn from(err: MessagingError) -> Self {
        match err {
            MessagingError::ValidationError(msg) => shared_models::AppError::ValidationError(msg),
            MessagingError::ExternalServiceError(msg) => shared_models::AppError::ExternalService(msg),
        }
    }
}
