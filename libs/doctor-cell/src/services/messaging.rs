use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_database::MockApiClient;

use crate::models::{Message, MessagingError, SendMessageRequest};

const CONVERSATIONS_PATH: &str = "/conversations";

/// Client-side view of the remote conversations collection.
///
/// A failed fetch or post never clears what was already loaded.
pub struct ConversationService {
    client: MockApiClient,
    messages: RwLock<Vec<Message>>,
}

impl ConversationService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(MockApiClient::new(&config.mock_api_url))
    }

    pub fn with_client(client: MockApiClient) -> Self {
        Self {
            client,
            messages: RwLock::new(Vec::new()),
        }
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    /// Reload the snapshot from the remote store. On failure the previous
    /// snapshot is kept and the error is returned for the caller to report.
    pub async fn refresh(&self) -> Result<Vec<Message>, MessagingError> {
        debug!("Fetching conversations");

        match self.client.get::<Vec<Message>>(CONVERSATIONS_PATH).await {
            Ok(fetched) => {
                let mut messages = self.messages.write().await;
                *messages = fetched;
                Ok(messages.clone())
            }
            Err(e) => {
                warn!("Failed to load conversations: {}", e);
                Err(MessagingError::ExternalServiceError(e.to_string()))
            }
        }
    }

    pub async fn send(&self, request: SendMessageRequest) -> Result<Message, MessagingError> {
        if request.receiver.is_empty() {
            return Err(MessagingError::ValidationError("receiver is required".to_string()));
        }
        if request.text.trim().is_empty() {
            return Err(MessagingError::ValidationError("message text is required".to_string()));
        }

        debug!("Sending message from {} to {}", request.sender, request.receiver);

        let body = json!({
            "sender": request.sender,
            "receiver": request.receiver,
            "text": request.text,
            "timestamp": Utc::now().to_rfc3339(),
        });

        let created: Message = self
            .client
            .post(CONVERSATIONS_PATH, body)
            .await
            .map_err(|e| {
                warn!("Failed to send message: {}", e);
                MessagingError::ExternalServiceError(e.to_string())
            })?;

        self.messages.write().await.push(created.clone());
        info!("Message {} sent to {}", created.id, created.receiver);

        Ok(created)
    }
}
