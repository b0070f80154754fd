use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::{ConversationService, DoctorDirectory};

pub struct DoctorState {
    pub directory: DoctorDirectory,
    pub conversations: ConversationService,
}

impl DoctorState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            directory: DoctorDirectory::default(),
            conversations: ConversationService::new(config),
        }
    }
}

pub fn doctor_routes(state: Arc<DoctorState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors))
        .route(
            "/conversations",
            get(handlers::list_conversations).post(handlers::send_message),
        )
        .with_state(state)
}
