use std::sync::Arc;
use axum::{routing::get, Router};

use crate::handlers::*;
use crate::services::RecordsService;

pub fn create_patient_router(service: Arc<RecordsService>) -> Router {
    Router::new()
        .route("/{patient_name}/medical-records", get(get_medical_records))
        .route("/{patient_name}/billing", get(get_billing_records))
        .with_state(service)
}
