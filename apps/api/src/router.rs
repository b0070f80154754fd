use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::router::{appointment_routes, AppointmentState};
use doctor_cell::router::{doctor_routes, DoctorState};
use patient_cell::router::create_patient_router;
use patient_cell::services::RecordsService;
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "PMS+ API is running!" }))
        .nest("/appointments", appointment_routes(Arc::new(AppointmentState::from_config(&config))))
        .nest("/doctors", doctor_routes(Arc::new(DoctorState::new(&config))))
        .nest("/patients", create_patient_router(Arc::new(RecordsService::new(&config))))
}
