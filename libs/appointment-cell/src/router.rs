// libs/appointment-cell/src/router.rs
use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;
use crate::services::AppointmentStore;

/// One store per server process, shared by every request. Handlers only
/// touch it from the blocking pool.
pub struct AppointmentState {
    pub store: Mutex<AppointmentStore>,
}

impl AppointmentState {
    pub fn new(store: AppointmentStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(AppointmentStore::from_config(config))
    }
}

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route("/", post(handlers::schedule_appointment))
        .route("/mine", get(handlers::get_actor_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route("/patients/{patient_name}", get(handlers::get_patient_appointments))
        .route("/patients/{patient_name}/next", get(handlers::get_next_appointment))
        .route("/doctors/{doctor_name}", get(handlers::get_doctor_appointments))
        .route("/doctors/{doctor_name}/patients", get(handlers::get_doctor_patients))
        .with_state(state)
}
