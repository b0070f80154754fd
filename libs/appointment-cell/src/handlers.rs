// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_models::error::AppError;
use shared_models::SessionUser;

use crate::models::{AppointmentId, CancelAppointmentResponse, ScheduleAppointmentRequest};
use crate::router::AppointmentState;
use crate::services::AppointmentStore;

/// Run `f` against the store on the blocking pool; storage is plain file I/O.
async fn with_store<T, F>(state: Arc<AppointmentState>, f: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce(&mut AppointmentStore) -> Result<T, AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut store = state
            .store
            .lock()
            .map_err(|_| AppError::Internal("Appointment store lock poisoned".to_string()))?;
        f(&mut *store)
    })
    .await
    .map_err(|e| {
        error!("Appointment store task failed: {}", e);
        AppError::Internal("Appointment store task failed".to_string())
    })?
}

fn appointment_id(path: Result<Path<u64>, PathRejection>) -> Result<AppointmentId, AppError> {
    let Path(id) = path.map_err(|e| AppError::ValidationError(e.body_text()))?;
    Ok(AppointmentId(id))
}

fn name(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    let Path(name) = path.map_err(|e| AppError::ValidationError(e.body_text()))?;
    Ok(name)
}

// ==============================================================================
// LISTINGS
// ==============================================================================

pub async fn get_patient_appointments(
    State(state): State<Arc<AppointmentState>>,
    patient_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let patient_name = name(patient_name)?;
    let appointments = {
        let patient_name = patient_name.clone();
        with_store(state, move |store| Ok(store.list_for_patient(&patient_name))).await?
    };

    Ok(Json(json!({
        "patientName": patient_name,
        "appointments": appointments,
    })))
}

pub async fn get_next_appointment(
    State(state): State<Arc<AppointmentState>>,
    patient_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let patient_name = name(patient_name)?;
    let appointment = {
        let patient_name = patient_name.clone();
        with_store(state, move |store| Ok(store.next_appointment(&patient_name))).await?
    };

    Ok(Json(json!({
        "patientName": patient_name,
        "appointment": appointment,
    })))
}

pub async fn get_doctor_appointments(
    State(state): State<Arc<AppointmentState>>,
    doctor_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let doctor_name = name(doctor_name)?;
    let appointments = {
        let doctor_name = doctor_name.clone();
        with_store(state, move |store| Ok(store.list_for_doctor(&doctor_name))).await?
    };

    Ok(Json(json!({
        "doctorName": doctor_name,
        "appointments": appointments,
    })))
}

/// The doctor's "your patients" roster.
pub async fn get_doctor_patients(
    State(state): State<Arc<AppointmentState>>,
    doctor_name: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let doctor_name = name(doctor_name)?;
    let patients = {
        let doctor_name = doctor_name.clone();
        with_store(state, move |store| Ok(store.patients_for_doctor(&doctor_name))).await?
    };

    Ok(Json(json!({
        "doctorName": doctor_name,
        "patients": patients,
    })))
}

/// `?name=Jane%20Doe&role=patient`: the listing for whoever the session says
/// is signed in.
pub async fn get_actor_appointments(
    State(state): State<Arc<AppointmentState>>,
    actor: Result<Query<SessionUser>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(actor) = actor.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let appointments = {
        let actor = actor.clone();
        with_store(state, move |store| Ok(store.list_for_actor(&actor))).await?
    };

    Ok(Json(json!({
        "name": actor.name,
        "role": actor.role,
        "appointments": appointments,
    })))
}

pub async fn get_appointment(
    State(state): State<Arc<AppointmentState>>,
    appointment_id_path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = appointment_id(appointment_id_path)?;

    with_store(state, move |store| {
        let appointment = store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))?;

        Ok(Json(json!({
            "appointment": appointment,
            "source": store.source_of(id),
        })))
    })
    .await
}

// ==============================================================================
// MUTATIONS
// ==============================================================================

pub async fn schedule_appointment(
    State(state): State<Arc<AppointmentState>>,
    request: Result<Json<ScheduleAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(request) = request.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let appointment = with_store(state, move |store| Ok(store.schedule(request)?)).await?;

    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

pub async fn cancel_appointment(
    State(state): State<Arc<AppointmentState>>,
    appointment_id_path: Result<Path<u64>, PathRejection>,
) -> Result<Json<CancelAppointmentResponse>, AppError> {
    let id = appointment_id(appointment_id_path)?;
    let cancelled = with_store(state, move |store| Ok(store.cancel(id)?)).await?;

    Ok(Json(CancelAppointmentResponse {
        appointment_id: id,
        cancelled,
    }))
}
