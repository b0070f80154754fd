// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Identifier shared by seed and local appointments.
///
/// Seed rows use small integers; local rows get values from the store's
/// allocator, which always hands out something above every id it knows about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AppointmentId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AppointmentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Persisted with the dashboard's field names (`patientName`, `doctorName`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_name: String,
    pub doctor_name: String,
    /// Only field used for ordering.
    pub date: NaiveDate,
    /// Display text such as "10:00 AM"; never compared.
    pub time: String,
    pub reason: String,
}

impl Appointment {
    pub fn new(
        id: u64,
        patient_name: &str,
        doctor_name: &str,
        date: NaiveDate,
        time: &str,
        reason: &str,
    ) -> Self {
        Self {
            id: AppointmentId(id),
            patient_name: patient_name.to_string(),
            doctor_name: doctor_name.to_string(),
            date,
            time: time.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Where an appointment in a merged listing came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentSource {
    Seed,
    Local,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Raw form input for a new appointment. Fields default to empty so that a
/// missing field reports as a validation failure rather than a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentRequest {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub reason: String,
}

impl ScheduleAppointmentRequest {
    pub fn new(patient_name: &str, doctor_name: &str, date: &str, time: &str, reason: &str) -> Self {
        Self {
            patient_name: patient_name.to_string(),
            doctor_name: doctor_name.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Names of required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("patientName", &self.patient_name),
            ("doctorName", &self.doctor_name),
            ("date", &self.date),
            ("time", &self.time),
            ("reason", &self.reason),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelAppointmentResponse {
    pub appointment_id: AppointmentId,
    pub cancelled: bool,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown doctor: {0}")]
    UnknownDoctor(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No appointment ids left to allocate")]
    IdSpaceExhausted,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::UnknownDoctor(name) => {
                AppError::ValidationError(format!("Unknown doctor: {}", name))
            }
            AppointmentError::Storage(msg) => AppError::Storage(msg),
            AppointmentError::IdSpaceExhausted => {
                AppError::Storage("No appointment ids left to allocate".to_string())
            }
        }
    }
}
