// libs/appointment-cell/src/services/store.rs
use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;
use shared_models::{Role, SessionUser};

use crate::models::{
    Appointment, AppointmentError, AppointmentId, AppointmentSource, ScheduleAppointmentRequest,
};
use crate::services::seed::seed_appointments;
use crate::services::storage::{FileStorage, KeyValueStorage};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Merged view over the immutable seed appointments and the locally persisted
/// ones, plus the schedule/cancel operations on the local set.
///
/// Every listing walks `[seed.., local..]` (local in persisted order), filters
/// on exact name equality and then stable-sorts by `date`, so same-day entries
/// keep that merge order.
///
/// The local set is re-read from storage on every call; nothing is cached
/// between operations, so another writer sharing the storage is seen at the
/// next call (last write wins).
pub struct AppointmentStore {
    seed: Vec<Appointment>,
    storage: Box<dyn KeyValueStorage>,
    storage_key: String,
    directory: DoctorDirectory,
    enforce_doctor_directory: bool,
    last_allocated: u64,
}

impl AppointmentStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, config: &AppConfig) -> Self {
        Self::with_seed(seed_appointments(), storage, config)
    }

    pub fn with_seed(
        seed: Vec<Appointment>,
        storage: Box<dyn KeyValueStorage>,
        config: &AppConfig,
    ) -> Self {
        Self {
            seed,
            storage,
            storage_key: config.storage_key.clone(),
            directory: DoctorDirectory::default(),
            enforce_doctor_directory: config.enforce_doctor_directory,
            last_allocated: 0,
        }
    }

    /// File-backed store rooted at `config.storage_dir`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Box::new(FileStorage::new(&config.storage_dir)), config)
    }

    pub fn seed(&self) -> &[Appointment] {
        &self.seed
    }

    // ==========================================================================
    // PERSISTED LOCAL SET
    // ==========================================================================

    /// The persisted local appointments. Absent, unreadable or malformed
    /// storage reads as empty.
    pub fn local_appointments(&self) -> Vec<Appointment> {
        let raw = match self.storage.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read '{}' from storage, treating as empty: {}", self.storage_key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Appointment>>(&raw) {
            Ok(appointments) => appointments,
            Err(e) => {
                warn!("Stored '{}' is not a valid appointment list, treating as empty: {}", self.storage_key, e);
                Vec::new()
            }
        }
    }

    /// An empty local set removes the key rather than storing `[]`.
    fn write_local(&self, appointments: &[Appointment]) -> Result<(), AppointmentError> {
        if appointments.is_empty() {
            return self
                .storage
                .remove_item(&self.storage_key)
                .map_err(|e| AppointmentError::Storage(e.to_string()));
        }

        let payload = serde_json::to_string(appointments)
            .map_err(|e| AppointmentError::Storage(e.to_string()))?;

        self.storage
            .set_item(&self.storage_key, &payload)
            .map_err(|e| AppointmentError::Storage(e.to_string()))
    }

    fn seed_ids(&self) -> HashSet<AppointmentId> {
        self.seed.iter().map(|appointment| appointment.id).collect()
    }

    /// `[seed.., local..]`, minus local rows that reuse a seed id.
    fn merged(&self) -> Vec<Appointment> {
        let seed_ids = self.seed_ids();
        let mut merged = self.seed.clone();

        for appointment in self.local_appointments() {
            if seed_ids.contains(&appointment.id) {
                warn!("Ignoring stored appointment {} that collides with a seed id", appointment.id);
                continue;
            }
            merged.push(appointment);
        }

        merged
    }

    fn list_matching<F>(&self, predicate: F) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        let mut appointments: Vec<Appointment> =
            self.merged().into_iter().filter(|a| predicate(a)).collect();
        // `sort_by_key` is stable.
        appointments.sort_by_key(|appointment| appointment.date);
        appointments
    }

    // ==========================================================================
    // READS
    // ==========================================================================

    pub fn list_for_patient(&self, patient_name: &str) -> Vec<Appointment> {
        debug!("Listing appointments for patient: {}", patient_name);
        self.list_matching(|a| a.patient_name == patient_name)
    }

    pub fn list_for_doctor(&self, doctor_name: &str) -> Vec<Appointment> {
        debug!("Listing appointments for doctor: {}", doctor_name);
        self.list_matching(|a| a.doctor_name == doctor_name)
    }

    pub fn list_for_actor(&self, actor: &SessionUser) -> Vec<Appointment> {
        match actor.role {
            Role::Patient => self.list_for_patient(&actor.name),
            Role::Doctor => self.list_for_doctor(&actor.name),
        }
    }

    /// Distinct patient names on the doctor's listing, in first-seen order.
    pub fn patients_for_doctor(&self, doctor_name: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.list_for_doctor(doctor_name)
            .into_iter()
            .filter(|appointment| seen.insert(appointment.patient_name.clone()))
            .map(|appointment| appointment.patient_name)
            .collect()
    }

    /// Earliest-dated appointment for the patient; same-day ties resolve to the
    /// first one in merge order.
    pub fn next_appointment(&self, patient_name: &str) -> Option<Appointment> {
        self.list_for_patient(patient_name).into_iter().next()
    }

    pub fn get(&self, id: AppointmentId) -> Option<Appointment> {
        self.merged().into_iter().find(|appointment| appointment.id == id)
    }

    pub fn source_of(&self, id: AppointmentId) -> Option<AppointmentSource> {
        if self.seed_ids().contains(&id) {
            Some(AppointmentSource::Seed)
        } else if self.local_appointments().iter().any(|a| a.id == id) {
            Some(AppointmentSource::Local)
        } else {
            None
        }
    }

    // ==========================================================================
    // MUTATIONS
    // ==========================================================================

    pub fn schedule(
        &mut self,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Scheduling appointment for {} with {}", request.patient_name, request.doctor_name);

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(AppointmentError::ValidationError(format!(
                "Please fill out all fields: {} required",
                missing.join(", ")
            )));
        }

        let date = NaiveDate::parse_from_str(request.date.trim(), DATE_FORMAT).map_err(|_| {
            AppointmentError::ValidationError(format!(
                "Invalid date '{}', expected YYYY-MM-DD",
                request.date
            ))
        })?;

        if !self.directory.contains(&request.doctor_name) {
            if self.enforce_doctor_directory {
                warn!("Rejected booking with unknown doctor: {}", request.doctor_name);
                return Err(AppointmentError::UnknownDoctor(request.doctor_name));
            }
            warn!("Booking with doctor outside the directory: {}", request.doctor_name);
        }

        let mut local = self.local_appointments();
        let id = self.allocate_id(&local)?;

        let appointment = Appointment {
            id,
            patient_name: request.patient_name,
            doctor_name: request.doctor_name,
            date,
            time: request.time,
            reason: request.reason,
        };

        local.push(appointment.clone());
        self.write_local(&local)?;

        info!("Scheduled appointment {} for {} on {}", appointment.id, appointment.patient_name, appointment.date);
        Ok(appointment)
    }

    /// Remove a local appointment. Seed and unknown ids are a no-op returning
    /// `false`.
    pub fn cancel(&mut self, id: AppointmentId) -> Result<bool, AppointmentError> {
        debug!("Cancelling appointment {}", id);

        if self.seed_ids().contains(&id) {
            debug!("Appointment {} is a seed appointment and cannot be cancelled", id);
            return Ok(false);
        }

        let mut local = self.local_appointments();
        let before = local.len();
        local.retain(|appointment| appointment.id != id);

        if local.len() == before {
            debug!("Appointment {} not found in local set", id);
            return Ok(false);
        }

        self.write_local(&local)?;
        info!("Cancelled appointment {}", id);
        Ok(true)
    }

    /// Strictly above the previous allocation and every known id, and no lower
    /// than the current time in milliseconds. Fails once the id space above
    /// the highest known id is used up.
    fn allocate_id(&mut self, local: &[Appointment]) -> Result<AppointmentId, AppointmentError> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let highest_known = self
            .seed
            .iter()
            .chain(local)
            .map(|appointment| appointment.id.0)
            .max()
            .unwrap_or(0);

        let floor = self.last_allocated.max(highest_known);
        let above_floor = floor.checked_add(1).ok_or_else(|| {
            warn!("No appointment id left above {}", floor);
            AppointmentError::IdSpaceExhausted
        })?;

        let next = now.max(above_floor);
        self.last_allocated = next;
        Ok(AppointmentId(next))
    }
}
