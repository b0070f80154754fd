use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use shared_config::AppConfig;
use shared_models::SessionUser;

pub struct TestConfig {
    pub storage_key: String,
    pub mock_api_url: String,
    pub billing_api_url: String,
    pub enforce_doctor_directory: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            storage_key: "patientAppointments".to_string(),
            mock_api_url: "http://localhost:54321".to_string(),
            billing_api_url: "http://localhost:54322".to_string(),
            enforce_doctor_directory: true,
        }
    }
}

impl TestConfig {
    /// Point both remote collections at one mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            mock_api_url: uri.to_string(),
            billing_api_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn lenient() -> Self {
        Self {
            enforce_doctor_directory: false,
            ..Self::default()
        }
    }

    /// Config whose storage directory is a fresh temp dir. Keep the returned
    /// `TempDir` alive for as long as the store is in use.
    pub fn to_app_config(&self) -> (AppConfig, TempDir) {
        let dir = tempfile::tempdir().expect("Failed to create temp storage dir");
        let config = AppConfig {
            storage_dir: dir.path().to_path_buf(),
            storage_key: self.storage_key.clone(),
            mock_api_url: self.mock_api_url.clone(),
            billing_api_url: self.billing_api_url.clone(),
            enforce_doctor_directory: self.enforce_doctor_directory,
            port: 0,
        };
        (config, dir)
    }

    pub fn to_arc(&self) -> (Arc<AppConfig>, TempDir) {
        let (config, dir) = self.to_app_config();
        (Arc::new(config), dir)
    }
}

pub struct TestUser;

impl TestUser {
    pub fn jane() -> SessionUser {
        SessionUser::patient("Jane Doe")
    }

    pub fn julia() -> SessionUser {
        SessionUser::patient("Julia Ribeiro")
    }

    pub fn dr_held() -> SessionUser {
        SessionUser::doctor("Jason Held")
    }

    pub fn dr_chen() -> SessionUser {
        SessionUser::doctor("Vincent Chen")
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn medical_record(id: &str, patient_name: &str, diagnosis: &str) -> Value {
        json!({
            "id": id,
            "patientName": patient_name,
            "diagnosis": diagnosis,
            "medications": "Ibuprofen",
            "lastVisit": "2025-04-02"
        })
    }

    pub fn billing_record(id: &str, patient_name: &str, amount: Value, status: &str) -> Value {
        json!({
            "id": id,
            "patientName": patient_name,
            "date": "2025-04-02",
            "description": "Consultation",
            "amount": amount,
            "status": status
        })
    }

    pub fn message(id: &str, sender: &str, receiver: &str, text: &str) -> Value {
        json!({
            "id": id,
            "sender": sender,
            "receiver": receiver,
            "text": text,
            "timestamp": "2025-05-01T09:30:00Z"
        })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "error": message })
    }
}
