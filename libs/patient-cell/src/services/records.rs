use anyhow::Result;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_database::MockApiClient;

use crate::models::{BillingRecord, MedicalRecord};

const MEDICAL_RECORDS_PATH: &str = "/medical-records";
const BILLING_RECORDS_PATH: &str = "/billing-records";

/// Read-only view over the remote medical-record and billing collections.
///
/// Each collection keeps its last successful fetch; a failed refresh leaves it
/// untouched.
pub struct RecordsService {
    medical_client: MockApiClient,
    billing_client: MockApiClient,
    medical_records: RwLock<Vec<MedicalRecord>>,
    billing_records: RwLock<Vec<BillingRecord>>,
}

impl RecordsService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clients(
            MockApiClient::new(&config.mock_api_url),
            MockApiClient::new(&config.billing_api_url),
        )
    }

    pub fn with_clients(medical_client: MockApiClient, billing_client: MockApiClient) -> Self {
        Self {
            medical_client,
            billing_client,
            medical_records: RwLock::new(Vec::new()),
            billing_records: RwLock::new(Vec::new()),
        }
    }

    pub async fn refresh_medical_records(&self) -> Result<()> {
        debug!("Fetching medical records");
        match self.medical_client.get::<Vec<MedicalRecord>>(MEDICAL_RECORDS_PATH).await {
            Ok(records) => {
                *self.medical_records.write().await = records;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load medical records: {}", e);
                Err(e)
            }
        }
    }

    pub async fn refresh_billing_records(&self) -> Result<()> {
        debug!("Fetching billing records");
        match self.billing_client.get::<Vec<BillingRecord>>(BILLING_RECORDS_PATH).await {
            Ok(records) => {
                *self.billing_records.write().await = records;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load billing records: {}", e);
                Err(e)
            }
        }
    }

    pub async fn medical_records_for(&self, patient_name: &str) -> Vec<MedicalRecord> {
        self.medical_records
            .read()
            .await
            .iter()
            .filter(|record| record.patient_name == patient_name)
            .cloned()
            .collect()
    }

    /// The dashboard's "recent visit summary": the first record for the patient.
    pub async fn latest_visit(&self, patient_name: &str) -> Option<MedicalRecord> {
        self.medical_records
            .read()
            .await
            .iter()
            .find(|record| record.patient_name == patient_name)
            .cloned()
    }

    pub async fn billing_for(&self, patient_name: &str) -> Vec<BillingRecord> {
        self.billing_records
            .read()
            .await
            .iter()
            .filter(|record| record.patient_name == patient_name)
            .cloned()
            .collect()
    }
}
