use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::services::RecordsService;

pub async fn get_medical_records(
    State(service): State<Arc<RecordsService>>,
    Path(patient_name): Path<String>,
) -> Json<Value> {
    let stale = service.refresh_medical_records().await.is_err();
    let records = service.medical_records_for(&patient_name).await;
    let latest_visit = service.latest_visit(&patient_name).await;

    Json(json!({
        "records": records,
        "latestVisit": latest_visit,
        "stale": stale,
    }))
}

pub async fn get_billing_records(
    State(service): State<Arc<RecordsService>>,
    Path(patient_name): Path<String>,
) -> Json<Value> {
    let stale = service.refresh_billing_records().await.is_err();
    let records = service.billing_for(&patient_name).await;

    Json(json!({
        "records": records,
        "stale": stale,
    }))
}
