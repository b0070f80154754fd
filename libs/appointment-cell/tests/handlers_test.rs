use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::router::{appointment_routes, AppointmentState};
use appointment_cell::services::{AppointmentStore, MemoryStorage};
use shared_config::AppConfig;

fn create_test_app() -> Router {
    let store = AppointmentStore::new(Box::new(MemoryStorage::new()), &AppConfig::default());
    appointment_routes(Arc::new(AppointmentState::new(store)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_patient_listing_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/patients/Jane%20Doe")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patientName"], "Jane Doe");
    let appointments = body["appointments"].as_array().unwrap();
    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0]["date"], "2025-05-15");
    assert_eq!(appointments[1]["date"], "2025-05-18");
}

#[tokio::test]
async fn test_next_appointment_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/patients/Jane%20Doe/next")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointment"]["id"], 1);

    let (status, body) = send(&app, get("/patients/Nobody/next")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointment"], Value::Null);
}

#[tokio::test]
async fn test_schedule_then_list_and_cancel() {
    let app = create_test_app();

    let (status, created) = send(
        &app,
        post_json(
            "/",
            json!({
                "patientName": "Jane Doe",
                "doctorName": "Vincent Chen",
                "date": "2025-06-01",
                "time": "9:00 AM",
                "reason": "Checkup"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_u64().unwrap();
    assert!(id > 5);

    let (_, doctor) = send(&app, get("/doctors/Vincent%20Chen")).await;
    let doctor_ids: Vec<u64> = doctor["appointments"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|a| a["id"].as_u64())
        .collect();
    assert_eq!(doctor_ids, vec![2, id]);

    let (status, detail) = send(&app, get(&format!("/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["source"], "local");

    let (status, cancelled) = send(&app, post_json(&format!("/{}/cancel", id), json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["cancelled"], true);
    assert_eq!(cancelled["appointmentId"], id);

    let (_, again) = send(&app, post_json(&format!("/{}/cancel", id), json!({}))).await;
    assert_eq!(again["cancelled"], false);

    let (status, _) = send(&app, get(&format!("/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_schedule_validation_error() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/",
            json!({
                "patientName": "Jane Doe",
                "doctorName": "Vincent Chen",
                "date": "2025-06-01",
                "time": "9:00 AM",
                "reason": ""
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("reason"));

    let (_, listing) = send(&app, get("/patients/Jane%20Doe")).await;
    assert_eq!(listing["appointments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_schedule_unknown_doctor() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        post_json(
            "/",
            json!({
                "patientName": "Jane Doe",
                "doctorName": "Nurse Emily",
                "date": "2025-06-01",
                "time": "9:00 AM",
                "reason": "Checkup"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Nurse Emily"));
}

#[tokio::test]
async fn test_cancel_seed_appointment_returns_false() {
    let app = create_test_app();

    let (status, body) = send(&app, post_json("/1/cancel", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cancelled"], false);

    let (_, detail) = send(&app, get("/1")).await;
    assert_eq!(detail["source"], "seed");
}

#[tokio::test]
async fn test_actor_listing_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/mine?name=Yuhao%20Gao&role=doctor")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "doctor");
    assert_eq!(body["appointments"][0]["patientName"], "Julia Ribeiro");

    let (status, body) = send(&app, get("/mine?name=Sara&role=admin")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, get("/mine?name=Sara")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_malformed_schedule_body_is_a_json_error() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"patientName\": "))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, listing) = send(&app, get("/patients/Jane%20Doe")).await;
    assert_eq!(listing["appointments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_non_numeric_id_is_a_json_error() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, post_json("/abc/cancel", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_doctor_patient_roster_endpoint() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/doctors/Vincent%20Chen/patients")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["doctorName"], "Vincent Chen");
    assert_eq!(body["patients"], json!(["Julia Ribeiro"]));

    let (status, _) = send(
        &app,
        post_json(
            "/",
            json!({
                "patientName": "Morgan",
                "doctorName": "Vincent Chen",
                "date": "2025-05-10",
                "time": "9:00 AM",
                "reason": "Checkup"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, get("/doctors/Vincent%20Chen/patients")).await;
    assert_eq!(body["patients"], json!(["Morgan", "Julia Ribeiro"]));
}
