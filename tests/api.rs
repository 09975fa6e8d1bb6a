use std::{collections::HashMap, path::PathBuf, sync::Arc};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use dx_assistant::{
    api::{router, AppState},
    config::Settings,
    data::{
        dataset::TrainingRecord,
        tables::{MetadataTable, SeverityTable},
    },
    engine::Engine,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_state() -> AppState {
    let records = vec![
        TrainingRecord {
            disease: "Flu".to_string(),
            symptoms: vec!["fever".to_string(), "headache".to_string()],
        },
        TrainingRecord {
            disease: "Cold".to_string(),
            symptoms: vec!["cough".to_string()],
        },
    ];
    let severity = SeverityTable::from_entries([
        ("fever".to_string(), 8.0),
        ("headache".to_string(), 5.0),
        ("cough".to_string(), 3.0),
    ]);
    let mut descriptions = HashMap::new();
    descriptions.insert("Flu".to_string(), "An acute viral infection.".to_string());
    let metadata = MetadataTable::from_parts(descriptions, HashMap::new());
    let engine = Engine::initialize(&records, severity, metadata).expect("engine initialises");

    let settings = Settings {
        data_dir: PathBuf::from("."),
        dataset_file: "dataset.csv".to_string(),
        severity_file: "Symptom-severity.csv".to_string(),
        description_file: "symptom_Description.csv".to_string(),
        precaution_file: "symptom_precaution.csv".to_string(),
        default_top_n: 5,
    };
    AppState {
        engine: Arc::new(engine),
        settings,
    }
}

fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn predict_returns_ranked_predictions_with_metadata() {
    let app = router(test_state());
    let body = serde_json::json!({
        "symptoms": [{"symptom": "fever", "severity": 8.0}]
    });
    let response = app.oneshot(json_request(body)).await.expect("request runs");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&bytes).expect("json parses");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["predicted_disease"], "Flu");
    assert_eq!(rows[0]["description"], "An acute viral infection.");
    assert_eq!(rows[0]["precautions"][0], "No precautions available.");
    let probability = rows[0]["probability"].as_f64().expect("probability is a number");
    assert!((0.0..=1.0).contains(&probability));
}

#[tokio::test]
async fn missing_symptoms_field_is_rejected_before_the_engine() {
    let app = router(test_state());
    let response = app
        .oneshot(json_request(serde_json::json!({})))
        .await
        .expect("request runs");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_severity_is_rejected_before_the_engine() {
    let app = router(test_state());
    let body = serde_json::json!({
        "symptoms": [{"symptom": "fever", "severity": "very"}]
    });
    let response = app.oneshot(json_request(body)).await.expect("request runs");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn top_n_limits_the_response_length() {
    let app = router(test_state());
    let body = serde_json::json!({
        "symptoms": [{"symptom": "fever", "severity": 8.0}],
        "top_n": 1
    });
    let response = app.oneshot(json_request(body)).await.expect("request runs");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&bytes).expect("json parses");
    assert_eq!(rows.len(), 1);
}
