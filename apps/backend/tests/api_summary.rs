//! Summary and ask API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use common::{test_app, ScriptedGenerator};

#[tokio::test]
async fn summarizes_document_text() {
    let generator = ScriptedGenerator::new(&["Photosynthesis\nInputs: light"]);
    let server = TestServer::new(test_app(generator.clone())).unwrap();

    let response = server
        .post("/api/summary")
        .json(&json!({ "text": "A long lecture about plants." }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["summary"], "Photosynthesis\nInputs: light");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("A long lecture about plants."));
}

#[tokio::test]
async fn empty_document_is_rejected() {
    let server = TestServer::new(test_app(ScriptedGenerator::new(&[]))).unwrap();

    let response = server.post("/api/summary").json(&json!({ "text": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn answers_question_with_context() {
    let generator = ScriptedGenerator::new(&["ATP is the cell's energy currency."]);
    let server = TestServer::new(test_app(generator.clone())).unwrap();

    let response = server
        .post("/api/ask")
        .json(&json!({ "question": "What is ATP?", "context": "Lecture notes." }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["answer"], "ATP is the cell's energy currency.");

    let prompts = generator.prompts();
    assert!(prompts[0].contains("Question: What is ATP?"));
    assert!(prompts[0].contains("Lecture notes."));
}

#[tokio::test]
async fn empty_question_is_rejected() {
    let server = TestServer::new(test_app(ScriptedGenerator::new(&[]))).unwrap();

    let response = server
        .post("/api/ask")
        .json(&json!({ "question": " ", "context": "notes" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let server = TestServer::new(test_app(ScriptedGenerator::new(&[]))).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
