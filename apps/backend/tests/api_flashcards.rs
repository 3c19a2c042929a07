//! Flashcard generation API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::fixtures;
use common::{test_app, FailingGenerator, ScriptedGenerator};

#[tokio::test]
async fn returns_requested_cards() {
    let generator = ScriptedGenerator::new(&[fixtures::sample_flashcard_output(3).as_str()]);
    let server = TestServer::new(test_app(generator.clone())).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "Cells are small.", "count": 3 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["requested"], 3);
    assert_eq!(body["returned"], 3);
    assert_eq!(body["flashcards"].as_array().unwrap().len(), 3);
    assert_eq!(body["flashcards"][0]["question"], "Question 1?");

    // Prompt carries the source text and the format contract.
    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Cells are small."));
    assert!(prompts[0].contains("exactly 3"));
}

#[tokio::test]
async fn under_production_triggers_full_regeneration() {
    let generator = ScriptedGenerator::new(&[
        fixtures::sample_flashcard_output(1).as_str(),
        fixtures::sample_flashcard_output(3).as_str(),
    ]);
    let server = TestServer::new(test_app(generator.clone())).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "notes", "count": 3 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["returned"], 3);
    assert_eq!(generator.prompts().len(), 2);
}

#[tokio::test]
async fn exhausted_retries_return_short_batch() {
    let generator = ScriptedGenerator::new(&[
        fixtures::sample_flashcard_output(1).as_str(),
        fixtures::sample_flashcard_output(1).as_str(),
    ]);
    let server = TestServer::new(test_app(generator.clone())).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "notes", "count": 5 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["requested"], 5);
    assert_eq!(body["returned"], 1);
    assert_eq!(generator.prompts().len(), 2);
}

#[tokio::test]
async fn incomplete_cards_are_filtered() {
    let output = "---\nQ: Kept?\nA: Yes.\nExplanation: Complete.\n---\nQ: \nA: Orphan answer.\nExplanation: No question.\n---";
    // Both units parse, so the count is satisfied and no retry fires; the
    // empty-question unit is dropped only at the filtering step.
    let generator = ScriptedGenerator::new(&[output]);
    let server = TestServer::new(test_app(generator)).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "notes", "count": 2 }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["returned"], 1);
    assert_eq!(body["flashcards"][0]["question"], "Kept?");
}

#[tokio::test]
async fn zero_count_is_rejected() {
    let server = TestServer::new(test_app(ScriptedGenerator::new(&[]))).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "notes", "count": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let server = TestServer::new(test_app(ScriptedGenerator::new(&[]))).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "   ", "count": 3 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generator_failure_maps_to_bad_gateway() {
    let server = TestServer::new(test_app(std::sync::Arc::new(FailingGenerator))).unwrap();

    let response = server
        .post("/api/flashcards")
        .json(&json!({ "text": "notes", "count": 3 }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "generation_error");
}
