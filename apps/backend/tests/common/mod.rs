//! Common test utilities and fixtures for integration tests.
//!
//! The backend is stateless apart from its injected generator, so tests run
//! entirely in-process: build a router over a scripted generator and drive
//! it with axum-test.

pub mod fixtures;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use study_core::{GenerateError, TextGenerator};

use buddystudy_backend::{app, AppState};

/// Generator double returning scripted outputs in order.
///
/// Records every prompt it receives so tests can assert how many generation
/// cycles ran. An exhausted script is reported as a generation failure.
pub struct ScriptedGenerator {
    outputs: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(outputs: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            outputs: Mutex::new(outputs.iter().map(|s| s.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GenerateError::Generation("scripted outputs exhausted".to_string()))
    }
}

/// Generator double that always fails, for transport-error paths.
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(GenerateError::Generation("connection refused".to_string()))
    }
}

/// Build the application router over the given generator.
pub fn test_app(generator: Arc<dyn TextGenerator>) -> Router {
    app(AppState { generator })
}

/// Router for endpoints that never touch the generator.
pub fn test_app_without_generator() -> Router {
    test_app(ScriptedGenerator::new(&[]))
}
