//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a fake remote model
//! - Fake text generators with scripted availability
//! - Sample content fixtures

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use flashcard_core::HeuristicCardBuilder;
use flashcard_generator::config::Config;
use flashcard_generator::services::generation::RemoteSettings;
use flashcard_generator::services::remote::{Availability, GeneratorError, TextGenerator};
use flashcard_generator::{app, AppState};

/// Fake remote model.
pub struct FakeGenerator {
    availability: Availability,
    pub generate_calls: AtomicUsize,
}

impl FakeGenerator {
    /// A model that is ready and answers every prompt.
    pub fn ready() -> Self {
        Self {
            availability: Availability::Ready,
            generate_calls: AtomicUsize::new(0),
        }
    }

    /// A model that never finishes loading.
    pub fn loading() -> Self {
        Self {
            availability: Availability::Loading,
            generate_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn probe(&self) -> Result<Availability, GeneratorError> {
        Ok(self.availability)
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        let n = self.generate_calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!(
            "Question: Remote question {}? Answer: Remote answer {}.",
            n, n
        ))
    }
}

/// Test context holding the router.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Context without a remote model (offline only).
    pub fn new() -> Self {
        Self::with_generator(None)
    }

    /// Context with the given remote model.
    pub fn with_generator(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self::with_parts(HeuristicCardBuilder::default(), generator)
    }

    /// Context with a custom heuristic builder and no remote model.
    pub fn with_heuristic(heuristic: HeuristicCardBuilder) -> Self {
        Self::with_parts(heuristic, None)
    }

    fn with_parts(
        heuristic: HeuristicCardBuilder,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let state = AppState::new(test_config(), heuristic, generator);
        Self { app: app(state) }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Default config with all remote delays disabled.
pub fn test_config() -> Config {
    Config {
        remote: RemoteSettings {
            probe_interval: Duration::ZERO,
            call_delay: Duration::ZERO,
            ..RemoteSettings::default()
        },
        ..Config::default()
    }
}
