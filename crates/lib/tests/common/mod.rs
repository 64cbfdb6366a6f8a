//! Shared helpers for the `qseed` integration tests.

#![allow(dead_code)]

use httpmock::MockServer;
use qseed::SeedConfig;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

pub const TEST_KEY: &str = "service-role-test-key";

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A config pointing at the given mock server.
pub fn config_for(server: &MockServer) -> SeedConfig {
    SeedConfig {
        base_url: server.base_url(),
        service_key: TEST_KEY.to_string(),
    }
}
