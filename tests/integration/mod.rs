//! Shared fixtures for integration tests

#![allow(dead_code)]

pub mod mock_server;
pub mod scripted_transport;

/// Route client logs to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
