#![allow(dead_code)]
/// Shared helpers for integration and end-to-end tests
pub mod mocks;
pub mod stub_server;
