//! Test utilities for cinema services.
//!
//! Import in tests only, never in production code.

pub mod auth;
pub mod client;
