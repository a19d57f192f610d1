//! Cross-cutting HTTP plumbing shared by cinema services.

pub mod client_ip;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
