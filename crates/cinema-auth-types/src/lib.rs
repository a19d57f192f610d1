//! Auth types shared across cinema services.
//!
//! Authentication happens at the gateway; services only read the identity it
//! injects.

pub mod identity;

pub use identity::{IdentityHeaders, USER_ID_HEADER, USER_ROLE_HEADER};
