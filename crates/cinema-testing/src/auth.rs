//! Mock identity for integration tests.
//!
//! Services behind the gateway receive `x-cinema-user-id` + `x-cinema-user-role`
//! headers. `MockAuth` produces them directly so no gateway is needed.

use axum::http::{HeaderName, HeaderValue};
use uuid::Uuid;

use cinema_auth_types::{USER_ID_HEADER, USER_ROLE_HEADER};

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl MockAuth {
    pub fn new(user_id: Uuid, user_role: u8) -> Self {
        Self { user_id, user_role }
    }

    /// A regular (role 0) user with a fresh id.
    pub fn user() -> Self {
        Self::new(Uuid::new_v4(), 0)
    }

    /// Headers as if the gateway injected them.
    pub fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        vec![
            (
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
            ),
            (
                HeaderName::from_static(USER_ROLE_HEADER),
                HeaderValue::from_str(&self.user_role.to_string()).unwrap(),
            ),
        ]
    }
}
