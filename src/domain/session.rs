//! The client-held session: auth token plus user record.

use serde::{Deserialize, Serialize};

use super::user::AuthenticatedUser;

/// The pair of auth token and user record persisted across reloads.
///
/// Both fields are always present together; the session store persists
/// and clears them as one document, so a token can never outlive its
/// user record or vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthenticatedUser,
}

impl Session {
    pub fn new(token: String, user: AuthenticatedUser) -> Self {
        Self { token, user }
    }
}
