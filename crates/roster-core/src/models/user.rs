//! User entity - a single directory record.

use crate::UserRole;

use serde::{Deserialize, Serialize};

/// A persisted directory record. The id is an opaque string: remote-origin
/// ids are pure digit strings, locally created ids carry a timestamp-random
/// shape (see [`crate::ident`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: String, input: UserInput) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            role: input.role,
        }
    }
}

/// Candidate fields for creating a record; the caller supplies the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Partial update. Only the populated fields are written; a patch with no
/// fields set is a legal no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}
