use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use crate::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Directory role. The enumeration is closed: the storage layer only ever
/// accepts these two values on the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Manager,
}

impl UserRole {
    /// Convert to the database/wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
        }
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Manager" => Ok(Self::Manager),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
