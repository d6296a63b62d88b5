pub mod error;
pub mod grouping;
pub mod ident;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error::error_location::ErrorLocation;
pub use grouping::{get_initials, group_users_by_initial};
pub use ident::{IdProvenance, generate_local_id, id_provenance};
pub use models::user::{User, UserInput, UserPatch};
pub use models::user_role::UserRole;
pub use validation::{
    Field, MAX_NAME_LENGTH, ValidationError, validate_email, validate_name, validate_user,
};
