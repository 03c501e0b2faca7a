//! Option structs accepted by the resource services
//!
//! Required fields are taken by the constructors and checked there, so an option
//! value that exists is always sendable.

use crate::error::AppError;
use serde::Serialize;

/// Directory Sync options
pub mod directory_sync;
/// Multi factor authentication options
pub mod mfa;
/// Organization options
pub mod organizations;
/// Passwordless session options
pub mod passwordless;
/// Admin Portal options
pub mod portal;
/// Single sign on options
pub mod sso;
/// User management options
pub mod users;

pub use directory_sync::*;
pub use mfa::*;
pub use organizations::*;
pub use passwordless::*;
pub use portal::*;
pub use sso::*;
pub use users::*;

/// Fails with [`AppError::InvalidInput`] when `value` is blank
pub(crate) fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(message.to_string()));
    }
    Ok(())
}

/// Wire representation of a serializable enum value
pub(crate) fn wire_value<T: Serialize>(value: &T) -> Result<String, AppError> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}
