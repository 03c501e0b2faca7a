/// Directory Sync service implementation
pub mod directory_sync_service;
/// Multi factor authentication service implementation
pub mod mfa_service;
/// Organizations service implementation
pub mod organizations_service;
/// Passwordless service implementation
pub mod passwordless_service;
/// Admin Portal service implementation
pub mod portal_service;
/// Single sign on service implementation
pub mod sso_service;
/// User management service implementation
pub mod users_service;

pub use crate::application::interfaces::directory_sync::*;
pub use crate::application::interfaces::mfa::*;
pub use crate::application::interfaces::organizations::*;
pub use crate::application::interfaces::passwordless::*;
pub use crate::application::interfaces::portal::*;
pub use crate::application::interfaces::sso::*;
pub use crate::application::interfaces::users::*;
