/// Directory Sync service interface
pub mod directory_sync;
/// Multi factor authentication service interface
pub mod mfa;
/// Organizations service interface
pub mod organizations;
/// Passwordless service interface
pub mod passwordless;
/// Admin Portal service interface
pub mod portal;
/// Single sign on service interface
pub mod sso;
/// User management service interface
pub mod users;
