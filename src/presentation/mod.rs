/// Directory Sync models
pub mod directory_sync;
/// Multi factor authentication models
pub mod mfa;
/// Organization models
pub mod organization;
/// Passwordless session models
pub mod passwordless;
/// Admin Portal models
pub mod portal;
/// Single sign on models
pub mod sso;
/// User management models
pub mod user;
/// Webhook event payloads
pub mod webhook;
