/// Client entry point
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits, one per API resource
pub mod interfaces;
/// Implementations of the service traits for [`client::Client`]
pub mod services;
