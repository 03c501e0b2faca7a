/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # WorkOS Client
//!
//! Asynchronous client for the [WorkOS](https://workos.com) REST API: organizations,
//! single sign on, Directory Sync, user management, multi factor authentication,
//! passwordless sessions and the Admin Portal, plus typed webhook payloads.
//!
//! Every resource is a trait implemented for [`Client`](application::client::Client):
//!
//! ```no_run
//! use workos_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::from_api_key("sk_test_123")?;
//! let organizations = client
//!     .list_organizations(&ListOrganizationsOptions::new().with_domains(["acme.com"]))
//!     .await?;
//! println!("{} organizations", organizations.data.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::AppError`]. Failed HTTP answers are classified by
//! status (401, 404, 422, other) and carry the `X-Request-ID` of the response.
//!
//! ## Configuration
//!
//! [`Config::from_env`](application::config::Config::from_env) reads:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `WORKOS_API_KEY` | API key | required |
//! | `WORKOS_API_HOSTNAME` | API host | `api.workos.com` |
//! | `WORKOS_HTTPS` | use HTTPS | `true` |
//! | `WORKOS_PORT` | explicit port | scheme default |
//! | `WORKOS_TIMEOUT_SECS` | request timeout | none |

/// Client, configuration and resource services
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type
pub mod error;
/// Request pipeline and request/response building blocks
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// API resource models
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
