/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # WorkOS Client Prelude
//!
//! Imports the client, its configuration, every service trait, the option
//! structs and the resource models in one line.
//!
//! ```rust
//! use workos_client::prelude::*;
//!
//! let config = Config::new("sk_test_123").unwrap();
//! let client = Client::new(config).unwrap();
//! let url = client
//!     .get_authorization_url("client_123", "https://example.com/callback")
//!     .provider("GoogleOAuth")
//!     .build();
//! assert!(url.starts_with("https://api.workos.com/sso/authorize?"));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::client::Client;
pub use crate::config::Config;
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;
pub use crate::model::responses::{EntityError, ErrorResponse, ListMetadata};

// ============================================================================
// SERVICES
// ============================================================================

pub use crate::application::interfaces::directory_sync::DirectorySyncService;
pub use crate::application::interfaces::mfa::MfaService;
pub use crate::application::interfaces::organizations::OrganizationsService;
pub use crate::application::interfaces::passwordless::PasswordlessService;
pub use crate::application::interfaces::portal::PortalService;
pub use crate::application::interfaces::sso::SsoService;
pub use crate::application::interfaces::users::UsersService;

// ============================================================================
// REQUESTS AND OPTIONS
// ============================================================================

pub use crate::model::http::HttpClient;
pub use crate::model::options::*;
pub use crate::model::requests::{ExtraHeaders, Order, PaginationParams, QueryParams, RequestConfig};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::presentation::directory_sync::*;
pub use crate::presentation::mfa::*;
pub use crate::presentation::organization::*;
pub use crate::presentation::passwordless::*;
pub use crate::presentation::portal::*;
pub use crate::presentation::sso::*;
pub use crate::presentation::user::*;
pub use crate::presentation::webhook::*;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
