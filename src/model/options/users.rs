use crate::constants::{GRANT_TYPE_AUTHORIZATION_CODE, GRANT_TYPE_MAGIC_AUTH, GRANT_TYPE_PASSWORD};
use crate::error::AppError;
use crate::model::options::require;
use crate::model::requests::{PaginationParams, QueryParams};
use serde::Serialize;

/// Parameters for creating a user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateUserOptions {
    /// Email address
    pub email: String,
    /// Initial password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Whether the email address is already verified
    pub email_verified: bool,
}

impl CreateUserOptions {
    /// Creates options for the given email address
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        let email = email.into();
        require(&email, "Email is required")?;
        Ok(Self {
            email,
            password: None,
            first_name: None,
            last_name: None,
            email_verified: false,
        })
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Mark the email as verified
    pub fn with_email_verified(mut self, email_verified: bool) -> Self {
        self.email_verified = email_verified;
        self
    }
}

/// Parameters for listing users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersOptions {
    /// Only return the user with this email
    pub email: Option<String>,
    /// Only return members of this organization
    pub organization: Option<String>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListUsersOptions {
    /// Creates options listing every user
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filter by organization
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the filters
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.pagination.clone();
        if let Some(email) = &self.email {
            params.set("email", email.as_str());
        }
        if let Some(organization) = &self.organization {
            params.set("organization", organization.as_str());
        }
        params.into_params()
    }
}

/// Parameters for adding a user to an organization
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddUserToOrganizationOptions {
    /// User to add, part of the path
    #[serde(skip)]
    pub user_id: String,
    /// Organization to add the user to
    pub organization_id: String,
}

impl AddUserToOrganizationOptions {
    /// Creates the options; both identifiers are required
    pub fn new(
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            user_id: user_id.into(),
            organization_id: organization_id.into(),
        };
        require(&options.user_id, "User id is required")?;
        require(&options.organization_id, "Organization id is required")?;
        Ok(options)
    }
}

/// Parameters for removing a user from an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveUserFromOrganizationOptions {
    /// User to remove
    pub user_id: String,
    /// Organization to remove the user from
    pub organization_id: String,
}

impl RemoveUserFromOrganizationOptions {
    /// Creates the options; both identifiers are required
    pub fn new(
        user_id: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            user_id: user_id.into(),
            organization_id: organization_id.into(),
        };
        require(&options.user_id, "User id is required")?;
        require(&options.organization_id, "Organization id is required")?;
        Ok(options)
    }
}

/// Parameters for starting a password reset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreatePasswordResetChallengeOptions {
    /// Email of the user
    pub email: String,
    /// URL of the page handling the reset, the token is appended to it
    pub password_reset_url: String,
}

impl CreatePasswordResetChallengeOptions {
    /// Creates the options; both fields are required
    pub fn new(
        email: impl Into<String>,
        password_reset_url: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            email: email.into(),
            password_reset_url: password_reset_url.into(),
        };
        require(&options.email, "Email is required.")?;
        require(&options.password_reset_url, "Password Reset URL is required.")?;
        Ok(options)
    }
}

/// Parameters for completing a password reset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompletePasswordResetOptions {
    /// Token received by email
    pub token: String,
    /// New password
    pub new_password: String,
}

impl CompletePasswordResetOptions {
    /// Creates the options; both fields are required
    pub fn new(token: impl Into<String>, new_password: impl Into<String>) -> Result<Self, AppError> {
        let options = Self {
            token: token.into(),
            new_password: new_password.into(),
        };
        require(&options.token, "Token is required.")?;
        require(&options.new_password, "New Password is required.")?;
        Ok(options)
    }
}

/// Parameters for setting a user's password
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpdateUserPasswordOptions {
    /// User to update, part of the path
    #[serde(skip)]
    pub user_id: String,
    /// New password
    pub password: String,
}

impl UpdateUserPasswordOptions {
    /// Creates the options; both fields are required
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Result<Self, AppError> {
        let options = Self {
            user_id: user_id.into(),
            password: password.into(),
        };
        require(&options.user_id, "User id is required")?;
        require(&options.password, "Password is required")?;
        Ok(options)
    }
}

/// Parameters for authenticating with email and password
///
/// `client_secret` is filled with the API key by the service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticateWithPasswordOptions {
    /// Client identifier of the application
    pub client_id: String,
    /// Email of the user
    pub email: String,
    /// Password of the user
    pub password: String,
    /// IP address of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// User agent of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// API key, set by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Always `password`
    pub grant_type: String,
}

impl AuthenticateWithPasswordOptions {
    /// Creates the options; every argument is required
    pub fn new(
        client_id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            client_id: client_id.into(),
            email: email.into(),
            password: password.into(),
            ip_address: None,
            user_agent: None,
            client_secret: None,
            grant_type: GRANT_TYPE_PASSWORD.to_string(),
        };
        require(&options.client_id, "ClientID is required.")?;
        require(&options.email, "Email is required.")?;
        require(&options.password, "Password is required.")?;
        Ok(options)
    }

    /// Set the IP address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Parameters for authenticating with an authorization code
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticateWithCodeOptions {
    /// Client identifier of the application
    pub client_id: String,
    /// Authorization code
    pub code: String,
    /// IP address of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// User agent of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// API key, set by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Always `authorization_code`
    pub grant_type: String,
}

impl AuthenticateWithCodeOptions {
    /// Creates the options; both arguments are required
    pub fn new(client_id: impl Into<String>, code: impl Into<String>) -> Result<Self, AppError> {
        let options = Self {
            client_id: client_id.into(),
            code: code.into(),
            ip_address: None,
            user_agent: None,
            client_secret: None,
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE.to_string(),
        };
        require(&options.code, "Code is required.")?;
        require(&options.client_id, "ClientID is required.")?;
        Ok(options)
    }

    /// Set the IP address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Parameters for authenticating with a magic auth code
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthenticateWithMagicAuthOptions {
    /// Client identifier of the application
    pub client_id: String,
    /// Code received by email
    pub code: String,
    /// User the code was sent to
    pub user_id: String,
    /// IP address of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// User agent of the user's request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// API key, set by the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Always the magic auth grant type
    pub grant_type: String,
}

impl AuthenticateWithMagicAuthOptions {
    /// Creates the options; every argument is required
    pub fn new(
        client_id: impl Into<String>,
        code: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            client_id: client_id.into(),
            code: code.into(),
            user_id: user_id.into(),
            ip_address: None,
            user_agent: None,
            client_secret: None,
            grant_type: GRANT_TYPE_MAGIC_AUTH.to_string(),
        };
        require(&options.code, "Code is required.")?;
        require(&options.client_id, "ClientID is required.")?;
        require(&options.user_id, "Magic auth challenge ID is required.")?;
        Ok(options)
    }

    /// Set the IP address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Parameters for emailing a magic auth code
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SendMagicAuthCodeOptions {
    /// Email the code is sent to
    pub email: String,
}

impl SendMagicAuthCodeOptions {
    /// Creates the options
    pub fn new(email: impl Into<String>) -> Result<Self, AppError> {
        let email = email.into();
        require(&email, "Email is required.")?;
        Ok(Self { email })
    }
}

/// Parameters for verifying a user's email with a code
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyEmailCodeOptions {
    /// User to verify, part of the path
    #[serde(skip)]
    pub user_id: String,
    /// Code received by email
    pub code: String,
}

impl VerifyEmailCodeOptions {
    /// Creates the options; both fields are required
    pub fn new(user_id: impl Into<String>, code: impl Into<String>) -> Result<Self, AppError> {
        let options = Self {
            user_id: user_id.into(),
            code: code.into(),
        };
        require(&options.user_id, "User ID is required")?;
        require(&options.code, "Code is required")?;
        Ok(options)
    }
}
