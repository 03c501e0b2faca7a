use crate::constants::GRANT_TYPE_AUTHORIZATION_CODE;
use crate::error::AppError;
use crate::model::options::{require, wire_value};
use crate::model::requests::{PaginationParams, QueryParams};
use crate::presentation::sso::ConnectionType;
use reqwest::Url;
use serde::Serialize;

/// Parameters for listing connections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListConnectionsOptions {
    /// Only return connections of this provider type
    pub connection_type: Option<ConnectionType>,
    /// Only return connections routing this domain
    pub domain: Option<String>,
    /// Only return connections of this organization
    pub organization_id: Option<String>,
    /// Cursor pagination
    pub pagination: PaginationParams,
}

impl ListConnectionsOptions {
    /// Creates options listing every connection
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by provider type
    pub fn with_connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }

    /// Filter by domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Filter by organization
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Set the pagination
    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    /// Query parameters: pagination first, then the filters
    pub fn to_params(&self) -> Result<QueryParams, AppError> {
        let mut params = self.pagination.clone();
        if let Some(connection_type) = &self.connection_type {
            params.set("connection_type", wire_value(connection_type)?);
        }
        if let Some(domain) = &self.domain {
            params.set("domain", domain.as_str());
        }
        if let Some(organization_id) = &self.organization_id {
            params.set("organization_id", organization_id.as_str());
        }
        Ok(params.into_params())
    }
}

/// Body of the authorization code exchange
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileAndTokenRequest {
    /// Client identifier of the application
    pub client_id: String,
    /// API key of the application
    pub client_secret: String,
    /// Authorization code received on the redirect URI
    pub code: String,
    /// Always `authorization_code`
    pub grant_type: String,
}

impl ProfileAndTokenRequest {
    /// Creates the exchange body
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, AppError> {
        let request = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE.to_string(),
        };
        require(&request.client_id, "Client ID is required")?;
        require(&request.code, "Code is required")?;
        Ok(request)
    }
}

/// Builder of the URL a user is redirected to in order to start SSO
///
/// ```
/// use workos_client::model::options::AuthorizationUrlBuilder;
/// use reqwest::Url;
///
/// let base = Url::parse("https://api.workos.com").unwrap();
/// let url = AuthorizationUrlBuilder::new(&base, "client_123", "https://example.com/callback")
///     .state("xyz")
///     .build();
/// assert!(url.ends_with("&response_type=code&state=xyz"));
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationUrlBuilder {
    base_url: Url,
    client_id: String,
    redirect_uri: String,
    connection: Option<String>,
    domain: Option<String>,
    organization: Option<String>,
    provider: Option<String>,
    state: Option<String>,
}

impl AuthorizationUrlBuilder {
    /// Starts a builder for the given application and redirect URI
    pub fn new(
        base_url: &Url,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.clone(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            connection: None,
            domain: None,
            organization: None,
            provider: None,
            state: None,
        }
    }

    /// Route the user through a specific connection
    pub fn connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    /// Route the user by domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Route the user through an organization
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Route the user through an OAuth provider
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Opaque value echoed back on the redirect URI
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Renders the authorization URL
    pub fn build(&self) -> String {
        let mut url = self.base_url.clone();
        url.set_path("/sso/authorize");
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri)
                .append_pair("response_type", "code");
            let optional = [
                ("connection", &self.connection),
                ("domain", &self.domain),
                ("organization", &self.organization),
                ("provider", &self.provider),
                ("state", &self.state),
            ];
            for (key, value) in optional {
                if let Some(value) = value {
                    pairs.append_pair(key, value);
                }
            }
        }
        url.to_string()
    }
}
