use crate::error::AppError;
use crate::model::options::require;
use crate::presentation::portal::Intent;
use serde::Serialize;

/// Parameters for generating an Admin Portal link
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratePortalLinkOptions {
    /// Organization the portal is opened for
    pub organization: String,
    /// Flow the portal opens
    pub intent: Intent,
    /// Where the portal returns to when closed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    /// Where the portal redirects to once setup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
}

impl GeneratePortalLinkOptions {
    /// Creates the options for an organization and an intent
    pub fn new(organization: impl Into<String>, intent: Intent) -> Result<Self, AppError> {
        let organization = organization.into();
        require(&organization, "Organization is required")?;
        Ok(Self {
            organization,
            intent,
            return_url: None,
            success_url: None,
        })
    }

    /// Starts a builder
    pub fn builder() -> GeneratePortalLinkOptionsBuilder {
        GeneratePortalLinkOptionsBuilder::default()
    }

    /// Set the return URL
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Set the success URL
    pub fn with_success_url(mut self, success_url: impl Into<String>) -> Self {
        self.success_url = Some(success_url.into());
        self
    }
}

/// Builder for [`GeneratePortalLinkOptions`]
#[derive(Debug, Clone, Default)]
pub struct GeneratePortalLinkOptionsBuilder {
    organization: Option<String>,
    intent: Option<Intent>,
    return_url: Option<String>,
    success_url: Option<String>,
}

impl GeneratePortalLinkOptionsBuilder {
    /// Set the organization
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Set the intent
    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Set the return URL
    pub fn return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    /// Set the success URL
    pub fn success_url(mut self, success_url: impl Into<String>) -> Self {
        self.success_url = Some(success_url.into());
        self
    }

    /// Builds the options
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If the organization or the intent is missing
    pub fn build(self) -> Result<GeneratePortalLinkOptions, AppError> {
        let organization = self
            .organization
            .ok_or_else(|| AppError::InvalidInput("Organization is required".to_string()))?;
        let intent = self
            .intent
            .ok_or_else(|| AppError::InvalidInput("Intent is required".to_string()))?;
        let mut options = GeneratePortalLinkOptions::new(organization, intent)?;
        options.return_url = self.return_url;
        options.success_url = self.success_url;
        Ok(options)
    }
}
