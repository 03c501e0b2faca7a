use crate::error::AppError;
use crate::model::options::require;
use crate::presentation::mfa::FactorType;
use serde::Serialize;

/// Parameters for enrolling an authentication factor
///
/// Use [`EnrollFactorOptions::totp`] or [`EnrollFactorOptions::sms`], which check the
/// fields each factor type needs.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnrollFactorOptions {
    /// Kind of factor
    #[serde(rename = "type")]
    pub factor_type: FactorType,
    /// Issuer shown in the authenticator app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_issuer: Option<String>,
    /// Account name shown in the authenticator app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp_user: Option<String>,
    /// Phone number receiving the codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl EnrollFactorOptions {
    /// Enrolls a TOTP factor
    pub fn totp(issuer: impl Into<String>, user: impl Into<String>) -> Result<Self, AppError> {
        let issuer = issuer.into();
        let user = user.into();
        require(&issuer, "Issuer is required for totp factors")?;
        require(&user, "User is required for totp factors")?;
        Ok(Self {
            factor_type: FactorType::Totp,
            totp_issuer: Some(issuer),
            totp_user: Some(user),
            phone_number: None,
        })
    }

    /// Enrolls an SMS factor
    pub fn sms(phone_number: impl Into<String>) -> Result<Self, AppError> {
        let phone_number = phone_number.into();
        require(&phone_number, "Phone number is required for sms factors")?;
        Ok(Self {
            factor_type: FactorType::Sms,
            totp_issuer: None,
            totp_user: None,
            phone_number: Some(phone_number),
        })
    }
}

/// Parameters for challenging a factor
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChallengeFactorOptions {
    /// Factor to challenge
    pub authentication_factor_id: String,
    /// SMS text, `{{code}}` is replaced by the code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_template: Option<String>,
}

impl ChallengeFactorOptions {
    /// Creates the options
    pub fn new(authentication_factor_id: impl Into<String>) -> Result<Self, AppError> {
        let authentication_factor_id = authentication_factor_id.into();
        require(&authentication_factor_id, "Authentication factor id is required")?;
        Ok(Self {
            authentication_factor_id,
            sms_template: None,
        })
    }

    /// Set the SMS template
    pub fn with_sms_template(mut self, sms_template: impl Into<String>) -> Self {
        self.sms_template = Some(sms_template.into());
        self
    }
}

/// Parameters for verifying a challenge
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VerifyFactorOptions {
    /// Challenge to verify
    pub authentication_challenge_id: String,
    /// Code entered by the user
    pub code: String,
}

impl VerifyFactorOptions {
    /// Creates the options; both fields are required
    pub fn new(
        authentication_challenge_id: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, AppError> {
        let options = Self {
            authentication_challenge_id: authentication_challenge_id.into(),
            code: code.into(),
        };
        require(
            &options.authentication_challenge_id,
            "Authentication challenge id is required",
        )?;
        require(&options.code, "Code is required")?;
        Ok(options)
    }
}
