use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Admin Portal flow a link opens
pub enum Intent {
    /// Set up audit log streaming
    #[serde(rename = "audit_logs")]
    AuditLogs,
    /// Set up directory sync
    #[serde(rename = "dsync")]
    DirectorySync,
    /// Set up log streams
    #[serde(rename = "log_streams")]
    LogStreams,
    /// Set up single sign on
    #[serde(rename = "sso")]
    Sso,
}

/// A generated Admin Portal link
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalLink {
    /// URL of the portal session
    pub link: String,
}
