/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Webhook payloads
//!
//! Events are parsed into [`WebhookEvent`], whose [`WebhookPayload`] is selected by
//! the `event` field of the payload. Update events reuse the shape of the object
//! they describe and add the attributes that changed.
//!
//! Only parsing is provided here; checking the `WorkOS-Signature` header is up to
//! the caller.

use crate::error::AppError;
use crate::presentation::directory_sync::{Directory, DirectoryGroup, DirectoryUser};
use crate::presentation::sso::Connection;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// `dsync.user.updated` data: the user plus its previous attribute values
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryUserUpdated {
    /// Current state of the user
    #[serde(flatten)]
    pub user: DirectoryUser,
    /// Previous values of the attributes that changed; `null` marks a new attribute
    #[serde(default)]
    pub previous_attributes: HashMap<String, Value>,
}

/// `dsync.group.updated` data: the group plus its previous attribute values
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryGroupUpdated {
    /// Current state of the group
    #[serde(flatten)]
    pub group: DirectoryGroup,
    /// Previous values of the attributes that changed; `null` marks a new attribute
    #[serde(default)]
    pub previous_attributes: HashMap<String, Value>,
}

/// Data of `dsync.group.user_added` and `dsync.group.user_removed`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryGroupMembership {
    /// Directory of the group
    pub directory_id: String,
    /// User added to or removed from the group
    pub user: DirectoryUser,
    /// Group concerned
    pub group: DirectoryGroup,
}

/// Payload of a webhook event, keyed by the event name
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    /// `connection.activated`
    ConnectionActivated(Connection),
    /// `connection.deactivated`
    ConnectionDeactivated(Connection),
    /// `connection.deleted`
    ConnectionDeleted(Connection),
    /// `dsync.activated`
    DirectoryActivated(Directory),
    /// `dsync.deleted`
    DirectoryDeleted(Directory),
    /// `dsync.user.created`
    DirectoryUserCreated(DirectoryUser),
    /// `dsync.user.updated`
    DirectoryUserUpdated(DirectoryUserUpdated),
    /// `dsync.user.deleted`
    DirectoryUserDeleted(DirectoryUser),
    /// `dsync.group.created`
    DirectoryGroupCreated(DirectoryGroup),
    /// `dsync.group.updated`
    DirectoryGroupUpdated(DirectoryGroupUpdated),
    /// `dsync.group.deleted`
    DirectoryGroupDeleted(DirectoryGroup),
    /// `dsync.group.user_added`
    DirectoryGroupUserAdded(DirectoryGroupMembership),
    /// `dsync.group.user_removed`
    DirectoryGroupUserRemoved(DirectoryGroupMembership),
    /// Any event this version of the client does not model
    Unknown {
        /// Event name
        event: String,
        /// Raw data of the event
        data: Value,
    },
}

impl WebhookPayload {
    /// Builds the payload matching `event` from its raw data
    pub fn from_parts(event: &str, data: Value) -> Result<Self, AppError> {
        let payload = match event {
            "connection.activated" => Self::ConnectionActivated(from_data(data)?),
            "connection.deactivated" => Self::ConnectionDeactivated(from_data(data)?),
            "connection.deleted" => Self::ConnectionDeleted(from_data(data)?),
            "dsync.activated" => Self::DirectoryActivated(from_data(data)?),
            "dsync.deleted" => Self::DirectoryDeleted(from_data(data)?),
            "dsync.user.created" => Self::DirectoryUserCreated(from_data(data)?),
            "dsync.user.updated" => Self::DirectoryUserUpdated(from_data(data)?),
            "dsync.user.deleted" => Self::DirectoryUserDeleted(from_data(data)?),
            "dsync.group.created" => Self::DirectoryGroupCreated(from_data(data)?),
            "dsync.group.updated" => Self::DirectoryGroupUpdated(from_data(data)?),
            "dsync.group.deleted" => Self::DirectoryGroupDeleted(from_data(data)?),
            "dsync.group.user_added" => Self::DirectoryGroupUserAdded(from_data(data)?),
            "dsync.group.user_removed" => Self::DirectoryGroupUserRemoved(from_data(data)?),
            other => Self::Unknown {
                event: other.to_string(),
                data,
            },
        };
        Ok(payload)
    }

    /// Event name the payload was parsed from
    pub fn event_name(&self) -> &str {
        match self {
            Self::ConnectionActivated(_) => "connection.activated",
            Self::ConnectionDeactivated(_) => "connection.deactivated",
            Self::ConnectionDeleted(_) => "connection.deleted",
            Self::DirectoryActivated(_) => "dsync.activated",
            Self::DirectoryDeleted(_) => "dsync.deleted",
            Self::DirectoryUserCreated(_) => "dsync.user.created",
            Self::DirectoryUserUpdated(_) => "dsync.user.updated",
            Self::DirectoryUserDeleted(_) => "dsync.user.deleted",
            Self::DirectoryGroupCreated(_) => "dsync.group.created",
            Self::DirectoryGroupUpdated(_) => "dsync.group.updated",
            Self::DirectoryGroupDeleted(_) => "dsync.group.deleted",
            Self::DirectoryGroupUserAdded(_) => "dsync.group.user_added",
            Self::DirectoryGroupUserRemoved(_) => "dsync.group.user_removed",
            Self::Unknown { event, .. } => event,
        }
    }
}

fn from_data<T: DeserializeOwned>(data: Value) -> Result<T, AppError> {
    Ok(serde_json::from_value(data)?)
}

#[derive(Deserialize)]
struct RawWebhookEvent {
    id: String,
    event: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    created_at: Option<String>,
}

/// A webhook event delivered by WorkOS
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    /// Unique identifier of the event
    pub id: String,
    /// Creation timestamp, when present
    pub created_at: Option<String>,
    /// Typed data of the event
    pub payload: WebhookPayload,
}

impl WebhookEvent {
    /// Parses a webhook request body
    ///
    /// # Returns
    /// * `Err(AppError::Json)` - If the body is not an event or the data does not match the event
    pub fn from_json(payload: &str) -> Result<Self, AppError> {
        let raw: RawWebhookEvent = serde_json::from_str(payload)?;
        Ok(Self {
            payload: WebhookPayload::from_parts(&raw.event, raw.data)?,
            id: raw.id,
            created_at: raw.created_at,
        })
    }

    /// Event name, e.g. `dsync.user.updated`
    pub fn event(&self) -> &str {
        self.payload.event_name()
    }
}
