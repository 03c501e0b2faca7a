/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insertion ordered string to string map used for query strings and extra headers
///
/// Setting a key that is already present replaces its value and keeps its
/// position, so the rendered query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Chaining variant of [`QueryParams::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes `key`, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Extra headers of a request, applied in insertion order
pub type ExtraHeaders = QueryParams;

/// Sort order accepted by list endpoints
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl Order {
    /// Wire value of the order
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor pagination parameters shared by every list endpoint
///
/// Only the fields that were set end up in the query string. Resource specific
/// filters are added with [`PaginationParams::set`] and keep their insertion order.
///
/// ```
/// use workos_client::model::requests::PaginationParams;
///
/// let params = PaginationParams::new().after("org_01").limit(10);
/// assert_eq!(params.get("limit"), Some("10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    params: QueryParams,
}

impl PaginationParams {
    /// Creates empty pagination parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters from optional cursors and limit, in that order
    pub fn from_cursors(after: Option<&str>, before: Option<&str>, limit: Option<u32>) -> Self {
        let mut params = Self::new();
        if let Some(after) = after {
            params.set("after", after);
        }
        if let Some(before) = before {
            params.set("before", before);
        }
        if let Some(limit) = limit {
            params.set("limit", limit.to_string());
        }
        params
    }

    /// Cursor of the object to start after
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.set("after", cursor);
        self
    }

    /// Cursor of the object to end before
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.set("before", cursor);
        self
    }

    /// Maximum number of records per page
    pub fn limit(mut self, limit: u32) -> Self {
        self.set("limit", limit.to_string());
        self
    }

    /// Sort order of the records
    pub fn order(mut self, order: Order) -> Self {
        self.set("order", order.as_str());
        self
    }

    /// Adds a resource specific parameter
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.set(key, value);
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    /// Number of parameters set
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter is set
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter()
    }

    /// Converts into plain query parameters
    pub fn into_params(self) -> QueryParams {
        self.params
    }
}

impl From<PaginationParams> for QueryParams {
    fn from(value: PaginationParams) -> Self {
        value.params
    }
}

/// Per call request customisation: query parameters, extra headers and a JSON body
///
/// All parts are optional. Query parameters only apply to GET requests and the
/// body only to POST and PUT requests.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query string parameters
    pub params: Option<QueryParams>,
    /// Headers applied after the default ones, replacing them on name clashes
    pub headers: Option<ExtraHeaders>,
    /// JSON body
    pub data: Option<serde_json::Value>,
}

impl RequestConfig {
    /// Creates an empty request configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query parameters
    pub fn with_params(mut self, params: impl Into<QueryParams>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Sets the extra headers
    pub fn with_headers(mut self, headers: ExtraHeaders) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single extra header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.get_or_insert_with(ExtraHeaders::new).set(name, value);
        self
    }

    /// Serializes `data` into the request body
    pub fn with_data<B: Serialize + ?Sized>(mut self, data: &B) -> Result<Self, AppError> {
        self.data = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    /// Sets an already built JSON body
    pub fn with_json(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
