//! Incoming response model
//!
//! What a transport hands back and what an action decodes.

use serde::de::DeserializeOwned;

use super::Status;

/// An HTTP response described as data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    headers: Vec<(String, String)>,
    body: String,
}

impl Response {
    /// Create an empty-bodied response with the given status
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Shorthand for a `200 OK` response carrying `body`
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(Status::OK).body(body)
    }

    /// Set the body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Append a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The status code
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    /// Headers in the order the transport reported them
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of the named header (case-insensitive)
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body as text
    #[must_use]
    pub fn body_str(&self) -> &str {
        &self.body
    }

    /// Parse the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
