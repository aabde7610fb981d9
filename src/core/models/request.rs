//! Outgoing request model
//!
//! A `Request` is the value an action renders itself into. It is plain data:
//! rendering one has no side effects and two renders of the same action
//! compare equal.

use serde::Serialize;

use super::Method;

/// An HTTP request described as data
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl Request {
    /// Create a request with the given method and path
    ///
    /// `path` is usually relative (`/users/octocat`); the dispatcher resolves
    /// it against its base address. Absolute URLs are left untouched.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a `GET` request
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Shorthand for a `POST` request
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Shorthand for a `PUT` request
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Shorthand for a `PATCH` request
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Shorthand for a `DELETE` request
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter
    ///
    /// Parameters keep insertion order; repeating a name appends another value.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set a header, replacing any existing header of the same name
    ///
    /// Header names compare case-insensitively.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set the request body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body and set `Content-Type`
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }

    /// Replace the path, keeping everything else
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Put `defaults` underneath this request's own headers
    ///
    /// The result lists the defaults first, in their given order, followed by
    /// this request's headers. A default is dropped when the request already
    /// carries a header with the same name.
    #[must_use]
    pub fn with_default_headers(mut self, defaults: &[(String, String)]) -> Self {
        let mut merged: Vec<(String, String)> = defaults
            .iter()
            .filter(|(name, _)| self.header_value(name).is_none())
            .cloned()
            .collect();
        merged.append(&mut self.headers);
        self.headers = merged;
        self
    }

    /// The request method
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The path or absolute URL
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the path is already an absolute `http(s)` URL
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }

    /// Query parameters in insertion order
    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Headers in insertion order
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Value of the named header, if present
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body, if any
    #[must_use]
    pub fn body_str(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Path followed by the percent-encoded query string
    #[must_use]
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.uri())
    }
}
