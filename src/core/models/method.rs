//! HTTP request methods
//!
//! The verbs an action may render its request with.

use serde::{Deserialize, Serialize};

/// HTTP method of a [`Request`](super::Request)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Read a resource
    #[default]
    Get,
    /// Create a resource or trigger an operation
    Post,
    /// Replace a resource
    Put,
    /// Partially update a resource
    Patch,
    /// Remove a resource
    Delete,
    /// Read headers only
    Head,
}

impl Method {
    /// Canonical upper-case name of the method
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            _ => Err(format!("Unknown HTTP method: {s}")),
        }
    }
}
