//! Base dispatcher
//!
//! Binds one transport to a fixed set of baseline request decorations (a base
//! address and headers such as `Authorization` or `Accept`). Dispatching is
//! exactly: render, decorate, send once, decode with the action's own
//! function. No retries and no caching happen here; those belong in an outer
//! decorator or in the transport.

use log::{debug, trace, warn};

use crate::core::models::{Request, Response};
use crate::core::ports::{
    Action, DispatchError, Dispatcher, Outcome, ResultAction, ResultDispatcher, Transport,
    TransportError,
};

/// Baseline decorations applied to every outgoing request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BaseConfig {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl BaseConfig {
    /// Decorations with the given base address and no headers
    ///
    /// A trailing `/` on the base address is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            headers: Vec::new(),
        }
    }

    /// Add a baseline header, replacing an earlier one of the same name
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

    /// The base address, without a trailing `/`
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Baseline headers in insertion order
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Apply the decorations to `request`
    ///
    /// Relative paths are resolved against the base address; absolute URLs
    /// are kept. Baseline headers are laid down first and the request's own
    /// headers win on a name clash.
    #[must_use]
    pub fn decorate(&self, request: Request) -> Request {
        let request = if request.is_absolute() || self.base_url.is_empty() {
            request
        } else {
            let url = join_url(&self.base_url, request.path());
            request.with_path(url)
        };
        request.with_default_headers(&self.headers)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Dispatcher that drives actions through a [`Transport`]
#[derive(Debug)]
pub struct HttpDispatcher<T> {
    transport: T,
    base: BaseConfig,
}

impl<T: Transport> HttpDispatcher<T> {
    /// Bind `transport` to the baseline decorations in `base`
    #[must_use]
    pub const fn new(transport: T, base: BaseConfig) -> Self {
        Self { transport, base }
    }

    /// The baseline decorations
    #[must_use]
    pub const fn base(&self) -> &BaseConfig {
        &self.base
    }

    /// The underlying transport
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let request = self.base.decorate(request);
        debug!("-> {request}");
        let response = self.transport.execute(request).inspect_err(|e| {
            warn!("transport failure: {e}");
        })?;
        trace!("<- {}", response.status());
        Ok(response)
    }
}

impl<T: Transport> Dispatcher for HttpDispatcher<T> {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        debug!("dispatching {action:?}");
        let response = self.send(action.to_request())?;
        Ok(action.from_response(&response)?)
    }
}

impl<T: Transport> ResultDispatcher for HttpDispatcher<T> {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        debug!("dispatching {action:?}");
        let response = self.send(action.to_request())?;
        action.from_response(&response)
    }
}
