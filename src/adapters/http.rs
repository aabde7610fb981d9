//! Blocking HTTP transport backed by `reqwest`

use std::time::Duration;

use log::trace;
use reqwest::blocking::Client;

use crate::core::models::{Request, Response, Status};
use crate::core::ports::{Transport, TransportError};

/// Transport sending requests over the network
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| classify(&e))?;
        Ok(Self { client })
    }

    /// Transport using an existing client
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        let method = reqwest::Method::from_bytes(request.method().as_str().as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut outgoing = self.client.request(method, request.uri());
        for (name, value) in request.headers() {
            outgoing = outgoing.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body_str() {
            outgoing = outgoing.body(body.to_string());
        }

        let reply = outgoing.send().map_err(|e| classify(&e))?;
        let status = Status::new(reply.status().as_u16());
        let headers: Vec<(String, String)> = reply
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = reply.text().map_err(|e| classify(&e))?;
        trace!("{status}: {} bytes", body.len());

        Ok(headers
            .into_iter()
            .fold(Response::new(status).body(body), |response, (name, value)| {
                response.header(name, value)
            }))
    }
}

fn classify(err: &reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}
