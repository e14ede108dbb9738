//! Request builder, envelope parser and blocking client for the Tilda API.
//!
//! # Design
//! `ApiClient` holds the credentials, a base URL and a transport, and carries
//! no mutable state between calls. A call is split into `build_call`, which
//! produces an `HttpRequest`, and `parse_call`, which consumes an
//! `HttpResponse`. `call` runs one through the transport and feeds the result
//! to the other. The seven convenience methods only pick the endpoint and name
//! the parameters.

use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Credentials;
use crate::endpoint::{Endpoint, ParamValue};
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

pub const DEFAULT_BASE_URL: &str = "https://api.tildacdn.info";

/// Applied to every request; there is no per-call override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

const STATUS_FOUND: &str = "FOUND";
const STATUS_ERROR: &str = "ERROR";

/// Synchronous client for the Tilda project/page API.
///
/// Payloads are returned as `serde_json::Value` exactly as the server sent
/// them; see [`crate::types`] for optional typed decoding.
#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    credentials: Credentials,
    base_url: String,
    transport: T,
}

impl ApiClient<UreqTransport> {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(credentials, UreqTransport)
    }

    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Credentials::from_file(path)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_call(&self, endpoint: Endpoint, params: &[(&str, ParamValue)]) -> Result<HttpRequest> {
        let mut url = Url::parse(&format!("{}/v1/{}/", self.base_url, endpoint))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("publickey", self.credentials.public_key())
                .append_pair("secretkey", self.credentials.secret_key());
            for (name, value) in params {
                query.append_pair(name, &value.to_string());
            }
        }
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Interpret a response envelope, returning `result` untouched on `FOUND`.
    pub fn parse_call(&self, response: HttpResponse) -> Result<Value> {
        let envelope: Value = match serde_json::from_str(&response.body) {
            Ok(v) => v,
            Err(_) if !response.is_success() => {
                return Err(ApiError::HttpError {
                    status: response.status,
                    body: response.body,
                });
            }
            Err(e) => return Err(ApiError::Deserialization(e.to_string())),
        };
        let Value::Object(mut fields) = envelope else {
            warn!("response envelope is not a JSON object");
            return Err(ApiError::Unknown);
        };

        match fields.get("status").and_then(Value::as_str) {
            Some(STATUS_FOUND) => {
                debug!(status = STATUS_FOUND, "Tilda API call succeeded");
                Ok(fields.remove("result").unwrap_or(Value::Null))
            }
            Some(STATUS_ERROR) => {
                let message = match fields.remove("message") {
                    Some(Value::String(s)) => s,
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                };
                debug!(status = STATUS_ERROR, %message, "Tilda API returned an error");
                Err(ApiError::RemoteApi { message })
            }
            other => {
                warn!(status = ?other, "unrecognised Tilda API status");
                Err(ApiError::Unknown)
            }
        }
    }

    pub fn call(&self, endpoint: Endpoint, params: &[(&str, ParamValue)]) -> Result<Value> {
        let request = self.build_call(endpoint, params)?;
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        debug!(%endpoint, params = ?names, "calling Tilda API");
        let response = self.transport.execute(&request).map_err(ApiError::Transport)?;
        self.parse_call(response)
    }

    /// Like [`call`](Self::call) but takes the endpoint's wire name.
    /// Unknown names fail with `InvalidEndpoint` before the transport is used.
    pub fn call_named(&self, endpoint: &str, params: &[(&str, ParamValue)]) -> Result<Value> {
        let endpoint: Endpoint = endpoint.parse()?;
        self.call(endpoint, params)
    }

    pub fn list_projects(&self) -> Result<Value> {
        self.call(Endpoint::ProjectsList, &[])
    }

    pub fn get_project_info(&self, project_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::ProjectInfo, &[("projectid", project_id.into())])
    }

    pub fn list_pages(&self, project_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::PagesList, &[("projectid", project_id.into())])
    }

    pub fn get_page(&self, page_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::Page, &[("pageid", page_id.into())])
    }

    pub fn get_page_full(&self, page_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::PageFull, &[("pageid", page_id.into())])
    }

    pub fn get_page_export(&self, page_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::PageExport, &[("pageid", page_id.into())])
    }

    pub fn get_page_full_export(&self, page_id: impl Into<ParamValue>) -> Result<Value> {
        self.call(Endpoint::PageFullExport, &[("pageid", page_id.into())])
    }
}
