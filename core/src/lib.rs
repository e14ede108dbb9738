//! Synchronous client for the Tilda project/page API.
//!
//! # Overview
//! Every API function is a GET to
//! `https://api.tildacdn.info/v1/<endpoint>/?publickey=..&secretkey=..&<params>`
//! answered by a JSON envelope `{"status": "FOUND", "result": ..}` or
//! `{"status": "ERROR", "message": ..}`. `ApiClient` builds the request,
//! executes it through a `Transport` and unwraps the envelope.
//!
//! # Design
//! - `ApiClient` is immutable: credentials, base URL and transport are fixed
//!   at construction.
//! - Each call is split into `build_call` (produces request) and
//!   `parse_call` (consumes response), so the I/O boundary is explicit and
//!   both halves are testable without a network.
//! - Payloads are passed through as `serde_json::Value`; `types` offers
//!   optional typed decoding.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
pub use config::Credentials;
pub use endpoint::{Endpoint, ParamValue};
pub use error::{ApiError, Result, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{decode, AssetMapping, Page, PageExport, PageSummary, Project, ProjectInfo};
