//! Error types for the Tilda API client.
//!
//! # Design
//! The variants follow the points where a call can fail, in order: loading
//! credentials, naming the endpoint, building the URL, moving bytes over the
//! wire, and finally interpreting the response envelope. Transport errors are
//! boxed as-is so callers can downcast to the concrete HTTP library error.

use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `ApiClient` and its building blocks.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials could not be loaded or are incomplete.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The endpoint name is not one of the seven known API functions.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The server answered with `status: "ERROR"`.
    #[error("remote API error: {message}")]
    RemoteApi { message: String },

    /// The envelope carried no recognised `status` field.
    #[error("unknown error: unrecognised response status")]
    Unknown,

    /// Timeout, connection failure or any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// A non-2xx response whose body was not a JSON envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be parsed as JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ApiError>;
