//! API credentials and where they come from.
//!
//! Credentials live in a TOML file under a `[tilda]` table:
//!
//! ```toml
//! [tilda]
//! publickey = "..."
//! secretkey = "..."
//! ```
//!
//! The section may also be spelled `[Tilda]`. Older INI-style files with
//! unquoted values are not TOML and need their values quoted.
//!
//! A missing file, section, or key is a `Configuration` error at load time,
//! never at call time.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ApiError, Result};

pub const PUBLIC_KEY_ENV: &str = "TILDA_PUBLICKEY";
pub const SECRET_KEY_ENV: &str = "TILDA_SECRETKEY";

/// Public/secret key pair sent with every request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_key: String,
    secret_key: String,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(alias = "Tilda")]
    tilda: Option<Section>,
}

#[derive(Deserialize)]
struct Section {
    publickey: Option<String>,
    secretkey: Option<String>,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let public_key = require("publickey", Some(public_key.into()))?;
        let secret_key = require("secretkey", Some(secret_key.into()))?;
        Ok(Self {
            public_key,
            secret_key,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ApiError::Configuration(format!("invalid TOML: {e}")))?;
        let section = file
            .tilda
            .ok_or_else(|| ApiError::Configuration("missing [tilda] section".to_string()))?;
        Ok(Self {
            public_key: require("publickey", section.publickey)?,
            secret_key: require("secretkey", section.secretkey)?,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        let credentials = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded Tilda credentials");
        Ok(credentials)
    }

    /// Reads `TILDA_PUBLICKEY` and `TILDA_SECRETKEY`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            public_key: require("publickey", std::env::var(PUBLIC_KEY_ENV).ok())?,
            secret_key: require("secretkey", std::env::var(SECRET_KEY_ENV).ok())?,
        })
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

fn require(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Configuration(format!("missing {field}"))),
    }
}
