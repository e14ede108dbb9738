//! Typed views of the payloads returned by the API.
//!
//! # Design
//! `ApiClient` hands back `serde_json::Value` untouched. These records are an
//! opt-in decoding step for callers who want field access. Every field
//! defaults when absent and anything unrecognised is kept in `extra`, so a
//! schema change on the server side does not turn into a decode failure.
//! The API sends numbers as strings; they stay strings here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Decode a payload returned by `ApiClient` into one of the records below.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Entry of `getprojectslist`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub descr: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Local-path mapping for an exported asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetMapping {
    pub from: String,
    pub to: String,
}

/// Result of `getprojectinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub id: String,
    pub title: String,
    pub descr: String,
    pub customdomain: String,
    pub export_csspath: String,
    pub export_jspath: String,
    pub export_imgpath: String,
    pub indexpageid: String,
    pub customcsstext: String,
    pub favicon: String,
    pub page404id: String,
    pub images: Vec<AssetMapping>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry of `getpageslist`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSummary {
    pub id: String,
    pub projectid: String,
    pub title: String,
    pub descr: String,
    pub img: String,
    pub featureimg: String,
    pub alias: String,
    pub date: String,
    pub sort: String,
    pub published: String,
    pub filename: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `getpage` and `getpagefull`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    #[serde(flatten)]
    pub summary: PageSummary,
    pub html: String,
    pub js: Vec<Value>,
    pub css: Vec<Value>,
}

/// Result of `getpageexport` and `getpagefullexport`: markup with local
/// links plus the images to download for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageExport {
    #[serde(flatten)]
    pub summary: PageSummary,
    pub html: String,
    pub images: Vec<AssetMapping>,
}
