//! The fixed set of remote API functions and their query parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// One of the seven read-only functions exposed by the Tilda API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ProjectsList,
    ProjectInfo,
    PagesList,
    Page,
    PageFull,
    PageExport,
    PageFullExport,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::ProjectsList,
        Endpoint::ProjectInfo,
        Endpoint::PagesList,
        Endpoint::Page,
        Endpoint::PageFull,
        Endpoint::PageExport,
        Endpoint::PageFullExport,
    ];

    /// Name used in the URL path, e.g. `/v1/getpageslist/`.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::ProjectsList => "getprojectslist",
            Endpoint::ProjectInfo => "getprojectinfo",
            Endpoint::PagesList => "getpageslist",
            Endpoint::Page => "getpage",
            Endpoint::PageFull => "getpagefull",
            Endpoint::PageExport => "getpageexport",
            Endpoint::PageFullExport => "getpagefullexport",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ApiError::InvalidEndpoint(s.to_string()))
    }
}

/// Scalar value of a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::UInt(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::UInt(value as u64)
    }
}
