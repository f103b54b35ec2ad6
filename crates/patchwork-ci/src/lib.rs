//! Remote CI status for patchwork.
//!
//! This crate fetches recent workflow runs from a GitHub-style Actions REST
//! endpoint (`GET /repos/<owner>/<repo>/actions/runs`) and renders them as a
//! short text summary. The transport sits behind [`RunSource`] so reports can
//! be produced from any backend.

pub mod config;
pub mod http;
pub mod report;

pub use config::CiConfig;
pub use http::HttpRunSource;
pub use report::{format_timestamp, render_error, render_runs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("HTTP {code} for {url}")]
    Status { code: u16, url: String },
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("ci config error: {0}")]
    Config(String),
}

/// One workflow execution as reported by the CI provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub conclusion: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

/// The provider sends `null` for some text fields; read those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the runs listing endpoint. Other fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunsResponse {
    #[serde(default)]
    pub workflow_runs: Vec<RunRecord>,
}

/// Trait for anything that can list recent workflow runs.
pub trait RunSource {
    /// Most recent runs first, at most `limit` of them.
    fn recent_runs(&self, limit: usize) -> Result<Vec<RunRecord>, CiError>;
}
