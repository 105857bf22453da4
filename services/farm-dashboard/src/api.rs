//! Farm server API client
//!
//! Wire types mirror the JSON served by the farm under `/api/flags` and
//! `/api/hfi`. Every call is a single request/response exchange; failures
//! are classified through [`DashboardError::kind`] and never retried here.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::io::{HttpClient, HttpResponse};
use crate::pagination::FetchWindow;

/// A captured flag as returned by /api/flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagEntry {
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub exploit: String,
    #[serde(default)]
    pub flag: String,
    pub timestamp: f64,
    #[serde(default)]
    pub submission_timestamp: Option<f64>,
    #[serde(default)]
    pub lifetime: f64,
    #[serde(default)]
    pub system_message: Option<String>,
}

/// A checker as returned by /api/hfi
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckerEntry {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub port: Option<f64>,
    #[serde(default)]
    pub delta: Option<f64>,
}

impl CheckerEntry {
    pub fn new(service: &str, port: u16, delta: i64) -> Self {
        Self {
            service: Some(service.to_string()),
            port: Some(f64::from(port)),
            delta: Some(delta as f64),
        }
    }

    /// Port truncated to an integer, `NaN` when absent
    pub fn port_number(&self) -> f64 {
        self.port.map(f64::trunc).unwrap_or(f64::NAN)
    }

    /// Delta truncated to an integer, `NaN` when absent
    pub fn delta_number(&self) -> f64 {
        self.delta.map(f64::trunc).unwrap_or(f64::NAN)
    }
}

/// Body of an add-checker request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewChecker {
    pub service: String,
    pub port: u16,
    pub delta: i64,
}

/// Body of a remove-checker request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct RemoveChecker {
    remove: bool,
    delta: i64,
}

/// Client for the farm server's dashboard endpoints
pub struct FarmApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for FarmApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FarmApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl FarmApi {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created FarmApi at {}", base_url);
        Self { base_url, http }
    }

    pub fn flags_url(&self, window: FetchWindow) -> String {
        format!(
            "{}/api/flags?start={}&count={}",
            self.base_url, window.start, window.count
        )
    }

    fn checkers_url(&self) -> String {
        format!("{}/api/hfi", self.base_url)
    }

    /// Fetch one page of flags
    pub async fn list_flags(&self, window: FetchWindow) -> crate::Result<Vec<FlagEntry>> {
        let response = self.http.get(&self.flags_url(window)).await?;
        parse_response(response)
    }

    /// Fetch the configured checkers
    pub async fn list_checkers(&self) -> crate::Result<Vec<CheckerEntry>> {
        let response = self.http.get(&self.checkers_url()).await?;
        parse_response(response)
    }

    /// Add a checker, returning the server's post-mutation list
    pub async fn add_checker(&self, checker: &NewChecker) -> crate::Result<Vec<CheckerEntry>> {
        let body = serde_json::to_value(checker)?;
        let response = self.http.post_json(&self.checkers_url(), &body).await?;
        parse_response(response)
    }

    /// Remove the checker identified by `delta`, returning the post-mutation list
    pub async fn remove_checker(&self, delta: i64) -> crate::Result<Vec<CheckerEntry>> {
        let body = serde_json::to_value(RemoveChecker {
            remove: true,
            delta,
        })?;
        let response = self.http.post_json(&self.checkers_url(), &body).await?;
        parse_response(response)
    }
}

fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> crate::Result<T> {
    if response.status != 200 {
        tracing::debug!("Non-200 response from farm: status={}", response.status);
        return Err(DashboardError::Server {
            status: response.status,
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}
