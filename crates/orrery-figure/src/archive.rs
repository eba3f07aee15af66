//! Exoplanet catalog queries
//!
//! Fetches the discovery-year column from the NASA Exoplanet Archive over
//! TAP (Table Access Protocol). The archive's synchronous endpoint takes an
//! ADQL query as a URL parameter:
//!
//! ```text
//! https://exoplanetarchive.ipac.caltech.edu/TAP/sync?query=<adql>&format=json
//! ```
//!
//! With `format=json` the response is a plain JSON array of row objects:
//!
//! ```json
//! [
//!   { "hostname": "11 Com", "pl_name": "11 Com b", "disc_year": 2007 }
//! ]
//! ```
//!
//! One fixed query per run; no retry, no caching.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{FigureError, Result};

/// NASA Exoplanet Archive TAP base URL
pub const ARCHIVE_TAP_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP";

/// ADQL query for default-flagged planetary-system rows
pub const DISCOVERY_QUERY: &str = "SELECT hostname,pl_name,disc_year FROM ps WHERE default_flag=1";

/// One row of the planetary-systems result set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlanetRow {
    /// Host star name
    pub hostname: String,

    /// Planet designation
    pub pl_name: String,

    /// Year the discovery was published
    pub disc_year: i32,
}

/// TAP client for the exoplanet archive
pub struct ArchiveClient {
    /// HTTP client for the sync endpoint
    client: reqwest::Client,

    /// TAP base URL (without the trailing `/sync`)
    base_url: String,
}

impl ArchiveClient {
    /// Create a client against the public archive
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_TAP_URL)
    }

    /// Create a client against a custom TAP base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run the discovery query and return all rows
    pub async fn fetch_planets(&self) -> Result<Vec<PlanetRow>> {
        let url = format!("{}/sync", self.base_url);

        debug!("TAP query at {}: {}", url, DISCOVERY_QUERY);

        let response = self
            .client
            .get(&url)
            .query(&[("query", DISCOVERY_QUERY), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FigureError::ArchiveStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let rows: Vec<PlanetRow> = serde_json::from_str(&body)?;

        info!("📡 Archive returned {} planet rows", rows.len());

        Ok(rows)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Discovery year of every row, in result-set order
pub fn discovery_years(rows: &[PlanetRow]) -> Vec<i32> {
    rows.iter().map(|row| row.disc_year).collect()
}

/// Number of distinct host stars in the result set
pub fn distinct_hosts(rows: &[PlanetRow]) -> usize {
    rows.iter()
        .map(|row| row.hostname.as_str())
        .collect::<HashSet<_>>()
        .len()
}
