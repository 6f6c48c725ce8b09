//! HTTP client for the perk backend.
//!
//! Issues a single GET against the listing endpoint per `fetch_all` call.
//! Transport errors, non-success statuses and undecodable bodies all come
//! back as [`LoadError`]; there is no retry.

use crate::config::ClientConfig;
use crate::error::{LoadError, Result};
use crate::parser::parse_perks;
use crate::source::PerkSource;
use crate::types::PerkCollection;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Fetches the public perk collection from the backend.
#[derive(Debug, Clone)]
pub struct HttpPerkSource {
    client: Client,
    endpoint: String,
}

impl HttpPerkSource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoadError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    /// Full URL this source requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PerkSource for HttpPerkSource {
    fn name(&self) -> &str {
        "HttpPerkSource"
    }

    async fn fetch_all(&self) -> Result<PerkCollection> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| {
                warn!("Request to {} failed: {}", self.endpoint, source);
                LoadError::Request {
                    url: self.endpoint.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend returned {} for {}", status, self.endpoint);
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await.map_err(|source| LoadError::Request {
            url: self.endpoint.clone(),
            source,
        })?;

        let collection = parse_perks(&body)?;
        info!("Fetched {} perks from {}", collection.len(), self.endpoint);
        Ok(collection)
    }
}
