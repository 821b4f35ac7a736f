use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::provider::{DynDnsProvider, UpdateOutcome};
use crate::config::DomainEntry;

const NAMECHEAP_DDNS_BASE: &str = "https://dynamicdns.park-your-domain.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Namecheap's dynamic-DNS endpoint: a single GET with host, domain,
/// password and ip as query parameters, answering 200 on success.
pub struct NamecheapProvider {
    client: Client,
    base_url: String,
}

impl NamecheapProvider {
    pub fn new() -> Self {
        Self::with_base_url(NAMECHEAP_DDNS_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for NamecheapProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DynDnsProvider for NamecheapProvider {
    async fn update(&self, entry: &DomainEntry, ip: &str) -> Result<UpdateOutcome> {
        // Substitutions are bound by parameter name, never by position.
        let response = self
            .client
            .get(format!("{}/update", self.base_url))
            .query(&[
                ("host", entry.host.as_str()),
                ("domain", entry.domain.as_str()),
                ("password", entry.password.as_str()),
                ("ip", ip),
            ])
            .send()
            .await
            .context("Failed to send update request to Namecheap")?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(UpdateOutcome { status, body })
    }

    fn provider_name(&self) -> &'static str {
        "namecheap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_success_is_http_200_only() {
        let ok = UpdateOutcome {
            status: StatusCode::OK,
            body: String::new(),
        };
        assert!(ok.is_success());

        let unauthorized = UpdateOutcome {
            status: StatusCode::UNAUTHORIZED,
            body: "bad password".to_string(),
        };
        assert!(!unauthorized.is_success());
    }
}
