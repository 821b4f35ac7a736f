use std::time::Duration;

use reqwest::Client;

use crate::error::Error;

/// Lookup services tried in order; the first HTTP 200 wins.
pub const IP_ADDRESS_PROVIDERS: &[&str] = &["http://ifconfig.me", "http://icanhazip.com"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Discovers the caller's public IP from a fallback list of "what is my IP"
/// endpoints. The response body is trimmed and used verbatim; the provider
/// is trusted to return an address, so no syntactic validation is done.
pub struct IpDiscovery {
    client: Client,
    providers: Vec<String>,
}

impl IpDiscovery {
    pub fn new() -> Self {
        Self::with_providers(IP_ADDRESS_PROVIDERS.iter().map(|p| p.to_string()))
    }

    pub fn with_providers(providers: impl IntoIterator<Item = String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            providers: providers.into_iter().collect(),
        }
    }

    pub async fn get_ip_address(&self) -> Result<String, Error> {
        for provider in &self.providers {
            tracing::debug!("Get IP address from {}", provider);
            match self.fetch(provider).await {
                Ok(ip) => return Ok(ip),
                Err(e) => {
                    tracing::debug!("Failed to get IP from {}: {}", provider, e);
                }
            }
        }

        Err(Error::NoIpAddress)
    }

    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body.trim().to_string())
    }
}

impl Default for IpDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_order() {
        assert_eq!(
            IP_ADDRESS_PROVIDERS,
            &["http://ifconfig.me", "http://icanhazip.com"]
        );
    }

    #[tokio::test]
    async fn test_no_providers_fails() {
        let discovery = IpDiscovery::with_providers(Vec::new());
        let err = discovery.get_ip_address().await.unwrap_err();
        assert!(matches!(err, Error::NoIpAddress));
    }
}
