use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::DomainEntry;

/// What the provider said about one update attempt. Anything other than
/// HTTP 200 is a failure; the body carries the provider's error text.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub status: StatusCode,
    pub body: String,
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

#[async_trait]
pub trait DynDnsProvider: Send + Sync {
    /// Push `ip` as the new address for one domain entry. Returns Err only
    /// for transport-level failures; a non-200 response is an Ok outcome
    /// that the caller inspects.
    async fn update(&self, entry: &DomainEntry, ip: &str) -> Result<UpdateOutcome>;

    fn provider_name(&self) -> &'static str;
}
