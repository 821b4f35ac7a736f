use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::dns::DynDnsProvider;
use crate::eventlog::EventLog;
use crate::ip::IpDiscovery;

/// Tally of one update pass. `failed` counts entries that got a non-200
/// response or a transport error; the caller decides what that means for
/// the exit code.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSummary {
    pub attempted: usize,
    pub failed: usize,
}

/// One full pass: discover the public IP once, then push it to every
/// configured domain in order. IP discovery failure aborts the pass before
/// any update request; per-domain failures are logged and skipped.
pub async fn run_update_pass(
    config: &Config,
    discovery: &IpDiscovery,
    provider: &dyn DynDnsProvider,
    event_log: &EventLog,
) -> Result<UpdateSummary> {
    let ip_address = discovery.get_ip_address().await?;
    info!("Discovered public IP {}", ip_address);

    let mut summary = UpdateSummary::default();

    for entry in &config.domains {
        event_log.log(&format!(
            "Update IP address for {}:{}",
            entry.host, entry.domain
        ))?;
        summary.attempted += 1;

        match provider.update(entry, &ip_address).await {
            Ok(outcome) if outcome.is_success() => {
                event_log.log(&format!(
                    "Updating domain {} successful - updated IP address to {}",
                    entry.domain, ip_address
                ))?;
            }
            Ok(outcome) => {
                event_log.log(&format!(
                    "Updating domain {} failed - HTTP Status {} - Response {}",
                    entry.domain,
                    outcome.status.as_u16(),
                    outcome.body
                ))?;
                summary.failed += 1;
            }
            Err(e) => {
                event_log.log(&format!("Updating domain {} failed - {}", entry.domain, e))?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
