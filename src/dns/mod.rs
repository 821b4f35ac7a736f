mod namecheap;
mod provider;

pub use namecheap::NamecheapProvider;
pub use provider::{DynDnsProvider, UpdateOutcome};
