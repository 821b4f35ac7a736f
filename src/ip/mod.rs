mod external;

pub use external::{IpDiscovery, IP_ADDRESS_PROVIDERS};
