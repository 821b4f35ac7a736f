mod settings;

pub use settings::{Config, ConfigStore, DomainEntry, CONFIG_FILE};
