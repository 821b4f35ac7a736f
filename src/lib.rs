pub mod config;
pub mod dns;
pub mod error;
pub mod eventlog;
pub mod ip;
pub mod updater;
