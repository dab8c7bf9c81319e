//! signalapid — the signal API daemon.
//!
//! Startup is strictly ordered: open the store, seed it (any seeding error
//! is fatal), and only then bind the HTTP listener.

pub mod config;
pub mod startup;

pub use config::{CliOverrides, DaemonConfig};
