//! signalapid.toml configuration.
//!
//! Every section and field is optional; built-in defaults apply to whatever
//! the file leaves out, and CLI flags override the file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use signalapi_ingest::DEFAULT_BATCH_SIZE;

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "signals.redb";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Run first-boot seeding.
    pub enabled: bool,
    /// External CSV to seed from. The embedded seed file is used when unset.
    pub csv_path: Option<PathBuf>,
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            csv_path: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Values given on the command line. `None`/`false` leaves the config as is.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub skip_seed: bool,
}

impl DaemonConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DaemonConfig =
            toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(mut self, cli: CliOverrides) -> Self {
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(dir) = cli.data_dir {
            self.storage.data_dir = dir;
        }
        if let Some(csv) = cli.csv {
            self.seed.csv_path = Some(csv);
        }
        if let Some(size) = cli.batch_size {
            self.seed.batch_size = size;
        }
        if cli.skip_seed {
            self.seed.enabled = false;
        }
        self
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.bind, self.server.port)
    }

    pub fn db_path(&self) -> PathBuf {
        self.storage.data_dir.join(DB_FILE_NAME)
    }
}
