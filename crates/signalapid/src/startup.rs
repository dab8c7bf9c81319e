//! Store opening and first-boot seeding.

use anyhow::Context;
use signalapi_ingest::{IngestConfig, IngestReport, Seeder, read_seed};
use signalapi_state::SignalStore;
use tracing::info;

use crate::config::{DaemonConfig, SeedConfig};

/// Open the on-disk store, creating the data directory if needed.
pub fn open_store(config: &DaemonConfig) -> anyhow::Result<SignalStore> {
    std::fs::create_dir_all(&config.storage.data_dir).with_context(|| {
        format!(
            "creating data directory {}",
            config.storage.data_dir.display()
        )
    })?;
    let db_path = config.db_path();
    let store = SignalStore::open(&db_path)?;
    info!(path = ?db_path, "signal store opened");
    Ok(store)
}

/// Seed `store` per `seed`. Returns `None` when seeding is disabled.
pub fn seed_store(store: &SignalStore, seed: &SeedConfig) -> anyhow::Result<Option<IngestReport>> {
    if !seed.enabled {
        info!("seeding disabled");
        return Ok(None);
    }

    let csv = read_seed(seed.csv_path.as_deref())?;

    let config = IngestConfig {
        batch_size: seed.batch_size,
        ..IngestConfig::default()
    };
    let report = Seeder::new(store, config)?
        .run(&csv)
        .context("seeding signal store")?;
    info!(ran = report.ran(), signals = report.total_rows, "seeding finished");
    Ok(Some(report))
}

/// Open and seed the store described by `config`.
pub fn prepare_store(config: &DaemonConfig) -> anyhow::Result<SignalStore> {
    let store = open_store(config)?;
    seed_store(&store, &config.seed)?;
    Ok(store)
}
