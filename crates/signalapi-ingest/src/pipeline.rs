//! Seeder — verify, gate, parse, and batch-insert the seed CSV.

use signalapi_state::{Signal, SignalRepository};
use tracing::{debug, error, info, warn};

use crate::checksum::{EXPECTED_SEED_SHA256, verify_checksum};
use crate::error::{IngestError, IngestResult};
use crate::parser::{ParsedLine, parse_line};

/// Signals per `insert_many` call.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Ingestion settings.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Hex SHA-256 the CSV bytes must match.
    pub expected_sha256: String,
    /// Maximum signals per insert. Must be at least 1.
    pub batch_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            expected_sha256: EXPECTED_SEED_SHA256.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// What a seeding run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The store already held signals; nothing was read past the checksum.
    AlreadyPopulated,
    Loaded {
        /// Data lines parsed into signals.
        parsed: u64,
        /// Lines skipped for having fewer than five fields.
        skipped: u64,
        /// Number of `insert_many` calls.
        batches: u64,
    },
}

/// Result of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestReport {
    pub outcome: IngestOutcome,
    /// Row count of the store once the run finished.
    pub total_rows: u64,
}

impl IngestReport {
    /// Whether this run wrote to the store.
    pub fn ran(&self) -> bool {
        matches!(self.outcome, IngestOutcome::Loaded { .. })
    }
}

/// Loads the seed CSV into a signal repository on first boot.
pub struct Seeder<'a, R: SignalRepository + ?Sized> {
    repo: &'a R,
    config: IngestConfig,
}

impl<'a, R: SignalRepository + ?Sized> Seeder<'a, R> {
    /// Create a seeder for the given repository.
    pub fn new(repo: &'a R, config: IngestConfig) -> IngestResult<Self> {
        if config.batch_size == 0 {
            return Err(IngestError::InvalidBatchSize);
        }
        Ok(Self { repo, config })
    }

    /// Verify `csv` and load it if the repository is empty.
    ///
    /// The checksum is checked first, so a tampered file fails even when
    /// seeding would otherwise be skipped.
    pub fn run(&self, csv: &[u8]) -> IngestResult<IngestReport> {
        verify_checksum(csv, &self.config.expected_sha256)?;

        let existing = self.repo.count()?;
        if existing > 0 {
            info!(signals = existing, "store already populated, skipping seed");
            return Ok(IngestReport {
                outcome: IngestOutcome::AlreadyPopulated,
                total_rows: existing,
            });
        }

        info!("empty store detected, loading seed file");
        let outcome = match self.load(csv) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.discard_partial_load();
                return Err(e);
            }
        };
        let total_rows = self.repo.count()?;
        info!(signals = total_rows, ?outcome, "seed loaded");

        Ok(IngestReport {
            outcome,
            total_rows,
        })
    }

    /// Parse `csv` and insert every well-formed line, without the checksum
    /// or emptiness checks.
    pub fn load(&self, csv: &[u8]) -> IngestResult<IngestOutcome> {
        let text = std::str::from_utf8(csv)?;
        // The batch size comes from user config; cap the up-front allocation.
        let mut batch: Vec<Signal> =
            Vec::with_capacity(self.config.batch_size.min(DEFAULT_BATCH_SIZE));
        let mut parsed = 0u64;
        let mut skipped = 0u64;
        let mut batches = 0u64;

        // Line 1 is the header.
        for (idx, line) in text.lines().enumerate().skip(1) {
            let line_no = idx + 1;
            match parse_line(line, line_no)? {
                ParsedLine::Signal(signal) => {
                    batch.push(signal);
                    parsed += 1;
                }
                ParsedLine::Short { fields } => {
                    warn!(line = line_no, fields, content = line, "skipping malformed line");
                    skipped += 1;
                    continue;
                }
            }

            if batch.len() >= self.config.batch_size {
                self.flush(&mut batch)?;
                batches += 1;
            }
        }

        if !batch.is_empty() {
            self.flush(&mut batch)?;
            batches += 1;
        }

        Ok(IngestOutcome::Loaded {
            parsed,
            skipped,
            batches,
        })
    }

    /// Drop batches flushed before a fatal error. The store was empty when
    /// the run started, so clearing it restores that state and the next boot
    /// seeds again instead of serving partial data.
    fn discard_partial_load(&self) {
        match self.repo.clear() {
            Ok(()) => warn!("seed load failed, discarded partially loaded signals"),
            Err(e) => error!(
                error = %e,
                "seed load failed and partial signals could not be discarded"
            ),
        }
    }

    fn flush(&self, batch: &mut Vec<Signal>) -> IngestResult<()> {
        self.repo.insert_many(batch)?;
        debug!(size = batch.len(), "flushed signal batch");
        batch.clear();
        Ok(())
    }
}
