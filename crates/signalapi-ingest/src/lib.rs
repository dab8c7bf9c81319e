//! signalapi-ingest — first-boot seeding of the signal store.
//!
//! The pipeline runs once at startup, before the API accepts traffic:
//!
//! 1. verify the SHA-256 of the CSV bytes against [`EXPECTED_SEED_SHA256`]
//! 2. skip everything if the store already holds signals
//! 3. parse `node_id,sampling_interval_ms,deadband_value,deadband_type,active`
//!    rows, skipping short lines
//! 4. insert in batches of [`DEFAULT_BATCH_SIZE`]
//!
//! A checksum mismatch or a malformed number aborts the run.

pub mod checksum;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod source;

pub use checksum::{EXPECTED_SEED_SHA256, sha256_hex, verify_checksum};
pub use error::{IngestError, IngestResult};
pub use parser::{ParsedLine, parse_line};
pub use pipeline::{DEFAULT_BATCH_SIZE, IngestConfig, IngestOutcome, IngestReport, Seeder};
pub use source::read_seed;

/// The seed file shipped with the binary.
pub const SEED_CSV: &[u8] = include_bytes!("../data/signals.csv");
