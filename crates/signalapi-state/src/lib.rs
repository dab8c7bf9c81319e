//! signalapi-state — embedded signal store.
//!
//! Backed by [redb](https://docs.rs/redb), provides persistent and in-memory
//! storage for telemetry signal descriptors keyed by `node_id`.
//!
//! # Architecture
//!
//! Signals are JSON-serialized into redb's `&[u8]` value column. The
//! ingestion pipeline and the HTTP layer only see the [`SignalRepository`]
//! capability; [`SignalStore`] is the redb-backed implementation.
//!
//! The `SignalStore` is `Clone` + `Send` + `Sync` (backed by `Arc<Database>`)
//! and can be shared across async tasks.

pub mod error;
pub mod repository;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{StateError, StateResult};
pub use repository::SignalRepository;
pub use store::SignalStore;
pub use types::*;
