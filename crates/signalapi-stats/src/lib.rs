//! signalapi-stats — aggregate metrics over a snapshot of signals.
//!
//! [`compute`] is a pure function: it holds no state and takes the whole
//! snapshot by reference, so concurrent requests never share anything.

pub mod summary;

pub use summary::{SignalStats, UNKNOWN_DEADBAND_TYPE, compute};
