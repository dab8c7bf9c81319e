//! Signal statistics computation.

use std::collections::BTreeMap;

use serde::Serialize;
use signalapi_state::Signal;

/// Bucket label for signals without a deadband type.
pub const UNKNOWN_DEADBAND_TYPE: &str = "UNKNOWN";

/// Aggregate metrics over a non-empty set of signals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignalStats {
    pub total_signals: u64,
    pub active_signals: u64,
    /// Always `total_signals - active_signals`.
    pub inactive_signals: u64,
    /// Mean of configured sampling intervals, `0.0` when none are configured.
    pub average_sampling_interval: f64,
    /// Median of configured sampling intervals, `0.0` when none are configured.
    pub median_sampling_interval: f64,
    pub deadband_type_distribution: BTreeMap<String, u64>,
    /// `0` when no deadband value is configured.
    pub min_deadband_value: i32,
    /// `0` when no deadband value is configured.
    pub max_deadband_value: i32,
}

/// Compute statistics over a snapshot.
///
/// Returns `None` for an empty snapshot so callers can tell "nothing
/// stored" apart from a populated result whose aggregates happen to be zero.
pub fn compute(signals: &[Signal]) -> Option<SignalStats> {
    if signals.is_empty() {
        return None;
    }

    let total_signals = signals.len() as u64;
    let active_signals = signals.iter().filter(|s| s.active).count() as u64;

    let mut intervals: Vec<u32> = signals
        .iter()
        .filter_map(|s| s.sampling_interval_ms)
        .collect();
    intervals.sort_unstable();

    let mut deadband_type_distribution = BTreeMap::new();
    for signal in signals {
        let label = signal
            .deadband_type
            .as_deref()
            .unwrap_or(UNKNOWN_DEADBAND_TYPE);
        *deadband_type_distribution
            .entry(label.to_string())
            .or_insert(0u64) += 1;
    }

    let deadbands = signals.iter().filter_map(|s| s.deadband_value);
    let (min_deadband_value, max_deadband_value) = deadbands
        .fold(None, |acc: Option<(i32, i32)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })
        .unwrap_or((0, 0));

    Some(SignalStats {
        total_signals,
        active_signals,
        inactive_signals: total_signals - active_signals,
        average_sampling_interval: mean(&intervals),
        median_sampling_interval: median(&intervals),
        deadband_type_distribution,
        min_deadband_value,
        max_deadband_value,
    })
}

fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    sum as f64 / values.len() as f64
}

/// Median of an ascending slice.
fn median(sorted: &[u32]) -> f64 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }
    let mid = len / 2;
    if len % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    }
}
