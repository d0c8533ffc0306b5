//! Final report produced by the state manager

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metrics attached by the driver at termination time.
///
/// Opaque to the core: whatever the driver hands to `mark_terminated` is
/// carried through into every subsequent report untouched.
pub type Metrics = serde_json::Value;

/// Immutable snapshot of delivery correctness, derived on demand.
///
/// Every per-partition mapping is keyed by partition key; the keys
/// iterated are those of the sent ledger, so a key that only ever
/// appeared on the received side does not show up here (its raw arrivals
/// are still visible through `StateManager::received_count`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Sent but never received (after removing duplicate arrivals)
    pub lost_by_partition: HashMap<String, Vec<String>>,
    /// Arrivals beyond the first occurrence of each ID
    pub duplicates_by_partition: HashMap<String, Vec<String>>,
    /// Raw received sequences, duplicates included
    pub received_by_partition: HashMap<String, Vec<String>>,
    pub lost_count: usize,
    pub duplicate_count: usize,
    pub received_count: usize,
    pub metrics: Metrics,
    pub terminated: bool,
}
