//! Ledger - the delivery state manager
//!
//! This module contains the thread-safe sent/received ledgers keyed by
//! partition key, plus the derived views over them: duplicate splitting,
//! the per-partition diff, and the final report.

mod dedup;
mod diff;
mod report;

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;

use crate::types::{EventRecord, LedgerError, LedgerResult, Metrics, Report, VerifierConfig};

pub use dedup::split_duplicates;

/// Attribute under which producers carry the partition key
pub const PARTITION_KEY_ATTRIBUTE: &str = "partitionkey";

/// Sentinel partition key used when partitioning is off or the attribute
/// is absent
pub const UNKNOWN_PARTITION_KEY: &str = "unknown";

/// Terminal flag and final metrics, replaced as one unit so a reader can
/// never see the flag from one termination and the metrics from another.
#[derive(Debug, Default, Clone)]
pub(crate) struct TerminalState {
    pub(crate) terminated: bool,
    pub(crate) metrics: Metrics,
}

/// Everything behind the lock: the two ledgers and the terminal cell.
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    pub(crate) sent: HashMap<String, Vec<String>>,
    pub(crate) received: HashMap<String, Vec<String>>,
    pub(crate) terminal: TerminalState,
}

/// Thread-safe record of which events went into the system under test and
/// which came back out.
///
/// All mutation takes the write lock, including first-time creation of a
/// partition's sequence; all queries take the read lock and work on a
/// consistent snapshot. The ledgers themselves never leave this boundary
/// by reference, only clones and derived views do.
pub struct StateManager {
    pub(crate) state: RwLock<LedgerState>,
    pub(crate) config: VerifierConfig,
}

impl StateManager {
    /// Create a manager with empty ledgers
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            config,
        }
    }

    /// Get the configuration this manager was created with
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Record an event sent into the system under test
    pub fn record_sent(&self, event: &EventRecord) -> LedgerResult<()> {
        let key = self.partition_key_for(event)?;
        let mut state = self.state.write();
        state.sent.entry(key).or_default().push(event.id.clone());
        Ok(())
    }

    /// Record an event observed on the output stream.
    ///
    /// Duplicate arrivals are expected and recorded as-is; they are a
    /// measured quantity, not an error.
    pub fn record_received(&self, event: &EventRecord) -> LedgerResult<()> {
        let key = self.partition_key_for(event)?;
        let mut state = self.state.write();
        state.received.entry(key).or_default().push(event.id.clone());
        Ok(())
    }

    /// Partition key for an event: the sentinel unless ordered mode is on
    /// and the event carries a string-valued partition-key attribute.
    /// A present-but-non-string attribute is a typed failure, left to the
    /// caller to decide whether to skip the event or abort.
    fn partition_key_for(&self, event: &EventRecord) -> LedgerResult<String> {
        if !self.config.ordered {
            return Ok(UNKNOWN_PARTITION_KEY.to_string());
        }
        match event.attribute(PARTITION_KEY_ATTRIBUTE) {
            None => Ok(UNKNOWN_PARTITION_KEY.to_string()),
            Some(Value::String(key)) => Ok(key.clone()),
            Some(other) => Err(LedgerError::MalformedPartitionKey {
                event_id: event.id.clone(),
                found: other.clone(),
            }),
        }
    }

    /// Total raw received count across all partitions, duplicates included
    pub fn received_count(&self) -> usize {
        self.state.read().received.values().map(Vec::len).sum()
    }

    /// Mark the run terminated and attach the driver's final metrics.
    ///
    /// One-way transition: there is no way back to active. A second call
    /// is last-write-wins: the flag stays set and the metrics are
    /// overwritten. Insertions arriving after termination are still
    /// recorded; stopping producers first is the driver's job.
    pub fn mark_terminated(&self, metrics: Metrics) {
        let mut state = self.state.write();
        state.terminal = TerminalState {
            terminated: true,
            metrics,
        };
    }

    /// Human-readable per-partition diff of sent vs. received; empty
    /// string means no discrepancy (from diff.rs)
    pub fn diff(&self) -> String {
        diff::diff(self)
    }

    /// Build the structured report from the current ledger state
    /// (from report.rs)
    pub fn generate_report(&self) -> Report {
        report::generate_report(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderedConfig;
    use serde_json::json;

    #[test]
    fn test_unordered_mode_ignores_partition_attribute() {
        let manager = StateManager::new(VerifierConfig::unordered());

        let e1 = EventRecord::new("e1").with_attribute(PARTITION_KEY_ATTRIBUTE, "p1");
        let e2 = EventRecord::new("e2");
        manager.record_sent(&e1).unwrap();
        manager.record_sent(&e2).unwrap();

        let state = manager.state.read();
        assert_eq!(state.sent.len(), 1);
        assert_eq!(
            state.sent[UNKNOWN_PARTITION_KEY],
            vec!["e1".to_string(), "e2".to_string()]
        );
    }

    #[test]
    fn test_ordered_mode_missing_attribute_falls_back_to_sentinel() {
        let config = VerifierConfig::from_ordered(Some(OrderedConfig::default()));
        let manager = StateManager::new(config);

        manager.record_sent(&EventRecord::new("e1")).unwrap();
        manager
            .record_sent(&EventRecord::new("e2").with_attribute(PARTITION_KEY_ATTRIBUTE, "p1"))
            .unwrap();

        let state = manager.state.read();
        assert_eq!(state.sent[UNKNOWN_PARTITION_KEY], vec!["e1".to_string()]);
        assert_eq!(state.sent["p1"], vec!["e2".to_string()]);
    }

    #[test]
    fn test_malformed_partition_key_is_a_typed_error() {
        let config = VerifierConfig::from_ordered(Some(OrderedConfig::default()));
        let manager = StateManager::new(config);

        let bad = EventRecord::new("e1").with_attribute(PARTITION_KEY_ATTRIBUTE, json!(42));
        let err = manager.record_sent(&bad).unwrap_err();
        match err {
            LedgerError::MalformedPartitionKey { event_id, found } => {
                assert_eq!(event_id, "e1");
                assert_eq!(found, json!(42));
            }
        }

        // The failed insertion left no trace
        assert!(manager.state.read().sent.is_empty());
    }

    #[test]
    fn test_received_count_is_raw() {
        let manager = StateManager::new(VerifierConfig::unordered());
        let e1 = EventRecord::new("e1");
        manager.record_received(&e1).unwrap();
        manager.record_received(&e1).unwrap();
        assert_eq!(manager.received_count(), 2);
    }

    #[test]
    fn test_mark_terminated_is_last_write_wins() {
        let manager = StateManager::new(VerifierConfig::unordered());
        manager.mark_terminated(json!({"run": 1}));
        manager.mark_terminated(json!({"run": 2}));

        let report = manager.generate_report();
        assert!(report.terminated);
        assert_eq!(report.metrics, json!({"run": 2}));
    }
}
