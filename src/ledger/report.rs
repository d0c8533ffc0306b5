//! Report assembly

use std::collections::{HashMap, HashSet};

use crate::types::Report;

use super::{split_duplicates, StateManager};

/// Assemble the structured delivery report from one consistent read of
/// the ledger state.
///
/// Iteration is driven by the sent ledger's partition keys. For each key
/// the received sequence is deduplicated; lost events are the set
/// difference sent-minus-clean-received, rendered sorted for reproducible
/// output; the received view and count stay raw, duplicates included.
/// The terminal flag and metrics are captured in the same pass, so a
/// report can never mix the flag of one termination with the metrics of
/// another. Never mutates the ledger and may be called at any time.
pub(super) fn generate_report(manager: &StateManager) -> Report {
    let state = manager.state.read();

    let mut report = Report {
        lost_by_partition: HashMap::new(),
        duplicates_by_partition: HashMap::new(),
        received_by_partition: HashMap::new(),
        lost_count: 0,
        duplicate_count: 0,
        received_count: 0,
        metrics: state.terminal.metrics.clone(),
        terminated: state.terminal.terminated,
    };

    for (key, sent_ids) in &state.sent {
        let mut sent = sent_ids.clone();
        let raw_received = state.received.get(key).cloned().unwrap_or_default();
        let (mut received, mut duplicates) = split_duplicates(&raw_received);

        if !manager.config.ordered {
            sent.sort();
            received.sort();
            duplicates.sort();
        }

        let received_set: HashSet<&str> = received.iter().map(String::as_str).collect();
        let mut lost: Vec<String> = sent
            .iter()
            .filter(|id| !received_set.contains(id.as_str()))
            .cloned()
            .collect();
        lost.sort();
        lost.dedup();

        report.lost_count += lost.len();
        report.lost_by_partition.insert(key.clone(), lost);

        report.duplicate_count += duplicates.len();
        report.duplicates_by_partition.insert(key.clone(), duplicates);

        report.received_count += raw_received.len();
        report.received_by_partition.insert(key.clone(), raw_received);
    }

    report
}

#[cfg(test)]
mod tests {
    use crate::types::{EventRecord, VerifierConfig};

    use super::super::StateManager;

    #[test]
    fn test_lost_events_are_the_set_difference() {
        let manager = StateManager::new(VerifierConfig::unordered());
        for id in ["e1", "e2", "e3"] {
            manager.record_sent(&EventRecord::new(id)).unwrap();
        }
        for id in ["e1", "e3"] {
            manager.record_received(&EventRecord::new(id)).unwrap();
        }

        let report = manager.generate_report();
        assert_eq!(report.lost_by_partition["unknown"], vec!["e2".to_string()]);
        assert_eq!(report.lost_count, 1);
        assert_eq!(report.received_count, 2);
    }

    #[test]
    fn test_received_view_stays_raw_while_duplicates_are_counted() {
        let manager = StateManager::new(VerifierConfig::unordered());
        manager.record_sent(&EventRecord::new("e1")).unwrap();
        manager.record_received(&EventRecord::new("e1")).unwrap();
        manager.record_received(&EventRecord::new("e1")).unwrap();

        let report = manager.generate_report();
        assert_eq!(
            report.received_by_partition["unknown"],
            vec!["e1".to_string(), "e1".to_string()]
        );
        assert_eq!(report.received_count, 2);
        assert_eq!(report.duplicate_count, 1);
        assert_eq!(
            report.duplicates_by_partition["unknown"],
            vec!["e1".to_string()]
        );
        assert!(report.lost_by_partition["unknown"].is_empty());
        assert_eq!(report.lost_count, 0);
    }

    #[test]
    fn test_empty_ledger_yields_empty_report() {
        let manager = StateManager::new(VerifierConfig::unordered());
        let report = manager.generate_report();
        assert!(report.lost_by_partition.is_empty());
        assert_eq!(report.received_count, 0);
        assert!(!report.terminated);
        assert!(report.metrics.is_null());
    }
}
