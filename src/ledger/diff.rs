//! Per-partition textual diff of sent vs. received

use similar::TextDiff;

use super::{split_duplicates, StateManager};

/// Render a human-readable diff between the sent and received ledgers,
/// one section per partition key of the sent ledger.
///
/// Received sequences are deduplicated first; when not in ordered mode
/// both sides are sorted before comparing, since order carries no meaning
/// there. Partition keys that only ever received events are not part of
/// this output. Returns the empty string when no partition shows a
/// discrepancy.
pub(super) fn diff(manager: &StateManager) -> String {
    let state = manager.state.read();

    let mut has_diff = false;
    let mut full_diff = String::from("Diff by partition key\n");

    for (key, sent_ids) in &state.sent {
        let mut sent = sent_ids.clone();
        let mut received = state
            .received
            .get(key)
            .map(|ids| split_duplicates(ids).0)
            .unwrap_or_default();

        if !manager.config.ordered {
            sent.sort();
            received.sort();
        }

        let body = render_diff(&received, &sent);
        if !body.is_empty() {
            has_diff = true;
        }
        full_diff.push_str(&format!("partitionkey: '{}' (-want, +got)\n{}", key, body));
    }

    if !has_diff {
        return String::new();
    }
    full_diff
}

/// Unified diff of want (deduplicated received) against got (sent), one
/// event ID per line; empty string when equal.
fn render_diff(want: &[String], got: &[String]) -> String {
    if want == got {
        return String::new();
    }
    let want_text = to_lines(want);
    let got_text = to_lines(got);
    TextDiff::from_lines(want_text.as_str(), got_text.as_str())
        .unified_diff()
        .to_string()
}

fn to_lines(ids: &[String]) -> String {
    let mut out = String::new();
    for id in ids {
        out.push_str(id);
        out.push('\n');
    }
    out
}
