//! Ingestion loops
//!
//! Two independent consumers drain the sent and received event streams
//! into the state manager. Each loop owns one channel receiver, suspends
//! only while waiting for the next event, and fires a single completion
//! signal once its source closes. There is no cancellation channel; the
//! driver stops a loop by closing its sender side.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::ledger::StateManager;
use crate::types::EventRecord;

/// Which stream a loop is draining, for log lines
#[derive(Debug, Clone, Copy)]
enum Side {
    Sent,
    Received,
}

impl Side {
    fn label(self) -> &'static str {
        match self {
            Side::Sent => "sent",
            Side::Received => "received",
        }
    }
}

/// Spawn the loop draining the sent stream into the ledger.
///
/// The returned receiver resolves exactly once, after the source channel
/// has been closed and every event taken from it has been processed.
/// Must be called within a tokio runtime.
pub fn drain_sent(
    manager: Arc<StateManager>,
    events: mpsc::Receiver<EventRecord>,
) -> oneshot::Receiver<()> {
    drain(manager, events, Side::Sent)
}

/// Spawn the loop draining the received stream into the ledger.
/// Same completion contract as [`drain_sent`].
pub fn drain_received(
    manager: Arc<StateManager>,
    events: mpsc::Receiver<EventRecord>,
) -> oneshot::Receiver<()> {
    drain(manager, events, Side::Received)
}

fn drain(
    manager: Arc<StateManager>,
    mut events: mpsc::Receiver<EventRecord>,
    side: Side,
) -> oneshot::Receiver<()> {
    let (done_tx, done_rx) = oneshot::channel();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let result = match side {
                Side::Sent => manager.record_sent(&event),
                Side::Received => manager.record_received(&event),
            };
            // A malformed event fails its own insertion only; the loop
            // keeps draining so later events still get recorded.
            if let Err(e) = result {
                eprintln!("{} ingestion: skipping event: {}", side.label(), e);
            }
        }
        // Nobody awaiting completion is fine
        let _ = done_tx.send(());
    });
    done_rx
}
