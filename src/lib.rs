//! Delivery Ledger
//!
//! The verification core of an event-delivery test harness: it records
//! which events were sent into a system under test and which were
//! received back out, then reports whether delivery was lossless,
//! duplicate-free, and (in ordered mode) order-preserving per partition
//! key.
//!
//! # Modules
//!
//! - `types`: Core data structures (EventRecord, VerifierConfig, Report)
//! - `ledger`: Thread-safe state manager with dedup, diff, and report views
//! - `ingest`: Async loops draining event streams into the ledger
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use delivery_ledger::{drain_received, drain_sent, EventRecord, StateManager, VerifierConfig};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = Arc::new(StateManager::new(VerifierConfig::unordered()));
//!     let (sent_tx, sent_rx) = mpsc::channel::<EventRecord>(64);
//!     let (recv_tx, recv_rx) = mpsc::channel::<EventRecord>(64);
//!
//!     let sent_done = drain_sent(Arc::clone(&manager), sent_rx);
//!     let recv_done = drain_received(Arc::clone(&manager), recv_rx);
//!
//!     // ... driver produces events, feeds the system under test,
//!     // forwards its output, then closes both senders ...
//!     drop(sent_tx);
//!     drop(recv_tx);
//!
//!     let _ = sent_done.await;
//!     let _ = recv_done.await;
//!
//!     manager.mark_terminated(serde_json::json!({"produced": 0}));
//!     assert_eq!(manager.diff(), "");
//! }
//! ```

pub mod ingest;
pub mod ledger;
pub mod types;

// Re-export commonly used items at crate root
pub use ingest::{drain_received, drain_sent};
pub use ledger::{
    split_duplicates, StateManager, PARTITION_KEY_ATTRIBUTE, UNKNOWN_PARTITION_KEY,
};
pub use types::{
    EventRecord, LedgerError, LedgerResult, Metrics, OrderedConfig, Report, VerifierConfig,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
