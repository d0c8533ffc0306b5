//! Data types for the delivery ledger
//!
//! This module contains the plain data structures shared across the crate:
//! event records, verifier configuration, the final report, and error types.

mod config;
mod error;
mod event;
mod report;

pub use config::{OrderedConfig, VerifierConfig};
pub use error::{LedgerError, LedgerResult};
pub use event::EventRecord;
pub use report::{Metrics, Report};
