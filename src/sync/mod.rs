//! Reconciliation engine and its decision/report types.

mod compare;
mod decision;
mod engine;
mod guard;
mod report;
mod window;

pub use decision::{decide_local_record, decide_remote_event, SyncDecision};
pub use engine::SyncEngine;
pub use report::SyncReport;
pub use window::SyncWindow;

pub(crate) use compare::{record_matches_remote, record_matches_snapshot};
