//! Calendar reconciliation core for guild admin backends.
//!
//! This crate keeps a guild's locally stored events consistent with a
//! remote calendar provider (the long-term source of truth) and a
//! chat-platform scheduled-event list whose human edits must never be
//! silently overwritten. It provides:
//! - [`SyncEngine`] for running one reconciliation pass per guild
//! - [`RecurrencePattern`] for translating recurrence descriptors into
//!   RFC 5545 rule terms
//! - port traits ([`RemoteCalendar`], [`EventStore`], [`EditorChannel`])
//!   that the backend's adapters implement
//!
//! The HTTP surface, OAuth flow, and chat bot live in the surrounding
//! backend; they consume this crate through the ports.

pub mod config;
pub mod error;
pub mod event;
pub mod ports;
pub mod recurrence;
pub mod sync;

pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use event::{EditorSnapshot, EventRecord, RemoteEvent, PENDING_ID};
pub use ports::{AccessToken, EditorChannel, EventStore, RemoteCalendar};
pub use recurrence::{OrdinalWeekday, RecurrencePattern};
pub use sync::{
    decide_local_record, decide_remote_event, SyncDecision, SyncEngine, SyncReport, SyncWindow,
};
