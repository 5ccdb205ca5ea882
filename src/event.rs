//! Event types shared across the sync boundary.
//!
//! Three views of the same event exist during a run:
//! - [`EventRecord`]: the canonical record persisted in the guild's event store
//! - [`RemoteEvent`]: the remote calendar provider's view, already normalized
//!   by the provider adapter
//! - [`EditorSnapshot`]: the user-editable view held in the chat platform's
//!   scheduled-event list
//!
//! Serialized field names stay camelCase because the surrounding backend's
//! documents and API payloads use that convention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentinel provider/editor id for records that have not been created on the
/// corresponding side yet. Unique-id invariants do not apply to it.
pub const PENDING_ID: &str = "pending";

/// A locally persisted guild event, the canonical unit of synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Store-internal id, assigned on insert.
    pub id: String,
    /// Remote provider's event id, or [`PENDING_ID`] until pushed.
    pub provider_event_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    /// Chat-side scheduled-event id, or [`PENDING_ID`] until the bot
    /// materializes the event there.
    pub editor_event_id: String,
    /// Remote series id when this record is an instance of a recurring event.
    pub recurring_event_id: Option<String>,
    /// Normalized recurrence-rule term (e.g. `FREQ=WEEKLY;BYDAY=MO`).
    pub recurrence_rule: Option<String>,
    /// Editor id of the series master, carried so instance edits can link
    /// back to the master's chat message.
    pub master_editor_event_id: Option<String>,
    /// Last modification timestamp on the local side.
    pub updated_at: DateTime<Utc>,
}

impl EventRecord {
    /// Whether this record still awaits creation on the remote provider.
    pub fn is_pending(&self) -> bool {
        self.provider_event_id == PENDING_ID
    }

    /// Build a fresh local record from a remote event, with the recurrence
    /// rule already resolved through the series master.
    ///
    /// The editor id starts out pending; the bot picks the record up later.
    pub fn from_remote(remote: &RemoteEvent, rule: Option<String>) -> Self {
        EventRecord {
            id: Uuid::new_v4().to_string(),
            provider_event_id: remote.id.clone(),
            name: remote.summary.clone(),
            description: remote.description.clone(),
            start: remote.start,
            end: remote.end,
            location: remote.location.clone(),
            editor_event_id: PENDING_ID.to_string(),
            recurring_event_id: remote.recurring_event_id.clone(),
            recurrence_rule: rule,
            master_editor_event_id: None,
            updated_at: remote.updated_at,
        }
    }

    /// Overwrite the scheduling fields with the remote values, keeping the
    /// local-only fields (store id, editor linkage) intact.
    pub fn updated_from_remote(&self, remote: &RemoteEvent, rule: Option<String>) -> Self {
        EventRecord {
            id: self.id.clone(),
            provider_event_id: remote.id.clone(),
            name: remote.summary.clone(),
            description: remote.description.clone(),
            start: remote.start,
            end: remote.end,
            location: remote.location.clone(),
            editor_event_id: self.editor_event_id.clone(),
            recurring_event_id: remote.recurring_event_id.clone(),
            recurrence_rule: rule,
            master_editor_event_id: self.master_editor_event_id.clone(),
            updated_at: remote.updated_at,
        }
    }
}

/// A calendar event as reported by the remote provider.
///
/// The provider adapter normalizes its API responses into this shape,
/// including flattening the recurrence block into a single bare rule term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteEvent {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    /// Set on instances of a recurring series, pointing at the master event.
    pub recurring_event_id: Option<String>,
    /// Bare rule term; present on series masters, absent on instances.
    pub recurrence_rule: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// The user-edited view of an event in the chat platform's scheduled-event
/// list. Divergence from the local record vetoes a remote overwrite; it is
/// never merged field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub name: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
}
