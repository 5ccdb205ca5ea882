//! Port traits for the systems a sync run touches.
//!
//! The engine never talks to a concrete calendar API, document store, or
//! chat platform. Adapters implement these traits; tests substitute
//! in-memory fakes.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::event::{EditorSnapshot, EventRecord, RemoteEvent};

/// An OAuth access token valid for the duration of a run.
///
/// Refresh handling lives behind [`RemoteCalendar::valid_access_token`];
/// the engine only carries the token between calls.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        AccessToken(token)
    }
}

// Tokens must not leak into logs or error messages.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The remote calendar provider, the long-term source of truth for
/// scheduling facts.
#[async_trait]
pub trait RemoteCalendar: Send + Sync {
    /// Return an access token usable right now, refreshing if necessary.
    async fn valid_access_token(&self, guild_id: &str) -> SyncResult<AccessToken>;

    /// Fetch events overlapping `[now, now + window_months]`: every event
    /// ending at or after `now` and starting no later than the horizon,
    /// including ones already in progress. The engine reads absence from
    /// this set as a remote deletion, so the bound is on end time, never
    /// on start time alone. At most `max_results` events are returned
    /// (the provider's page-size cap).
    async fn events(
        &self,
        token: &AccessToken,
        max_results: u32,
        window_months: u32,
    ) -> SyncResult<Vec<RemoteEvent>>;

    /// Fetch the master event of a recurring series. Instances do not carry
    /// their own recurrence rule; the master does.
    async fn master_event(
        &self,
        token: &AccessToken,
        recurring_event_id: &str,
    ) -> SyncResult<RemoteEvent>;

    /// Create an event from a local record, returning the provider's view
    /// with its assigned id.
    async fn create_event(
        &self,
        token: &AccessToken,
        record: &EventRecord,
    ) -> SyncResult<RemoteEvent>;

    /// Push local values onto an existing remote event.
    async fn update_event(
        &self,
        token: &AccessToken,
        provider_event_id: &str,
        record: &EventRecord,
    ) -> SyncResult<RemoteEvent>;
}

/// The guild's event store. Implementations are already scoped to one guild;
/// none of the operations take a guild id.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn all_events(&self) -> SyncResult<Vec<EventRecord>>;

    /// Persist a new record, returning it as stored.
    async fn insert_event(&self, record: &EventRecord) -> SyncResult<EventRecord>;

    /// Overwrite the record with the same store id, returning it as stored.
    async fn update_event(&self, record: &EventRecord) -> SyncResult<EventRecord>;

    /// Delete records matching the provider event id. Returns whether
    /// anything was removed.
    async fn delete_by_provider_id(&self, provider_event_id: &str) -> SyncResult<bool>;

    /// Replace the pending sentinel with the provider-assigned id after a
    /// successful remote create.
    async fn set_provider_event_id(
        &self,
        id: &str,
        provider_event_id: &str,
    ) -> SyncResult<EventRecord>;
}

/// The chat platform's scheduled-event list, keyed by editor event id.
///
/// Snapshots are a veto input: the engine compares them against local
/// records to detect human edits, and never writes through this port.
#[async_trait]
pub trait EditorChannel: Send + Sync {
    async fn snapshots(&self, guild_id: &str) -> SyncResult<HashMap<String, EditorSnapshot>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken::new("ya29.secret-value");
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
        assert_eq!(token.as_str(), "ya29.secret-value");
    }
}
