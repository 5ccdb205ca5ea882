//! Field comparison shared by both reconciliation passes.
//!
//! Both directions must agree on what "differs" means. Text fields compare
//! trimmed, with a missing value equal to the empty string. Start and end
//! compare as instants, so a provider serializing the same moment in a
//! different offset does not register as a change.

use crate::event::{EditorSnapshot, EventRecord, RemoteEvent};

fn text_eq(a: Option<&str>, b: Option<&str>) -> bool {
    a.unwrap_or("").trim() == b.unwrap_or("").trim()
}

/// Whether a local record agrees with the remote view, with the remote's
/// recurrence rule already resolved through the series master.
pub(crate) fn record_matches_remote(
    record: &EventRecord,
    remote: &RemoteEvent,
    rule: Option<&str>,
) -> bool {
    text_eq(Some(&record.name), Some(&remote.summary))
        && text_eq(record.description.as_deref(), remote.description.as_deref())
        && record.start == remote.start
        && record.end == remote.end
        && text_eq(record.location.as_deref(), remote.location.as_deref())
        && record.recurring_event_id == remote.recurring_event_id
        && text_eq(record.recurrence_rule.as_deref(), rule)
}

/// Whether a local record agrees with its editor snapshot. A mismatch means
/// a human edited the event in the chat platform since the record was last
/// written, and the record must not be overwritten from the remote side.
pub(crate) fn record_matches_snapshot(record: &EventRecord, snapshot: &EditorSnapshot) -> bool {
    text_eq(Some(&record.name), Some(&snapshot.name))
        && text_eq(record.description.as_deref(), snapshot.description.as_deref())
        && record.start == snapshot.start
        && record.end == snapshot.end
        && text_eq(record.location.as_deref(), snapshot.location.as_deref())
}
