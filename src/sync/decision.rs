//! Pure reconciliation decisions.
//!
//! Each event yields exactly one decision per pass. The functions here take
//! every input they need as arguments and perform no I/O, so the whole
//! policy (editor veto included) is testable without fakes.

use std::fmt;

use crate::event::{EditorSnapshot, EventRecord, RemoteEvent};
use crate::sync::{record_matches_remote, record_matches_snapshot, SyncWindow};

/// Outcome of reconciling one event in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDecision {
    /// Remote event unknown locally: insert a record for it.
    CreateLocal,
    /// Remote differs and no veto applies: overwrite the local record.
    UpdateLocal,
    /// A human edit is pending in the editor channel: leave the record alone.
    Skip,
    /// Record expired, out of window, or orphaned by a remote deletion.
    DeleteLocal,
    /// Record never reached the provider: create it there.
    CreateRemote,
    /// Local record is newer and differs: push it to the provider.
    UpdateRemote,
    NoOp,
}

impl fmt::Display for SyncDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncDecision::CreateLocal => "create-local",
            SyncDecision::UpdateLocal => "update-local",
            SyncDecision::Skip => "skip",
            SyncDecision::DeleteLocal => "delete-local",
            SyncDecision::CreateRemote => "create-remote",
            SyncDecision::UpdateRemote => "update-remote",
            SyncDecision::NoOp => "no-op",
        };
        f.write_str(name)
    }
}

/// Decide what to do with one remote event (the remote → local pass).
///
/// `rule` is the remote event's recurrence rule resolved through its series
/// master. Priority order: a diverged editor snapshot vetoes everything,
/// otherwise the remote values win over the local record.
pub fn decide_remote_event(
    remote: &RemoteEvent,
    rule: Option<&str>,
    local: Option<&EventRecord>,
    snapshot: Option<&EditorSnapshot>,
) -> SyncDecision {
    let Some(record) = local else {
        return SyncDecision::CreateLocal;
    };

    if let Some(snapshot) = snapshot {
        if !record_matches_snapshot(record, snapshot) {
            return SyncDecision::Skip;
        }
    }

    if record_matches_remote(record, remote, rule) {
        SyncDecision::NoOp
    } else {
        SyncDecision::UpdateLocal
    }
}

/// Decide what to do with one local record (the local → remote / cleanup
/// pass).
///
/// Window pruning applies before anything else: a record ending in the past
/// or starting beyond the horizon is deleted no matter what the provider
/// holds. A record the provider no longer knows is deleted unless it never
/// reached the provider at all, in which case it is created there. An
/// existing remote counterpart is only written when the local record is
/// strictly newer and actually differs.
pub fn decide_local_record(
    record: &EventRecord,
    remote: Option<&RemoteEvent>,
    remote_rule: Option<&str>,
    window: SyncWindow,
) -> SyncDecision {
    if !window.retains(record) {
        return SyncDecision::DeleteLocal;
    }

    let Some(remote) = remote else {
        return if record.is_pending() {
            SyncDecision::CreateRemote
        } else {
            SyncDecision::DeleteLocal
        };
    };

    // updated_at stamps come from two independently clocked systems; a
    // skewed local clock can push stale values or sit on a fresh edit.
    if record.updated_at > remote.updated_at && !record_matches_remote(record, remote, remote_rule)
    {
        SyncDecision::UpdateRemote
    } else {
        SyncDecision::NoOp
    }
}
