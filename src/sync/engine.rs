//! The reconciliation engine.
//!
//! One [`SyncEngine::run`] call performs a single synchronization pass for a
//! guild: pull remote changes into the store, then push local changes out
//! and prune what no longer belongs. Precondition failures (token, either
//! fetch) abort the run; failures on individual events are logged and
//! skipped so one bad record cannot wedge the whole guild.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::guard::GuildLocks;
use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::event::{EditorSnapshot, EventRecord, RemoteEvent};
use crate::ports::{AccessToken, EditorChannel, EventStore, RemoteCalendar};
use crate::sync::{decide_local_record, decide_remote_event, SyncDecision, SyncReport, SyncWindow};

/// Reconciles a guild's event store against its remote calendar.
///
/// The engine owns its ports and serializes runs per guild; callers may
/// share one engine across tasks and trigger runs freely.
pub struct SyncEngine<R, S> {
    remote: R,
    store: S,
    config: SyncConfig,
    locks: GuildLocks,
}

impl<R: RemoteCalendar, S: EventStore> SyncEngine<R, S> {
    pub fn new(remote: R, store: S, config: SyncConfig) -> Self {
        SyncEngine {
            remote,
            store,
            config,
            locks: GuildLocks::default(),
        }
    }

    /// Run one synchronization pass for a guild.
    ///
    /// `editor_events` maps editor event ids to their current chat-side
    /// snapshots; pass `None` when no editor is attached, which disables
    /// the veto and lets the remote side win every conflict.
    pub async fn run(
        &self,
        guild_id: &str,
        editor_events: Option<HashMap<String, EditorSnapshot>>,
    ) -> SyncResult<SyncReport> {
        let _run = self.locks.acquire(guild_id).await;
        debug!(guild_id, "starting calendar sync run");

        let token = self.remote.valid_access_token(guild_id).await?;
        let remote_events = self
            .remote
            .events(&token, self.config.max_results, self.config.window_months)
            .await?;
        let mut records = self.store.all_events().await?;

        let editor_events = editor_events.unwrap_or_default();
        debug!(
            guild_id,
            remote = remote_events.len(),
            local = records.len(),
            editor = editor_events.len(),
            "fetched event sets"
        );

        let window = SyncWindow::starting_now(self.config.window_months);
        let mut report = SyncReport::default();
        let mut rule_cache: HashMap<String, Option<String>> = HashMap::new();

        self.apply_pull(
            &token,
            &remote_events,
            &mut records,
            &editor_events,
            &mut rule_cache,
            &mut report,
        )
        .await;

        self.apply_push(
            &token,
            &remote_events,
            &mut records,
            window,
            &mut rule_cache,
            &mut report,
        )
        .await;

        info!(
            guild_id,
            synced = report.synced,
            created = report.created,
            deleted = report.deleted,
            "calendar sync finished"
        );
        Ok(report)
    }

    /// Like [`run`](Self::run), but fetches the editor snapshots first. A
    /// snapshot fetch failure aborts the run like any other precondition.
    pub async fn run_with_editor<E: EditorChannel>(
        &self,
        guild_id: &str,
        editor: &E,
    ) -> SyncResult<SyncReport> {
        let snapshots = editor.snapshots(guild_id).await?;
        self.run(guild_id, Some(snapshots)).await
    }

    /// Remote → local pass: every remote event lands in the store unless a
    /// pending editor edit vetoes the overwrite. Records created here are
    /// appended to `records` so the push pass sees them.
    async fn apply_pull(
        &self,
        token: &AccessToken,
        remote_events: &[RemoteEvent],
        records: &mut Vec<EventRecord>,
        editor_events: &HashMap<String, EditorSnapshot>,
        rule_cache: &mut HashMap<String, Option<String>>,
        report: &mut SyncReport,
    ) {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if !record.is_pending() {
                index.insert(record.provider_event_id.clone(), i);
            }
        }

        for remote_event in remote_events {
            let rule = self.resolve_rule(token, remote_event, rule_cache).await;

            let (decision, slot) = match index.get(remote_event.id.as_str()) {
                None => (SyncDecision::CreateLocal, None),
                Some(&i) => {
                    let record = &records[i];
                    let snapshot = editor_events.get(record.editor_event_id.as_str());
                    let decision =
                        decide_remote_event(remote_event, rule.as_deref(), Some(record), snapshot);
                    (decision, Some(i))
                }
            };

            match (decision, slot) {
                (SyncDecision::CreateLocal, _) => {
                    let record = EventRecord::from_remote(remote_event, rule);
                    match self.store.insert_event(&record).await {
                        Ok(stored) => {
                            index.insert(stored.provider_event_id.clone(), records.len());
                            records.push(stored);
                            report.created += 1;
                        }
                        Err(e) => {
                            warn!(error = %e, event = %remote_event.id, "failed to store new remote event; skipping");
                        }
                    }
                }
                (SyncDecision::UpdateLocal, Some(i)) => {
                    let updated = records[i].updated_from_remote(remote_event, rule);
                    match self.store.update_event(&updated).await {
                        Ok(stored) => {
                            records[i] = stored;
                            report.synced += 1;
                        }
                        Err(e) => {
                            warn!(error = %e, event = %remote_event.id, "failed to update local record; skipping");
                        }
                    }
                }
                (SyncDecision::Skip, _) => {
                    debug!(event = %remote_event.id, "editor edit pending; leaving local record untouched");
                }
                _ => {}
            }
        }
    }

    /// Local → remote and cleanup pass: prune expired and out-of-window
    /// records, drop records orphaned by a remote deletion, promote pending
    /// records onto the provider, and push local edits that are strictly
    /// newer than the remote view.
    async fn apply_push(
        &self,
        token: &AccessToken,
        remote_events: &[RemoteEvent],
        records: &mut [EventRecord],
        window: SyncWindow,
        rule_cache: &mut HashMap<String, Option<String>>,
        report: &mut SyncReport,
    ) {
        let remote_by_id: HashMap<&str, &RemoteEvent> =
            remote_events.iter().map(|e| (e.id.as_str(), e)).collect();

        for i in 0..records.len() {
            let decision = {
                let record = &records[i];
                let remote_match = if record.is_pending() {
                    None
                } else {
                    remote_by_id.get(record.provider_event_id.as_str()).copied()
                };

                match remote_match {
                    Some(remote_event) => {
                        // The rule only matters when the timestamp direction
                        // allows a push; skip the master lookup otherwise.
                        let rule = if record.updated_at > remote_event.updated_at {
                            self.resolve_rule(token, remote_event, rule_cache).await
                        } else {
                            remote_event.recurrence_rule.clone()
                        };
                        decide_local_record(record, Some(remote_event), rule.as_deref(), window)
                    }
                    None => decide_local_record(record, None, None, window),
                }
            };

            match decision {
                SyncDecision::DeleteLocal => {
                    let provider_event_id = &records[i].provider_event_id;
                    match self.store.delete_by_provider_id(provider_event_id).await {
                        Ok(_) => report.deleted += 1,
                        Err(e) => {
                            warn!(error = %e, event = %provider_event_id, "failed to delete local record; skipping");
                        }
                    }
                }
                SyncDecision::CreateRemote => {
                    let created = match self.remote.create_event(token, &records[i]).await {
                        Ok(created) => created,
                        Err(e) => {
                            warn!(error = %e, record = %records[i].id, "failed to create remote event; skipping");
                            continue;
                        }
                    };
                    match self
                        .store
                        .set_provider_event_id(&records[i].id, &created.id)
                        .await
                    {
                        Ok(stored) => {
                            records[i] = stored;
                            report.created += 1;
                        }
                        Err(e) => {
                            // The next run will create a duplicate remote
                            // event; the store still holds the sentinel.
                            warn!(error = %e, record = %records[i].id, "created remotely but failed to record provider id");
                        }
                    }
                }
                SyncDecision::UpdateRemote => {
                    let record = &records[i];
                    match self
                        .remote
                        .update_event(token, &record.provider_event_id, record)
                        .await
                    {
                        Ok(_) => report.synced += 1,
                        Err(e) => {
                            warn!(error = %e, event = %record.provider_event_id, "failed to push local changes; skipping");
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Resolve the recurrence rule for a remote event. Series instances
    /// take the master's rule, fetched at most once per series per run; a
    /// failed master lookup falls back to the instance's own rule value.
    async fn resolve_rule(
        &self,
        token: &AccessToken,
        event: &RemoteEvent,
        cache: &mut HashMap<String, Option<String>>,
    ) -> Option<String> {
        let Some(series_id) = event.recurring_event_id.as_deref() else {
            return event.recurrence_rule.clone();
        };

        if let Some(rule) = cache.get(series_id) {
            return rule.clone();
        }

        match self.remote.master_event(token, series_id).await {
            Ok(master) => {
                cache.insert(series_id.to_string(), master.recurrence_rule.clone());
                master.recurrence_rule
            }
            Err(e) => {
                warn!(error = %e, series = series_id, "master event lookup failed; using instance rule");
                event.recurrence_rule.clone()
            }
        }
    }
}
