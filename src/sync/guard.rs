//! Per-guild run serialization.
//!
//! Two overlapping runs for the same guild race each other (double-created
//! events, create-vs-delete interleavings), so the engine holds a per-guild
//! lock for the whole pass. Runs for different guilds proceed in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub(crate) struct GuildLocks {
    guilds: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GuildLocks {
    /// Acquire the lock for one guild, waiting until any in-flight run for
    /// it finishes. Guild entries are kept for the lifetime of the engine.
    pub(crate) async fn acquire(&self, guild_id: &str) -> OwnedMutexGuard<()> {
        let gate = {
            let mut guilds = self.guilds.lock().await;
            guilds.entry(guild_id.to_string()).or_default().clone()
        };
        gate.lock_owned().await
    }
}
