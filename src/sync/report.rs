//! Per-run result counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a sync run did: records aligned between the two sides (`synced`),
/// records newly created on either side (`created`), and local records
/// removed (`deleted`). Events skipped over a pending editor edit or an
/// isolated per-record failure appear in no counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced: usize,
    pub created: usize,
    pub deleted: usize,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.synced == 0 && self.created == 0 && self.deleted == 0
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} synced, {} created, {} deleted",
            self.synced, self.created, self.deleted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_noop() {
        let mut report = SyncReport::default();
        assert!(report.is_noop());

        report.created = 2;
        report.deleted = 1;
        assert!(!report.is_noop());
        assert_eq!(report.to_string(), "0 synced, 2 created, 1 deleted");
    }
}
