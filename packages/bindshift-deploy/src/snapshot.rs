//! Snapshot tracker
//!
//! Holds the original text of every script rewritten during one deploy
//! cycle so post-deploy can put it back. Restoration is best effort: one
//! failed write never stops the others.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{DeployError, Result};
use crate::store::SourceStore;

/// Original contents of one rewritten file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    pub location: PathBuf,
    pub original: String,
    pub captured_at: DateTime<Utc>,
}

/// A record that could not be written back
#[derive(Debug)]
pub struct RestoreFailure {
    pub location: PathBuf,
    pub error: DeployError,
}

/// Outcome of [`SnapshotTracker::restore_all`]
#[derive(Debug, Default)]
pub struct RestoreReport {
    pub restored: Vec<PathBuf>,
    pub failures: Vec<RestoreFailure>,
}

impl RestoreReport {
    pub fn total(&self) -> usize {
        self.restored.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// `Err(PartialRestore)` when any record failed
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        if self.is_complete() {
            return Ok(self.restored);
        }
        Err(DeployError::PartialRestore {
            restored: self.restored.len(),
            failed: self.failures.len(),
            total: self.total(),
        })
    }
}

/// Ordered list of snapshots for one cycle
#[derive(Debug, Default)]
pub struct SnapshotTracker {
    records: Vec<SnapshotRecord>,
}

impl SnapshotTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `original` for `location`.
    ///
    /// Returns `false` without touching the existing record when the
    /// location was already captured; the first original wins.
    pub fn record(&mut self, location: impl Into<PathBuf>, original: impl Into<String>) -> bool {
        let location = location.into();
        if self.contains(&location) {
            tracing::debug!(path = %location.display(), "snapshot already recorded");
            return false;
        }
        self.records.push(SnapshotRecord {
            location,
            original: original.into(),
            captured_at: Utc::now(),
        });
        true
    }

    /// Drop the record for `location`, e.g. when its rewrite never reached disk
    pub fn forget(&mut self, location: &Path) -> Option<SnapshotRecord> {
        let index = self.records.iter().position(|r| r.location == location)?;
        Some(self.records.remove(index))
    }

    pub fn contains(&self, location: &Path) -> bool {
        self.records.iter().any(|r| r.location == location)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SnapshotRecord] {
        &self.records
    }

    /// Write every original back in recording order. The list is drained
    /// whatever the outcome.
    pub fn restore_all(&mut self, store: &dyn SourceStore) -> RestoreReport {
        let mut report = RestoreReport::default();

        for record in self.records.drain(..) {
            match store.write(&record.location, &record.original) {
                Ok(()) => {
                    tracing::debug!(path = %record.location.display(), "restored");
                    report.restored.push(record.location);
                }
                Err(error) => {
                    tracing::error!(
                        path = %record.location.display(),
                        error = %error,
                        "failed to restore original source"
                    );
                    report.failures.push(RestoreFailure {
                        location: record.location,
                        error,
                    });
                }
            }
        }

        report
    }
}
