//! In-memory report store.
//!
//! The report list lives in a `RwLock`-guarded vector inside the shared
//! application state. Concurrent updates are last-write-wins; there is no
//! optimistic concurrency control and no persistence across restarts.

use std::sync::RwLock;

use civic_map_community::{VoteState, VoteTally};
use civic_map_issue_models::{IssueStatus, ReportRecord};
use uuid::Uuid;

/// Errors that can occur during report store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No report exists with the given ID.
    #[error("unknown report: {0}")]
    UnknownReport(Uuid),

    /// The requested status change is not an allowed transition.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// The report's current status.
        from: IssueStatus,
        /// The rejected target status.
        to: IssueStatus,
    },
}

/// Thread-safe in-memory collection of report records.
#[derive(Default)]
pub struct ReportStore {
    reports: RwLock<Vec<ReportRecord>>,
}

impl ReportStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new report.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn insert(&self, record: ReportRecord) {
        self.reports
            .write()
            .expect("report store lock poisoned")
            .push(record);
    }

    /// Returns a snapshot of all reports.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn all(&self) -> Vec<ReportRecord> {
        self.reports
            .read()
            .expect("report store lock poisoned")
            .clone()
    }

    /// Returns a single report by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownReport`] if no report has the ID.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn get(&self, id: Uuid) -> Result<ReportRecord, StoreError> {
        self.reports
            .read()
            .expect("report store lock poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::UnknownReport(id))
    }

    /// Moves a report to a new status, validating the transition.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownReport`] for an unknown ID and
    /// [`StoreError::InvalidTransition`] when the report's current status
    /// does not allow the move.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn change_status(
        &self,
        id: Uuid,
        next: IssueStatus,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<ReportRecord, StoreError> {
        let mut reports = self.reports.write().expect("report store lock poisoned");
        let record = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::UnknownReport(id))?;

        if !record.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                from: record.status,
                to: next,
            });
        }

        record.status = next;
        record.updated_at = now;
        Ok(record.clone())
    }

    /// Applies a vote transition to a report's tally.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownReport`] if no report has the ID.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn apply_vote(
        &self,
        id: Uuid,
        previous: VoteState,
        cast: VoteState,
    ) -> Result<(VoteTally, VoteState), StoreError> {
        let mut reports = self.reports.write().expect("report store lock poisoned");
        let record = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::UnknownReport(id))?;

        let mut tally = VoteTally::new(record.upvotes, record.downvotes);
        let state = tally.apply(previous, cast);
        record.upvotes = tally.upvotes;
        record.downvotes = tally.downvotes;

        Ok((tally, state))
    }
}
