#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Community vote and score aggregation.
//!
//! Each report carries an upvote/downvote tally, and each voter holds a
//! per-report vote state. Casting the vote you already hold clears it;
//! casting the opposite vote moves both counters by one. The net score is
//! `upvotes - downvotes`, recomputed from the counters on demand.
//!
//! This is single-writer counter bookkeeping: no server-side authority is
//! enforced over who voted, matching the client-held vote state of the
//! report views.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A voter's current vote on a single report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VoteState {
    /// Upvoted.
    Up,
    /// Downvoted.
    Down,
    /// No active vote.
    None,
}

/// Upvote/downvote counters for a single report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    /// Number of upvotes.
    pub upvotes: u32,
    /// Number of downvotes.
    pub downvotes: u32,
}

impl VoteTally {
    /// Creates a tally from existing counters.
    #[must_use]
    pub const fn new(upvotes: u32, downvotes: u32) -> Self {
        Self { upvotes, downvotes }
    }

    /// Net score: `upvotes - downvotes`.
    #[must_use]
    pub fn score(self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Applies a vote transition and returns the voter's new state.
    ///
    /// Casting the same vote as `previous` clears it; casting a different
    /// vote retracts the previous one (if any) and records the new one.
    /// Counters saturate at zero rather than going negative, so a stale
    /// `previous` claim can never corrupt the tally.
    #[must_use]
    pub fn apply(&mut self, previous: VoteState, cast: VoteState) -> VoteState {
        if cast == previous {
            self.retract(previous);
            return VoteState::None;
        }

        self.retract(previous);
        match cast {
            VoteState::Up => self.upvotes += 1,
            VoteState::Down => self.downvotes += 1,
            VoteState::None => {}
        }
        cast
    }

    fn retract(&mut self, state: VoteState) {
        match state {
            VoteState::Up => self.upvotes = self.upvotes.saturating_sub(1),
            VoteState::Down => self.downvotes = self.downvotes.saturating_sub(1),
            VoteState::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_upvote_increments() {
        let mut tally = VoteTally::default();
        let state = tally.apply(VoteState::None, VoteState::Up);
        assert_eq!(state, VoteState::Up);
        assert_eq!(tally, VoteTally::new(1, 0));
        assert_eq!(tally.score(), 1);
    }

    #[test]
    fn repeating_a_vote_clears_it() {
        let mut tally = VoteTally::new(1, 0);
        let state = tally.apply(VoteState::Up, VoteState::Up);
        assert_eq!(state, VoteState::None);
        assert_eq!(tally, VoteTally::new(0, 0));
    }

    #[test]
    fn switching_vote_moves_both_counters() {
        let mut tally = VoteTally::new(1, 0);
        let state = tally.apply(VoteState::Up, VoteState::Down);
        assert_eq!(state, VoteState::Down);
        assert_eq!(tally, VoteTally::new(0, 1));
        assert_eq!(tally.score(), -1);
    }

    #[test]
    fn casting_none_retracts() {
        let mut tally = VoteTally::new(0, 3);
        let state = tally.apply(VoteState::Down, VoteState::None);
        assert_eq!(state, VoteState::None);
        assert_eq!(tally, VoteTally::new(0, 2));
    }

    #[test]
    fn counters_never_go_negative() {
        let mut tally = VoteTally::default();
        // Stale claim: voter says they had an upvote that was never counted.
        let state = tally.apply(VoteState::Up, VoteState::Down);
        assert_eq!(state, VoteState::Down);
        assert_eq!(tally, VoteTally::new(0, 1));
    }

    #[test]
    fn score_is_signed() {
        assert_eq!(VoteTally::new(2, 5).score(), -3);
        assert_eq!(VoteTally::new(5, 2).score(), 3);
        assert_eq!(VoteTally::default().score(), 0);
    }
}
