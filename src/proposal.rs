//! Proposal records and lifecycle predicates

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::action::ActionPayload;
use crate::error::{GovernanceError, Result};
use crate::{Address, Timestamp};

/// A governance proposal.
///
/// Records are permanent: created once, mutated only by voting and
/// execution, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub target: Address,
    pub payload: ActionPayload,
    pub description: String,
    pub vote_start: Timestamp,
    /// `vote_start` plus the voting period in force at creation.
    pub vote_end: Timestamp,
    /// Block height at creation; reserved for voting-power snapshots.
    pub snapshot_block: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    /// Addresses that have cast a ballot; append-only.
    pub has_voted: HashSet<Address>,
    /// Latched true only by a successful execution.
    pub executed: bool,
    /// Earliest execution timestamp, set once when the proposal queues.
    pub execution_time: Option<Timestamp>,
}

impl Proposal {
    pub fn voting_active(&self, now: Timestamp) -> bool {
        now >= self.vote_start && now <= self.vote_end
    }

    pub fn voting_ended(&self, now: Timestamp) -> bool {
        now > self.vote_end
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against
    }

    /// Record a ballot. One vote per address for the proposal's lifetime.
    pub fn record_vote(&mut self, voter: Address, support: bool, now: Timestamp) -> Result<()> {
        if !self.voting_active(now) {
            return Err(GovernanceError::VotingNotActive(self.id));
        }
        if self.has_voted.contains(&voter) {
            return Err(GovernanceError::AlreadyVoted(self.id));
        }
        self.has_voted.insert(voter);
        if support {
            self.votes_for += 1;
        } else {
            self.votes_against += 1;
        }
        Ok(())
    }

    /// Derived lifecycle flags and tallies for external callers.
    pub fn view(&self, now: Timestamp) -> ProposalView {
        ProposalView {
            id: self.id,
            active: self.voting_active(now),
            ended: self.voting_ended(now),
            queued: self.execution_time.is_some() && !self.executed,
            executable: !self.executed
                && self.execution_time.map(|at| now >= at).unwrap_or(false),
            executed: self.executed,
            votes_for: self.votes_for,
            votes_against: self.votes_against,
            execution_time: self.execution_time,
        }
    }
}

/// Snapshot of a proposal's derived state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    pub id: u64,
    pub active: bool,
    pub ended: bool,
    pub queued: bool,
    pub executable: bool,
    pub executed: bool,
    pub votes_for: u64,
    pub votes_against: u64,
    pub execution_time: Option<Timestamp>,
}
