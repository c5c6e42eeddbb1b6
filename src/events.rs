//! Observable events for external indexers and UIs

use serde::{Deserialize, Serialize};

use crate::{Address, Timestamp};

/// Emitted at each documented mutation point and buffered by the engine;
/// the host drains the buffer after every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceEvent {
    ProposalCreated {
        id: u64,
        proposer: Address,
        target: Address,
        vote_start: Timestamp,
        vote_end: Timestamp,
    },
    VoteCast {
        id: u64,
        voter: Address,
        support: bool,
        votes_for: u64,
        votes_against: u64,
    },
    ProposalQueued {
        id: u64,
        execution_time: Timestamp,
    },
    ProposalExecuted {
        id: u64,
    },
    ConfigChanged {
        parameter: String,
        old: u64,
        new: u64,
    },
    BlacklistUpdated {
        target: Address,
        added: bool,
    },
}
