//! Governance error types

use thiserror::Error;

use crate::access::Role;
use crate::Timestamp;

/// Every public operation fails with exactly one of these kinds; a failing
/// operation leaves no partial state behind.
#[derive(Error, Debug)]
pub enum GovernanceError {
    #[error("Proposal not found: {0}")]
    ProposalNotFound(u64),

    #[error("Voting period not active for proposal {0}")]
    VotingNotActive(u64),

    #[error("Voting period has not ended for proposal {0}")]
    VotingNotEnded(u64),

    #[error("Already voted on proposal {0}")]
    AlreadyVoted(u64),

    #[error("Quorum not reached: {total_votes} votes cast, {required} required")]
    QuorumNotReached { total_votes: u64, required: u64 },

    #[error("Proposal failed: {votes_for} for, {votes_against} against")]
    ProposalFailed { votes_for: u64, votes_against: u64 },

    #[error("Proposal {0} already executed")]
    AlreadyExecuted(u64),

    #[error("Timelock not expired: executable at {deadline}")]
    TimelockNotExpired { deadline: Timestamp },

    #[error("Target address is blacklisted")]
    BlacklistedTarget,

    #[error("Proposal value {value} exceeds maximum {max}")]
    ValueExceedsMaximum { value: u64, max: u64 },

    #[error("Payload invokes a protected governance entry point: {0}")]
    CriticalFunctionCall(String),

    #[error("Parameter out of bounds: {0}")]
    InvalidBounds(String),

    #[error("Execution failed: {reason}")]
    ExecutionFailed { reason: String },

    #[error("Unauthorized: caller lacks the {0:?} role")]
    Unauthorized(Role),

    #[error("Invalid proposal: {0}")]
    InvalidProposal(String),
}

pub type Result<T> = std::result::Result<T, GovernanceError>;
