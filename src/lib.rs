//! Community Governance Engine
//!
//! Members submit proposals that target an external action and the
//! community votes within a fixed window. A proposal that meets quorum and
//! majority is queued behind a timelock and later executed under safety
//! gating.
//!
//! The engine keeps no clocks and never sleeps: every operation takes the
//! caller's current timestamp, and timelock/voting deadlines are stored
//! values compared against it. Mutating operations take `&mut self` and run
//! to completion; a concurrent host serializes them behind one exclusive
//! lock.

pub mod access;
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod ledger;
pub mod proposal;
pub mod safety;

pub use access::{Role, RoleOracle, RoleRegistry};
pub use action::{ActionInvoker, ActionPayload, InvokeError};
pub use config::{
    GovernanceConfig, DEFAULT_VOTING_PERIOD_SECS, EXECUTION_BUDGET, EXECUTION_DELAY_SECS,
    MAX_VOTING_PERIOD_SECS, MIN_VOTING_PERIOD_SECS,
};
pub use engine::{ExecuteOutcome, GovernanceEngine};
pub use error::{GovernanceError, Result};
pub use events::GovernanceEvent;
pub use ledger::ProposalLedger;
pub use proposal::{Proposal, ProposalView};

/// 20-byte account address.
pub type Address = [u8; 20];

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// The all-zero address; never a valid proposal target.
pub const ZERO_ADDRESS: Address = [0u8; 20];
