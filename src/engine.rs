//! Core governance engine: submission, voting, and timelocked execution

use std::collections::HashSet;

use tracing::{debug, info};

use crate::access::{Role, RoleOracle};
use crate::action::{ActionInvoker, ActionPayload};
use crate::config::{GovernanceConfig, EXECUTION_BUDGET, EXECUTION_DELAY_SECS};
use crate::error::{GovernanceError, Result};
use crate::events::GovernanceEvent;
use crate::ledger::ProposalLedger;
use crate::proposal::{Proposal, ProposalView};
use crate::safety;
use crate::{Address, Timestamp};

/// Result of a successful `execute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// The proposal passed its checks and is now queued behind the timelock.
    /// The target has not been touched.
    Queued { execution_time: Timestamp },
    /// The target action ran and the proposal is permanently executed.
    Executed,
}

/// Governance engine over an injected role oracle.
///
/// The timelock is pull-based: it is a stored deadline checked on the next
/// caller-initiated `execute`, never an internal timer.
pub struct GovernanceEngine<R: RoleOracle> {
    config: GovernanceConfig,
    ledger: ProposalLedger,
    roles: R,
    events: Vec<GovernanceEvent>,
}

impl<R: RoleOracle> GovernanceEngine<R> {
    pub fn new(config: GovernanceConfig, roles: R) -> Self {
        Self {
            config,
            ledger: ProposalLedger::new(),
            roles,
            events: Vec::new(),
        }
    }

    /// Submit a proposal. Requires the Proposer role.
    ///
    /// A rejected submission leaves the ledger and the id counter untouched.
    /// The voting window is `[now, now + voting_period]`, the period
    /// snapshotted from the config in force at creation.
    pub fn propose(
        &mut self,
        proposer: &Address,
        description: impl Into<String>,
        target: Address,
        payload: ActionPayload,
        now: Timestamp,
        current_block: u64,
    ) -> Result<u64> {
        self.require_role(proposer, Role::Proposer)?;
        let description = description.into();
        safety::validate_submission(&self.config, &description, &target, &payload)?;

        let id = self.ledger.allocate_id();
        let vote_start = now;
        let vote_end = now + self.config.voting_period_secs();
        self.ledger.insert(Proposal {
            id,
            proposer: *proposer,
            target,
            payload,
            description,
            vote_start,
            vote_end,
            snapshot_block: current_block,
            votes_for: 0,
            votes_against: 0,
            has_voted: HashSet::new(),
            executed: false,
            execution_time: None,
        });
        info!(id, vote_end, "proposal created");
        self.events.push(GovernanceEvent::ProposalCreated {
            id,
            proposer: *proposer,
            target,
            vote_start,
            vote_end,
        });
        Ok(id)
    }

    /// Cast a ballot. One vote per address, regardless of stake.
    pub fn vote(&mut self, voter: &Address, id: u64, support: bool, now: Timestamp) -> Result<()> {
        let proposal = self.ledger.get_mut(id)?;
        proposal.record_vote(*voter, support, now)?;
        let (votes_for, votes_against) = (proposal.votes_for, proposal.votes_against);
        debug!(id, support, "vote recorded");
        self.events.push(GovernanceEvent::VoteCast {
            id,
            voter: *voter,
            support,
            votes_for,
            votes_against,
        });
        Ok(())
    }

    /// Drive a proposal towards execution. Requires the Executor role.
    ///
    /// The first call after the voting window closes checks quorum and
    /// majority against the config in force *now* and, on success, queues
    /// the proposal with `execution_time = now + EXECUTION_DELAY_SECS`
    /// without touching the target. A later call past that deadline invokes
    /// the target under the fixed execution budget. The executed flag is
    /// staged on a copy and committed only if the invocation succeeds, so a
    /// failed call leaves no trace.
    pub fn execute<I: ActionInvoker>(
        &mut self,
        caller: &Address,
        id: u64,
        now: Timestamp,
        invoker: &mut I,
    ) -> Result<ExecuteOutcome> {
        self.require_role(caller, Role::Executor)?;
        let required = self.config.required_quorum();
        let proposal = self.ledger.get_mut(id)?;

        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted(id));
        }
        if !proposal.voting_ended(now) {
            return Err(GovernanceError::VotingNotEnded(id));
        }
        let total = proposal.total_votes();
        if total < required {
            return Err(GovernanceError::QuorumNotReached {
                total_votes: total,
                required,
            });
        }
        if proposal.votes_for <= proposal.votes_against {
            return Err(GovernanceError::ProposalFailed {
                votes_for: proposal.votes_for,
                votes_against: proposal.votes_against,
            });
        }

        let deadline = match proposal.execution_time {
            None => {
                let execution_time = now + EXECUTION_DELAY_SECS;
                proposal.execution_time = Some(execution_time);
                info!(id, execution_time, "proposal queued");
                self.events.push(GovernanceEvent::ProposalQueued { id, execution_time });
                return Ok(ExecuteOutcome::Queued { execution_time });
            }
            Some(deadline) => deadline,
        };
        if now < deadline {
            return Err(GovernanceError::TimelockNotExpired { deadline });
        }

        let mut staged = proposal.clone();
        staged.executed = true;
        match invoker.invoke(&staged.target, &staged.payload, EXECUTION_BUDGET) {
            Ok(()) => {
                *proposal = staged;
                info!(id, "proposal executed");
                self.events.push(GovernanceEvent::ProposalExecuted { id });
                Ok(ExecuteOutcome::Executed)
            }
            Err(failure) => Err(GovernanceError::ExecutionFailed {
                reason: failure
                    .reason
                    .unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }

    // ---- admin configuration ----

    pub fn set_voting_period(&mut self, caller: &Address, secs: u64) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        let old = self.config.set_voting_period(secs)?;
        self.config_changed("voting_period_secs", old, secs);
        Ok(())
    }

    pub fn set_quorum_percentage(&mut self, caller: &Address, percentage: u64) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        let old = self.config.set_quorum_percentage(percentage)?;
        self.config_changed("quorum_percentage", old, percentage);
        Ok(())
    }

    pub fn set_total_voters(&mut self, caller: &Address, count: u64) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        let old = self.config.set_total_voters(count)?;
        self.config_changed("total_voters", old, count);
        Ok(())
    }

    pub fn set_max_proposal_value(&mut self, caller: &Address, value: u64) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        let old = self.config.set_max_proposal_value(value)?;
        self.config_changed("max_proposal_value", old, value);
        Ok(())
    }

    pub fn add_blacklisted_target(&mut self, caller: &Address, target: Address) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        if self.config.add_blacklisted_target(target) {
            info!("target blacklisted");
            self.events
                .push(GovernanceEvent::BlacklistUpdated { target, added: true });
        }
        Ok(())
    }

    pub fn remove_blacklisted_target(&mut self, caller: &Address, target: &Address) -> Result<()> {
        self.require_role(caller, Role::Admin)?;
        if self.config.remove_blacklisted_target(target) {
            info!("target removed from blacklist");
            self.events.push(GovernanceEvent::BlacklistUpdated {
                target: *target,
                added: false,
            });
        }
        Ok(())
    }

    // ---- queries ----

    pub fn config(&self) -> &GovernanceConfig {
        &self.config
    }

    pub fn roles(&self) -> &R {
        &self.roles
    }

    /// Host-side role management; the engine itself never mutates roles.
    pub fn roles_mut(&mut self) -> &mut R {
        &mut self.roles
    }

    pub fn proposal(&self, id: u64) -> Result<&Proposal> {
        self.ledger.get(id)
    }

    pub fn proposal_state(&self, id: u64, now: Timestamp) -> Result<ProposalView> {
        Ok(self.ledger.get(id)?.view(now))
    }

    pub fn has_voted(&self, id: u64, voter: &Address) -> Result<bool> {
        self.ledger.has_voted(id, voter)
    }

    pub fn next_proposal_id(&self) -> u64 {
        self.ledger.next_id()
    }

    pub fn proposal_exists(&self, id: u64) -> bool {
        self.ledger.contains(id)
    }

    /// Page through proposals in id order.
    pub fn proposals(&self, offset: usize, limit: usize) -> Vec<&Proposal> {
        self.ledger.list(offset, limit)
    }

    /// Drain buffered events for external indexers.
    pub fn take_events(&mut self) -> Vec<GovernanceEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GovernanceEvent] {
        &self.events
    }

    fn config_changed(&mut self, parameter: &str, old: u64, new: u64) {
        info!(parameter, old, new, "config changed");
        self.events.push(GovernanceEvent::ConfigChanged {
            parameter: parameter.to_string(),
            old,
            new,
        });
    }

    fn require_role(&self, principal: &Address, role: Role) -> Result<()> {
        if self.roles.has_role(principal, role) {
            Ok(())
        } else {
            Err(GovernanceError::Unauthorized(role))
        }
    }
}
