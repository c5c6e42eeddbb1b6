//! Pre-submission proposal validation

use crate::action::ActionPayload;
use crate::config::GovernanceConfig;
use crate::error::{GovernanceError, Result};
use crate::{Address, ZERO_ADDRESS};

/// Governance entry points a proposal may never invoke. A passing proposal
/// calling back into these would capture the process out-of-band.
pub const PROTECTED_METHODS: [&str; 5] = [
    "set_voting_period",
    "set_quorum_percentage",
    "set_total_voters",
    "grant_role",
    "revoke_role",
];

/// Validate a submission before any record is created.
///
/// Checks run in order: shape, blacklist, protected entry points, value
/// ceiling. The first failure aborts the whole submission.
pub fn validate_submission(
    config: &GovernanceConfig,
    description: &str,
    target: &Address,
    payload: &ActionPayload,
) -> Result<()> {
    if description.is_empty() {
        return Err(GovernanceError::InvalidProposal(
            "empty description".to_string(),
        ));
    }
    if *target == ZERO_ADDRESS {
        return Err(GovernanceError::InvalidProposal(
            "zero target address".to_string(),
        ));
    }
    if payload.method.is_empty() {
        return Err(GovernanceError::InvalidProposal(
            "empty action payload".to_string(),
        ));
    }
    if config.is_blacklisted(target) {
        return Err(GovernanceError::BlacklistedTarget);
    }
    if PROTECTED_METHODS.contains(&payload.method.as_str()) {
        return Err(GovernanceError::CriticalFunctionCall(
            payload.method.clone(),
        ));
    }
    if payload.value > config.max_proposal_value() {
        return Err(GovernanceError::ValueExceedsMaximum {
            value: payload.value,
            max: config.max_proposal_value(),
        });
    }
    Ok(())
}
