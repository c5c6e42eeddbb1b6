//! Bounded, admin-mutable governance parameters

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{GovernanceError, Result};
use crate::Address;

/// Shortest allowed voting window (1 hour).
pub const MIN_VOTING_PERIOD_SECS: u64 = 3_600;

/// Longest allowed voting window (30 days).
pub const MAX_VOTING_PERIOD_SECS: u64 = 30 * 86_400;

/// Default voting window (7 days).
pub const DEFAULT_VOTING_PERIOD_SECS: u64 = 7 * 86_400;

/// Mandatory delay between a proposal passing and its action running (2 days).
pub const EXECUTION_DELAY_SECS: u64 = 2 * 86_400;

/// Cost cap for a single target invocation.
pub const EXECUTION_BUDGET: u64 = 5_000_000;

/// Process-wide governance parameters.
///
/// Quorum and total-voter values are read at execution time, not snapshotted
/// per proposal; only the voting period is captured at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GovernanceConfig {
    voting_period_secs: u64,
    quorum_percentage: u64,
    total_voters: u64,
    max_proposal_value: u64,
    blacklisted_targets: HashSet<Address>,
}

impl GovernanceConfig {
    pub fn new(
        voting_period_secs: u64,
        quorum_percentage: u64,
        total_voters: u64,
        max_proposal_value: u64,
    ) -> Result<Self> {
        check_voting_period(voting_period_secs)?;
        check_quorum_percentage(quorum_percentage)?;
        check_total_voters(total_voters)?;
        check_max_proposal_value(max_proposal_value)?;
        Ok(Self {
            voting_period_secs,
            quorum_percentage,
            total_voters,
            max_proposal_value,
            blacklisted_targets: HashSet::new(),
        })
    }

    pub fn voting_period_secs(&self) -> u64 {
        self.voting_period_secs
    }

    pub fn quorum_percentage(&self) -> u64 {
        self.quorum_percentage
    }

    pub fn total_voters(&self) -> u64 {
        self.total_voters
    }

    pub fn max_proposal_value(&self) -> u64 {
        self.max_proposal_value
    }

    /// Minimum combined vote count for a valid outcome (floor division).
    pub fn required_quorum(&self) -> u64 {
        self.total_voters * self.quorum_percentage / 100
    }

    /// Returns the previous value.
    pub fn set_voting_period(&mut self, secs: u64) -> Result<u64> {
        check_voting_period(secs)?;
        Ok(std::mem::replace(&mut self.voting_period_secs, secs))
    }

    /// Returns the previous value.
    pub fn set_quorum_percentage(&mut self, percentage: u64) -> Result<u64> {
        check_quorum_percentage(percentage)?;
        Ok(std::mem::replace(&mut self.quorum_percentage, percentage))
    }

    /// Returns the previous value.
    pub fn set_total_voters(&mut self, count: u64) -> Result<u64> {
        check_total_voters(count)?;
        Ok(std::mem::replace(&mut self.total_voters, count))
    }

    /// Returns the previous value.
    pub fn set_max_proposal_value(&mut self, value: u64) -> Result<u64> {
        check_max_proposal_value(value)?;
        Ok(std::mem::replace(&mut self.max_proposal_value, value))
    }

    /// Returns false if the target was already blacklisted.
    pub fn add_blacklisted_target(&mut self, target: Address) -> bool {
        self.blacklisted_targets.insert(target)
    }

    /// Returns false if the target was not blacklisted.
    pub fn remove_blacklisted_target(&mut self, target: &Address) -> bool {
        self.blacklisted_targets.remove(target)
    }

    pub fn is_blacklisted(&self, target: &Address) -> bool {
        self.blacklisted_targets.contains(target)
    }
}

fn check_voting_period(secs: u64) -> Result<()> {
    if !(MIN_VOTING_PERIOD_SECS..=MAX_VOTING_PERIOD_SECS).contains(&secs) {
        return Err(GovernanceError::InvalidBounds(format!(
            "voting period {}s outside [{}, {}]",
            secs, MIN_VOTING_PERIOD_SECS, MAX_VOTING_PERIOD_SECS
        )));
    }
    Ok(())
}

fn check_quorum_percentage(percentage: u64) -> Result<()> {
    if percentage == 0 || percentage > 100 {
        return Err(GovernanceError::InvalidBounds(format!(
            "quorum percentage {} outside [1, 100]",
            percentage
        )));
    }
    Ok(())
}

fn check_total_voters(count: u64) -> Result<()> {
    if count == 0 {
        return Err(GovernanceError::InvalidBounds(
            "total voters must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn check_max_proposal_value(value: u64) -> Result<()> {
    if value == 0 {
        return Err(GovernanceError::InvalidBounds(
            "max proposal value must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GovernanceConfig {
        GovernanceConfig::new(DEFAULT_VOTING_PERIOD_SECS, 50, 10, 1_000_000).unwrap()
    }

    #[test]
    fn test_constructor_bounds() {
        assert!(GovernanceConfig::new(MIN_VOTING_PERIOD_SECS - 1, 50, 10, 100).is_err());
        assert!(GovernanceConfig::new(MAX_VOTING_PERIOD_SECS + 1, 50, 10, 100).is_err());
        assert!(GovernanceConfig::new(DEFAULT_VOTING_PERIOD_SECS, 0, 10, 100).is_err());
        assert!(GovernanceConfig::new(DEFAULT_VOTING_PERIOD_SECS, 101, 10, 100).is_err());
        assert!(GovernanceConfig::new(DEFAULT_VOTING_PERIOD_SECS, 50, 0, 100).is_err());
        assert!(GovernanceConfig::new(DEFAULT_VOTING_PERIOD_SECS, 50, 10, 0).is_err());
    }

    #[test]
    fn test_required_quorum_floor() {
        let mut config = config();
        config.set_quorum_percentage(30).unwrap();
        assert_eq!(config.required_quorum(), 3);

        // 7 * 50 / 100 = 3.5, floored
        config.set_quorum_percentage(50).unwrap();
        config.set_total_voters(7).unwrap();
        assert_eq!(config.required_quorum(), 3);
    }

    #[test]
    fn test_setters_return_old_value() {
        let mut config = config();
        let old = config.set_voting_period(86_400).unwrap();
        assert_eq!(old, DEFAULT_VOTING_PERIOD_SECS);
        assert_eq!(config.voting_period_secs(), 86_400);
    }

    #[test]
    fn test_setter_bounds_leave_value_unchanged() {
        let mut config = config();
        assert!(config.set_quorum_percentage(101).is_err());
        assert_eq!(config.quorum_percentage(), 50);
        assert!(config.set_total_voters(0).is_err());
        assert_eq!(config.total_voters(), 10);
    }

    #[test]
    fn test_blacklist_membership() {
        let mut config = config();
        let target = [7u8; 20];
        assert!(!config.is_blacklisted(&target));
        assert!(config.add_blacklisted_target(target));
        assert!(!config.add_blacklisted_target(target));
        assert!(config.is_blacklisted(&target));
        assert!(config.remove_blacklisted_target(&target));
        assert!(!config.is_blacklisted(&target));
    }
}
