//! Proposal storage and sequential id allocation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GovernanceError, Result};
use crate::proposal::Proposal;
use crate::Address;

/// Map of proposal records keyed by their dense sequential ids.
///
/// Ids start at 1 and are never reused; allocation happens only after a
/// submission has passed every validation, so a rejected proposal leaves
/// the counter untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalLedger {
    next_id: u64,
    proposals: BTreeMap<u64, Proposal>,
}

impl ProposalLedger {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            proposals: BTreeMap::new(),
        }
    }

    /// Id the next proposal will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Allocate the next sequential id.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, proposal: Proposal) {
        self.proposals.insert(proposal.id, proposal);
    }

    pub fn contains(&self, id: u64) -> bool {
        self.proposals.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Result<&Proposal> {
        self.proposals
            .get(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    pub fn get_mut(&mut self, id: u64) -> Result<&mut Proposal> {
        self.proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    /// Whether `voter` has cast a ballot on proposal `id`.
    pub fn has_voted(&self, id: u64, voter: &Address) -> Result<bool> {
        Ok(self.get(id)?.has_voted.contains(voter))
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Page through proposals in id order.
    pub fn list(&self, offset: usize, limit: usize) -> Vec<&Proposal> {
        self.proposals.values().skip(offset).take(limit).collect()
    }
}

impl Default for ProposalLedger {
    fn default() -> Self {
        Self::new()
    }
}
