//! Role-based capability checks

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::Address;

/// Named permission checked before a mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Proposer,
    Executor,
    Admin,
}

/// Answers "does principal P hold role R".
///
/// Role storage lives with the host; the engine consumes this as a pure
/// predicate and never mutates it.
pub trait RoleOracle {
    fn has_role(&self, principal: &Address, role: Role) -> bool;
}

/// In-memory role registry for bootstrap wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    grants: HashMap<Address, HashSet<Role>>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every role granted to the deploying principal.
    pub fn bootstrap(deployer: Address) -> Self {
        let mut registry = Self::default();
        registry.grant(deployer, Role::Proposer);
        registry.grant(deployer, Role::Executor);
        registry.grant(deployer, Role::Admin);
        registry
    }

    pub fn grant(&mut self, principal: Address, role: Role) {
        self.grants.entry(principal).or_default().insert(role);
    }

    pub fn revoke(&mut self, principal: &Address, role: Role) {
        if let Some(roles) = self.grants.get_mut(principal) {
            roles.remove(&role);
            if roles.is_empty() {
                self.grants.remove(principal);
            }
        }
    }
}

impl RoleOracle for RoleRegistry {
    fn has_role(&self, principal: &Address, role: Role) -> bool {
        self.grants
            .get(principal)
            .map(|roles| roles.contains(&role))
            .unwrap_or(false)
    }
}
