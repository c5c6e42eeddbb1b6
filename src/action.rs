//! Proposal actions and the target invocation surface

use serde::{Deserialize, Serialize};

use crate::Address;

/// Decoded instruction a proposal asks to run against its target.
///
/// `method` names the entry point on the target, `args` are opaque encoded
/// arguments the target interprets, and `value` is the amount the
/// invocation transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPayload {
    pub method: String,
    pub args: Vec<u8>,
    pub value: u64,
}

impl ActionPayload {
    /// Payload that transfers no value.
    pub fn call(method: impl Into<String>, args: Vec<u8>) -> Self {
        Self {
            method: method.into(),
            args,
            value: 0,
        }
    }

    pub fn call_with_value(method: impl Into<String>, args: Vec<u8>, value: u64) -> Self {
        Self {
            method: method.into(),
            args,
            value,
        }
    }
}

/// Failure reported by a target invocation.
///
/// `reason` is whatever human-readable cause the target supplied, if any.
#[derive(Debug, Clone, Default)]
pub struct InvokeError {
    pub reason: Option<String>,
}

impl InvokeError {
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

/// External action surface.
///
/// The engine calls this with a fixed cost budget and treats the target as
/// fully opaque; it never implements the action itself.
pub trait ActionInvoker {
    fn invoke(
        &mut self,
        target: &Address,
        payload: &ActionPayload,
        budget: u64,
    ) -> std::result::Result<(), InvokeError>;
}
