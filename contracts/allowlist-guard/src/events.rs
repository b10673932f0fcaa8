//! Audit events for the allowlist guard.
//!
//! Each struct is a `#[contractevent]`; the snake_case struct name is the
//! leading topic and `#[topic]` fields are indexed as extra topics.

use guard_interface::Operation;
use soroban_sdk::{contractevent, Address, BytesN, Env};

/// An address was (re-)added to the allowlist.
#[contractevent]
#[derive(Clone, Debug)]
pub struct AllowlistAddedEvent {
    #[topic]
    pub account: Address,
}

/// An address was removed from the allowlist (or was already absent).
#[contractevent]
#[derive(Clone, Debug)]
pub struct AllowlistRemovedEvent {
    #[topic]
    pub account: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

/// Pre-execution check approved a transaction.
///
/// # Fields
/// * `safe` – Safe that asked for the check.
/// * `to` – Allowlisted destination.
/// * `value` – Amount the Safe is about to send.
/// * `operation` – Call or delegate call.
/// * `msg_sender` – Who submitted the execution to the Safe.
/// * `approvals` – Number of owner approvals attached.
#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionCheckedEvent {
    #[topic]
    pub safe: Address,
    #[topic]
    pub to: Address,
    pub value: i128,
    pub operation: Operation,
    pub msg_sender: Address,
    pub approvals: u32,
}

/// Post-execution notification received from the Safe.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecutionCheckedEvent {
    #[topic]
    pub safe: Address,
    pub tx_hash: BytesN<32>,
    pub success: bool,
}

pub fn emit_added(env: &Env, account: Address) {
    AllowlistAddedEvent { account }.publish(env);
}

pub fn emit_removed(env: &Env, account: Address) {
    AllowlistRemovedEvent { account }.publish(env);
}
