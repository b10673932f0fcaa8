//! # Transaction Guard Protocol
//!
//! Shared surface between a multisig Safe and the guards it consults.
//!
//! A guard is any contract implementing [`Guard`]. The Safe never depends on
//! a concrete guard type: it talks to the installed address through the
//! generated [`GuardClient`] and, before installing it, asks the candidate
//! through [`Guard::supports_interface`] whether it really speaks this
//! protocol (see [`interface`]).
//!
//! ## Hook order
//! 1. [`Guard::check_transaction`] runs before any effect of the transaction.
//!    An `Err` rejects the whole execution.
//! 2. [`Guard::check_after_execution`] runs once the outcome is known. It is
//!    observational; the Safe ignores its failures.
//!
//! Both hooks take the calling Safe as `safe` and a guard requires that
//! address's authorization. A Safe invoking the hook directly carries it.

#![no_std]

use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

pub mod interface;
mod types;

pub use interface::{supports, ERC165_INTERFACE_ID, GUARD_INTERFACE_ID, SUPPORTED_INTERFACES};
pub use types::{GuardError, Operation, SafeTransaction};


/// Hooks a Safe invokes around every `exec_transaction`.
#[contractclient(name = "GuardClient")]
pub trait Guard {
    /// Pre-execution hook. Returning `Err` blocks the transaction.
    ///
    /// # Arguments
    /// * `safe` - The Safe executing the transaction
    /// * `tx` - The transaction about to be executed
    /// * `signers` - Owners whose approvals accompany the request
    /// * `msg_sender` - Address that submitted the execution
    fn check_transaction(
        env: Env,
        safe: Address,
        tx: SafeTransaction,
        signers: Vec<Address>,
        msg_sender: Address,
    ) -> Result<(), GuardError>;

    /// Post-execution hook, called by `safe` with the transaction hash and
    /// whether the requested action succeeded.
    fn check_after_execution(env: Env, safe: Address, tx_hash: BytesN<32>, success: bool);

    /// Capability discovery. Must return `true` for [`GUARD_INTERFACE_ID`].
    fn supports_interface(env: Env, interface_id: BytesN<4>) -> bool;
}
