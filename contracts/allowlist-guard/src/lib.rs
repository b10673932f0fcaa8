//! # Allowlist Guard
//!
//! A transaction guard for a multisig Safe that only lets transactions
//! through when their destination is on an owner-managed allowlist.
//!
//! Unknown destinations are rejected (fail-closed). Membership changes are
//! restricted to a single owner address and every change is published as an
//! event, so the allowlist history can be rebuilt off-chain.

#![no_std]
mod events;
mod guard;
mod storage;

pub use events::{
    AllowlistAddedEvent, AllowlistRemovedEvent, ExecutionCheckedEvent,
    OwnershipTransferredEvent, TransactionCheckedEvent,
};
pub use guard::{AllowlistError, AllowlistGuard, AllowlistGuardClient};
