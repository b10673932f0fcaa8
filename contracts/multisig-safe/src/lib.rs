//! # Multisig Safe
//!
//! Minimal multi-signature account that executes value transfers once enough
//! owners approve, consulting an optional transaction guard around each
//! execution.
//!
//! ## Execution flow
//! 1. Verify the attached owner approvals meet the threshold.
//! 2. Ask the installed guard (if any) to `check_transaction`; a rejection
//!    aborts the call with no state change.
//! 3. Perform the transfer.
//! 4. Increment the nonce.
//! 5. Notify the guard through `check_after_execution` (best effort).

#![no_std]
mod events;
mod safe;
mod storage;

pub use events::{ChangedGuardEvent, ExecutionFailureEvent, ExecutionSuccessEvent};
pub use safe::{MultisigSafe, MultisigSafeClient, SafeError};
