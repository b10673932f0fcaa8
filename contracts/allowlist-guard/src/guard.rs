use guard_interface::{Guard, GuardError, SafeTransaction};
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, BytesN, Env, Vec};

use crate::events::{
    emit_added, emit_removed, ExecutionCheckedEvent, OwnershipTransferredEvent,
    TransactionCheckedEvent,
};
use crate::storage::{self, DataKey};

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors returned by the administrative surface of the guard
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AllowlistError {
    AlreadyInitialised = 1,
    NotInitialised = 2,
    /// Caller is not the guard owner
    NotOwner = 3,
}

#[contract]
pub struct AllowlistGuard;

#[contractimpl]
impl AllowlistGuard {
    /// Sets the owner and seeds the allowlist. Can only run once.
    ///
    /// Every seeded address is announced with an `AllowlistAddedEvent`, same
    /// as a later `add_to_allowlist`.
    pub fn init(
        env: Env,
        owner: Address,
        initial_allowlist: Vec<Address>,
    ) -> Result<(), AllowlistError> {
        if storage::has_owner(&env) {
            return Err(AllowlistError::AlreadyInitialised);
        }
        storage::set_owner(&env, &owner);
        storage::extend_instance(&env);

        for account in initial_allowlist.iter() {
            storage::insert(&env, &account);
            emit_added(&env, account);
        }

        log!(
            &env,
            "init owner={} allowlist_len={}",
            owner,
            initial_allowlist.len()
        );
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn load_owner(env: &Env) -> Result<Address, AllowlistError> {
        storage::get_owner(env).ok_or(AllowlistError::NotInitialised)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), AllowlistError> {
        caller.require_auth();
        if *caller != Self::load_owner(env)? {
            return Err(AllowlistError::NotOwner);
        }
        storage::extend_instance(env);
        Ok(())
    }

    // ── Allowlist management ──────────────────────────────────────────────────

    /// Owner: allow transactions to `account`. Adding a member again is a no-op.
    pub fn add_to_allowlist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), AllowlistError> {
        Self::require_owner(&env, &caller)?;
        storage::insert(&env, &account);
        emit_added(&env, account);
        Ok(())
    }

    /// Owner: stop allowing transactions to `account`. Removing a non-member
    /// is a no-op.
    pub fn remove_from_allowlist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), AllowlistError> {
        Self::require_owner(&env, &caller)?;
        storage::remove(&env, &account);
        emit_removed(&env, account);
        Ok(())
    }

    /// Owner: add every address in `accounts`, in order.
    ///
    /// Ownership is checked once up front, so a non-owner never gets a partial
    /// update; a failing invocation rolls back every write anyway.
    pub fn batch_add_to_allowlist(
        env: Env,
        caller: Address,
        accounts: Vec<Address>,
    ) -> Result<(), AllowlistError> {
        Self::require_owner(&env, &caller)?;
        for account in accounts.iter() {
            storage::insert(&env, &account);
            emit_added(&env, account);
        }
        log!(&env, "batch_add_to_allowlist count={}", accounts.len());
        Ok(())
    }

    /// Owner: hand the administrative rights to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), AllowlistError> {
        Self::require_owner(&env, &caller)?;
        storage::set_owner(&env, &new_owner);

        OwnershipTransferredEvent {
            previous_owner: caller,
            new_owner: new_owner.clone(),
        }
        .publish(&env);
        log!(&env, "transfer_ownership new={}", new_owner);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, AllowlistError> {
        Self::load_owner(&env)
    }

    pub fn is_allowlisted(env: Env, account: Address) -> bool {
        storage::is_allowlisted(&env, &account)
    }

    /// Number of transactions this guard has approved.
    pub fn checked_count(env: Env) -> u64 {
        storage::counter(&env, &DataKey::CheckedCount)
    }

    /// Number of post-execution notifications received.
    pub fn after_execution_count(env: Env) -> u64 {
        storage::counter(&env, &DataKey::AfterCount)
    }
}

#[contractimpl]
impl Guard for AllowlistGuard {
    /// Rejects with `AddressNotAllowlisted` unless `tx.to` is a member.
    /// Never changes membership. Requires `safe` to authorize the call.
    fn check_transaction(
        env: Env,
        safe: Address,
        tx: SafeTransaction,
        signers: Vec<Address>,
        msg_sender: Address,
    ) -> Result<(), GuardError> {
        safe.require_auth();
        if !storage::touch_member(&env, &tx.to) {
            log!(&env, "check_transaction rejected safe={} to={}", safe, tx.to);
            return Err(GuardError::AddressNotAllowlisted);
        }

        storage::extend_instance(&env);
        storage::bump_counter(&env, &DataKey::CheckedCount);
        TransactionCheckedEvent {
            safe,
            to: tx.to,
            value: tx.value,
            operation: tx.operation,
            msg_sender,
            approvals: signers.len(),
        }
        .publish(&env);
        Ok(())
    }

    fn check_after_execution(env: Env, safe: Address, tx_hash: BytesN<32>, success: bool) {
        safe.require_auth();
        storage::extend_instance(&env);
        storage::bump_counter(&env, &DataKey::AfterCount);
        ExecutionCheckedEvent {
            safe,
            tx_hash,
            success,
        }
        .publish(&env);
    }

    fn supports_interface(_env: Env, interface_id: BytesN<4>) -> bool {
        guard_interface::supports(&interface_id)
    }
}
