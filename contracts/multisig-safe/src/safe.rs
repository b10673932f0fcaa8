use guard_interface::{GuardClient, GuardError, Operation, SafeTransaction, GUARD_INTERFACE_ID};
use soroban_sdk::{
    contract, contracterror, contractimpl, log, token, xdr::ToXdr, Address, BytesN, Env, Vec,
};

use crate::events::{ChangedGuardEvent, ExecutionFailureEvent, ExecutionSuccessEvent};
use crate::storage;

// ── Error type ────────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SafeError {
    AlreadyInitialised = 1,
    NotInitialised = 2,
    /// Caller or signer is not a Safe owner
    NotOwner = 3,
    /// Owner list empty or contains duplicates
    InvalidOwners = 4,
    /// Threshold is zero or exceeds the owner count
    InvalidThreshold = 5,
    DuplicateSigner = 6,
    InsufficientApprovals = 7,
    /// Candidate guard does not report the transaction guard interface
    GuardNotSupported = 8,
    /// Guard rejected the destination (same code as the guard's error)
    AddressNotAllowlisted = 10,
    /// Guard rejected the transaction for any other reason
    GuardRejected = 11,
    UnsupportedOperation = 12,
    InvalidValue = 13,
    /// Action failed and no gas parameters were set
    ExecutionFailed = 14,
    MathOverflow = 15,
}

/// Outcome of the pre-execution hook.
enum GuardDecision {
    Approved,
    Rejected(SafeError),
}

#[contract]
pub struct MultisigSafe;

#[contractimpl]
impl MultisigSafe {
    /// Configures owners, approval threshold and the token used for `value`.
    ///
    /// # Errors
    /// - `AlreadyInitialised` on a second call
    /// - `InvalidOwners` if `owners` is empty or has duplicates
    /// - `InvalidThreshold` unless `1 <= threshold <= owners.len()`
    pub fn init(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        native_token: Address,
    ) -> Result<(), SafeError> {
        if storage::is_initialised(&env) {
            return Err(SafeError::AlreadyInitialised);
        }
        Self::validate_owners(&owners, threshold)?;

        storage::set_owners(&env, &owners);
        storage::set_threshold(&env, threshold);
        storage::set_native_token(&env, &native_token);
        storage::set_nonce(&env, 0);
        storage::extend_instance(&env);

        log!(&env, "init owners={} threshold={}", owners.len(), threshold);
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn validate_owners(owners: &Vec<Address>, threshold: u32) -> Result<(), SafeError> {
        if owners.is_empty() {
            return Err(SafeError::InvalidOwners);
        }
        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    return Err(SafeError::InvalidOwners);
                }
            }
        }
        if threshold == 0 || threshold > owners.len() {
            return Err(SafeError::InvalidThreshold);
        }
        Ok(())
    }

    fn load_owners(env: &Env) -> Result<Vec<Address>, SafeError> {
        storage::get_owners(env).ok_or(SafeError::NotInitialised)
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), SafeError> {
        caller.require_auth();
        if !Self::load_owners(env)?.contains(caller) {
            return Err(SafeError::NotOwner);
        }
        Ok(())
    }

    /// Every signer must be a distinct owner who authorizes this call, and
    /// there must be at least `threshold` of them.
    fn check_approvals(env: &Env, signers: &Vec<Address>) -> Result<(), SafeError> {
        let owners = Self::load_owners(env)?;
        let threshold = storage::get_threshold(env).ok_or(SafeError::NotInitialised)?;

        let mut seen: Vec<Address> = Vec::new(env);
        for signer in signers.iter() {
            if !owners.contains(&signer) {
                return Err(SafeError::NotOwner);
            }
            if seen.contains(&signer) {
                return Err(SafeError::DuplicateSigner);
            }
            signer.require_auth();
            seen.push_back(signer);
        }

        if seen.len() < threshold {
            return Err(SafeError::InsufficientApprovals);
        }
        Ok(())
    }

    fn pre_check(
        env: &Env,
        guard: &Address,
        tx: &SafeTransaction,
        signers: &Vec<Address>,
        sender: &Address,
    ) -> GuardDecision {
        let safe = env.current_contract_address();
        match GuardClient::new(env, guard).try_check_transaction(&safe, tx, signers, sender) {
            Ok(Ok(())) => GuardDecision::Approved,
            Err(Ok(GuardError::AddressNotAllowlisted)) => {
                GuardDecision::Rejected(SafeError::AddressNotAllowlisted)
            }
            _ => GuardDecision::Rejected(SafeError::GuardRejected),
        }
    }

    /// Moves `tx.value` of the native token to `tx.to`. Returns whether the
    /// transfer went through.
    fn perform(env: &Env, tx: &SafeTransaction) -> Result<bool, SafeError> {
        if tx.value == 0 {
            return Ok(true);
        }
        let token_addr = storage::get_native_token(env).ok_or(SafeError::NotInitialised)?;
        let token_client = token::Client::new(env, &token_addr);
        let result = token_client.try_transfer(&env.current_contract_address(), &tx.to, &tx.value);
        Ok(matches!(result, Ok(Ok(()))))
    }

    // ── set_guard ─────────────────────────────────────────────────────────────

    /// Owner: install, replace (`Some`) or remove (`None`) the guard.
    ///
    /// The candidate must answer `true` to `supports_interface` for the
    /// transaction guard id; otherwise nothing is installed.
    pub fn set_guard(env: Env, caller: Address, guard: Option<Address>) -> Result<(), SafeError> {
        Self::require_owner(&env, &caller)?;

        if let Some(ref candidate) = guard {
            let id = BytesN::from_array(&env, &GUARD_INTERFACE_ID);
            let supported = GuardClient::new(&env, candidate).try_supports_interface(&id);
            if !matches!(supported, Ok(Ok(true))) {
                log!(&env, "set_guard rejected guard={}", candidate.clone());
                return Err(SafeError::GuardNotSupported);
            }
        }

        storage::set_guard(&env, &guard);
        storage::extend_instance(&env);
        ChangedGuardEvent { guard }.publish(&env);
        Ok(())
    }

    // ── exec_transaction ──────────────────────────────────────────────────────

    /// Executes `tx` with the approvals of `signers`.
    ///
    /// Returns whether the requested action succeeded. A failed action only
    /// aborts the call when both `safe_tx_gas` and `gas_price` are zero;
    /// otherwise the nonce is still consumed and `false` is returned.
    ///
    /// # Errors
    /// - `NotOwner` / `DuplicateSigner` / `InsufficientApprovals` on bad approvals
    /// - `UnsupportedOperation` for delegate calls, `InvalidValue` for negative values
    /// - `AddressNotAllowlisted` / `GuardRejected` when the guard says no
    /// - `ExecutionFailed` when the action fails without gas parameters
    pub fn exec_transaction(
        env: Env,
        sender: Address,
        tx: SafeTransaction,
        signers: Vec<Address>,
    ) -> Result<bool, SafeError> {
        if !signers.contains(&sender) {
            sender.require_auth();
        }
        Self::check_approvals(&env, &signers)?;

        if tx.operation == Operation::DelegateCall {
            return Err(SafeError::UnsupportedOperation);
        }
        if tx.value < 0 {
            return Err(SafeError::InvalidValue);
        }

        let nonce = storage::get_nonce(&env);
        let tx_hash = Self::hash_transaction(&env, &tx, nonce);
        let guard = storage::get_guard(&env);

        if let Some(ref g) = guard {
            if let GuardDecision::Rejected(err) = Self::pre_check(&env, g, &tx, &signers, &sender)
            {
                log!(&env, "exec_transaction blocked to={} nonce={}", tx.to, nonce);
                return Err(err);
            }
        }

        let success = Self::perform(&env, &tx)?;
        if !success && tx.safe_tx_gas == 0 && tx.gas_price == 0 {
            return Err(SafeError::ExecutionFailed);
        }

        let next = nonce.checked_add(1).ok_or(SafeError::MathOverflow)?;
        storage::set_nonce(&env, next);
        storage::extend_instance(&env);

        if success {
            ExecutionSuccessEvent {
                tx_hash: tx_hash.clone(),
                nonce,
            }
            .publish(&env);
        } else {
            ExecutionFailureEvent {
                tx_hash: tx_hash.clone(),
                nonce,
            }
            .publish(&env);
        }

        if let Some(ref g) = guard {
            let after = GuardClient::new(&env, g).try_check_after_execution(
                &env.current_contract_address(),
                &tx_hash,
                &success,
            );
            if !matches!(after, Ok(Ok(()))) {
                log!(&env, "check_after_execution failed nonce={}", nonce);
            }
        }

        log!(
            &env,
            "exec_transaction to={} value={} nonce={} success={}",
            tx.to,
            tx.value,
            nonce,
            success
        );
        Ok(success)
    }

    fn hash_transaction(env: &Env, tx: &SafeTransaction, nonce: u64) -> BytesN<32> {
        let mut payload = env.current_contract_address().to_xdr(env);
        payload.append(&tx.clone().to_xdr(env));
        payload.append(&nonce.to_xdr(env));
        env.crypto().keccak256(&payload).to_bytes()
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Hash identifying `tx` at `nonce` for this Safe; passed to the guard's
    /// after-execution hook.
    pub fn get_transaction_hash(env: Env, tx: SafeTransaction, nonce: u64) -> BytesN<32> {
        Self::hash_transaction(&env, &tx, nonce)
    }

    pub fn nonce(env: Env) -> u64 {
        storage::get_nonce(&env)
    }

    pub fn get_guard(env: Env) -> Option<Address> {
        storage::get_guard(&env)
    }

    pub fn get_owners(env: Env) -> Result<Vec<Address>, SafeError> {
        Self::load_owners(&env)
    }

    pub fn get_threshold(env: Env) -> Result<u32, SafeError> {
        storage::get_threshold(&env).ok_or(SafeError::NotInitialised)
    }

    pub fn native_token(env: Env) -> Result<Address, SafeError> {
        storage::get_native_token(&env).ok_or(SafeError::NotInitialised)
    }
}
