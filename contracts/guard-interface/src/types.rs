use soroban_sdk::{contracterror, contracttype, Address, Bytes, Env};

/// Reasons a guard can reject a transaction in its pre-execution hook.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GuardError {
    /// Destination is not on the guard's allowlist
    AddressNotAllowlisted = 10,
    /// Generic rejection for guards with other policies
    TransactionRejected = 11,
}

/// How the Safe performs the action against `to`.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Operation {
    /// Plain call / value transfer
    Call = 0,
    /// Execute in the Safe's own context
    DelegateCall = 1,
}

/// A Safe execution request as seen by guards.
///
/// The gas and refund fields carry the Safe's execution metadata through to
/// the guard unchanged; the Safe itself only interprets `safe_tx_gas` and
/// `gas_price` to decide whether a failed action reverts the call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SafeTransaction {
    pub to: Address,
    pub value: i128,
    pub data: Bytes,
    pub operation: Operation,
    pub safe_tx_gas: u64,
    pub base_gas: u64,
    pub gas_price: u64,
    pub gas_token: Option<Address>,
    pub refund_receiver: Option<Address>,
}

impl SafeTransaction {
    /// A value transfer with empty data and zeroed gas parameters.
    pub fn transfer(env: &Env, to: Address, value: i128) -> Self {
        SafeTransaction {
            to,
            value,
            data: Bytes::new(env),
            operation: Operation::Call,
            safe_tx_gas: 0,
            base_gas: 0,
            gas_price: 0,
            gas_token: None,
            refund_receiver: None,
        }
    }
}
