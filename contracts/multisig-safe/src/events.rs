use soroban_sdk::{contractevent, Address, BytesN};

/// Guard installed (`Some`) or removed (`None`).
#[contractevent]
#[derive(Clone, Debug)]
pub struct ChangedGuardEvent {
    pub guard: Option<Address>,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecutionSuccessEvent {
    #[topic]
    pub tx_hash: BytesN<32>,
    pub nonce: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ExecutionFailureEvent {
    #[topic]
    pub tx_hash: BytesN<32>,
    pub nonce: u64,
}
