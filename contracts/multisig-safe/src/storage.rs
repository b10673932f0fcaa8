use soroban_sdk::{contracttype, Address, Env, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum DataKey {
    Owners,
    Threshold,
    Nonce,
    Guard,
    NativeToken,
}

/// All Safe state lives in instance storage, so one bump keeps it live.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialised(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owners)
}

pub fn get_owners(env: &Env) -> Option<Vec<Address>> {
    env.storage().instance().get(&DataKey::Owners)
}

pub fn set_owners(env: &Env, owners: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Owners, owners);
}

pub fn get_threshold(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::Threshold)
}

pub fn set_threshold(env: &Env, threshold: u32) {
    env.storage().instance().set(&DataKey::Threshold, &threshold);
}

pub fn get_native_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::NativeToken)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
}

pub fn set_nonce(env: &Env, nonce: u64) {
    env.storage().instance().set(&DataKey::Nonce, &nonce);
}

pub fn get_guard(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Guard)
}

pub fn set_guard(env: &Env, guard: &Option<Address>) {
    match guard {
        Some(g) => env.storage().instance().set(&DataKey::Guard, g),
        None => env.storage().instance().remove(&DataKey::Guard),
    }
}
