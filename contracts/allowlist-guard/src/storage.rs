use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const OWNER_KEY: Symbol = symbol_short!("OWNER");

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const MEMBER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const MEMBER_LIFETIME_THRESHOLD: u32 = MEMBER_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for guard state
#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum DataKey {
    /// Allowlist membership: Allowlisted(Address) -> true
    Allowlisted(Address),
    /// Number of approved pre-execution checks
    CheckedCount,
    /// Number of post-execution notifications
    AfterCount,
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&OWNER_KEY)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER_KEY)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER_KEY, owner);
}

/// Keeps the owner and counters live.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_allowlisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Allowlisted(account.clone()))
        .unwrap_or(false)
}

/// Membership test that also renews the entry's TTL when `account` is a
/// member.
pub fn touch_member(env: &Env, account: &Address) -> bool {
    let key = DataKey::Allowlisted(account.clone());
    let member: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if member {
        env.storage()
            .persistent()
            .extend_ttl(&key, MEMBER_LIFETIME_THRESHOLD, MEMBER_BUMP_AMOUNT);
    }
    member
}

/// Inserts `account`. Overwriting an existing entry is harmless.
pub fn insert(env: &Env, account: &Address) {
    let key = DataKey::Allowlisted(account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, MEMBER_LIFETIME_THRESHOLD, MEMBER_BUMP_AMOUNT);
}

/// Removes `account`. Removing a missing entry is a no-op.
pub fn remove(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Allowlisted(account.clone()));
}

pub fn counter(env: &Env, key: &DataKey) -> u64 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn bump_counter(env: &Env, key: &DataKey) -> u64 {
    let next = counter(env, key).saturating_add(1);
    env.storage().instance().set(key, &next);
    next
}
