use nft_types::{CollectionConfig, SupplyState};
use soroban_sdk::{contracttype, Address, Env, String};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Constraints for collection operations:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - Config, supply counters and the sale flag live in Instance storage
//   (read on every call, small)
// - Whitelist membership and per-address mint counts are one Persistent
//   entry per address
// - Each token costs owner + content id + owner index entries, so mint
//   batches are capped at MAX_BATCH_SIZE
// - Approvals are removed rather than overwritten when cleared
// ============================================================================

/// Storage keys for the collection contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collection owner (Instance storage)
    Owner,
    /// Collection configuration (Instance storage)
    Config,
    /// Supply counters (Instance storage)
    Supply,
    /// Public sale flag (Instance storage)
    SaleOpen,
    /// Address -> whitelisted (Persistent storage)
    Whitelisted(Address),
    /// Address -> tokens ever minted by it (Persistent storage)
    MintedBy(Address),
    /// Token id -> owner (Persistent storage)
    TokenOwner(u32),
    /// Token id -> content id (Persistent storage)
    TokenContent(u32),
    /// Token id -> approved spender (Persistent storage)
    Approval(u32),
    /// Owner -> token count (indexed storage for enumeration)
    OwnerTokenCount(Address),
    /// Owner -> index -> token id
    OwnerTokenAt(Address, u32),
    /// Token id -> index in its owner's list (for O(1) removal)
    TokenIndex(u32),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent_ttl(env, key);
}

// === Lifecycle ===

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Not initialized")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Config ===

pub fn get_config(env: &Env) -> CollectionConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

pub fn set_config(env: &Env, config: &CollectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_supply(env: &Env) -> SupplyState {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Supply)
        .expect("Not initialized")
}

pub fn set_supply(env: &Env, supply: &SupplyState) {
    env.storage().instance().set(&DataKey::Supply, supply);
    extend_instance_ttl(env);
}

// === Sale phase ===

pub fn is_sale_open(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SaleOpen)
        .unwrap_or(false)
}

pub fn set_sale_open(env: &Env, open: bool) {
    env.storage().instance().set(&DataKey::SaleOpen, &open);
    extend_instance_ttl(env);
}

// === Whitelist ===

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(account.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, account: &Address, listed: bool) {
    let key = DataKey::Whitelisted(account.clone());
    if listed {
        set_persistent(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// === Mint counts ===

pub fn get_minted_by(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::MintedBy(account.clone()))
        .unwrap_or(0)
}

pub fn set_minted_by(env: &Env, account: &Address, count: u32) {
    set_persistent(env, &DataKey::MintedBy(account.clone()), &count);
}

// === Tokens ===

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::TokenOwner(token_id))
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    set_persistent(env, &DataKey::TokenOwner(token_id), owner);
}

pub fn get_content_id(env: &Env, token_id: u32) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::TokenContent(token_id))
}

pub fn set_content_id(env: &Env, token_id: u32, content_id: &String) {
    set_persistent(env, &DataKey::TokenContent(token_id), content_id);
}

pub fn get_approval(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Approval(token_id))
}

pub fn set_approval(env: &Env, token_id: u32, spender: Option<&Address>) {
    let key = DataKey::Approval(token_id);
    match spender {
        Some(spender) => set_persistent(env, &key, spender),
        None => env.storage().persistent().remove(&key),
    }
}

/// Drop every per-token record
pub fn remove_token(env: &Env, token_id: u32) {
    let storage = env.storage().persistent();
    storage.remove(&DataKey::TokenOwner(token_id));
    storage.remove(&DataKey::TokenContent(token_id));
    storage.remove(&DataKey::Approval(token_id));
}

// === Owner index ===

pub fn get_owner_token_count(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerTokenCount(owner.clone()))
        .unwrap_or(0)
}

pub fn set_owner_token_count(env: &Env, owner: &Address, count: u32) {
    let key = DataKey::OwnerTokenCount(owner.clone());
    if count == 0 {
        // Remove count entry when empty
        env.storage().persistent().remove(&key);
    } else {
        set_persistent(env, &key, &count);
    }
}

pub fn get_owner_token_at(env: &Env, owner: &Address, index: u32) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerTokenAt(owner.clone(), index))
}

pub fn set_owner_token_at(env: &Env, owner: &Address, index: u32, token_id: u32) {
    set_persistent(env, &DataKey::OwnerTokenAt(owner.clone(), index), &token_id);
}

pub fn remove_owner_token_at(env: &Env, owner: &Address, index: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerTokenAt(owner.clone(), index));
}

pub fn get_token_index(env: &Env, token_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TokenIndex(token_id))
        .unwrap_or(0)
}

pub fn set_token_index(env: &Env, token_id: u32, index: u32) {
    set_persistent(env, &DataKey::TokenIndex(token_id), &index);
}

pub fn remove_token_index(env: &Env, token_id: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::TokenIndex(token_id));
}
