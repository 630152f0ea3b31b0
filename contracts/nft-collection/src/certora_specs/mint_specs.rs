// ============================================================================
// MINT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. No address ends a mint above its limit
// 2. Ids are handed out in sequence, never reused
// 3. Outstanding supply tracks minted tokens exactly
// 4. The supply ceiling is never crossed
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env, String, Vec};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::{free_config, AccountSnapshot, CollectionSnapshot};
#[cfg(feature = "certora")]
use crate::NftCollection;

#[cfg(feature = "certora")]
fn batch(env: &Env, count: u32) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new(env);
    for _ in 0..count {
        ids.push_back(String::from_str(env, "QmcLkFCxE4fsqUZei9LqCNnUgq3EP6WUgBLNVXcDhww828"));
    }
    ids
}

/// RULE: a successful mint leaves the caller within the limit
#[cfg(feature = "certora")]
#[rule]
pub fn mint_respects_limit(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
    mint_limit: u32,
    count: u32,
) {
    cvlr_assume!(mint_limit > 0 && mint_limit <= 8);
    cvlr_assume!(count > 0 && count <= 4);

    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, mint_limit, 0));
    NftCollection::start_mint(env.clone(), owner);

    NftCollection::mint(env.clone(), minter.clone(), batch(&env, count), 0);

    let after = AccountSnapshot::capture(&env, &minter);
    cvlr_assert!(after.minted_by <= mint_limit);
    cvlr_assert!(after.minted_by == count);
}

/// RULE: a second mint that would cross the limit is unreachable
#[cfg(feature = "certora")]
#[rule]
pub fn mint_past_limit_reverts(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
    first: u32,
    second: u32,
) {
    let mint_limit: u32 = nft_types::DEFAULT_MINT_LIMIT;
    cvlr_assume!(first > 0 && first <= mint_limit);
    cvlr_assume!(second > mint_limit - first);
    cvlr_assume!(second <= nft_types::MAX_BATCH_SIZE);

    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, mint_limit, 0));
    NftCollection::start_mint(env.clone(), owner);

    NftCollection::mint(env.clone(), minter.clone(), batch(&env, first), 0);
    NftCollection::mint(env.clone(), minter, batch(&env, second), 0);

    // Second mint panics, so this point must not be reachable
    cvlr_satisfy!(false);
}

/// RULE: minted ids are consecutive and supply grows by the batch size
#[cfg(feature = "certora")]
#[rule]
pub fn mint_ids_sequential(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
    count: u32,
) {
    cvlr_assume!(count > 0 && count <= nft_types::DEFAULT_MINT_LIMIT);

    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, 4, 0));
    NftCollection::start_mint(env.clone(), owner);

    let before = CollectionSnapshot::capture(&env);
    let ids = NftCollection::mint(env.clone(), minter, batch(&env, count), 0);
    let after = CollectionSnapshot::capture(&env);

    cvlr_assert!(ids.len() == count);
    cvlr_assert!(ids.get_unchecked(0) == before.total_minted + 1);
    cvlr_assert!(after.total_minted == before.total_minted + count);
    cvlr_assert!(after.total_supply == before.total_supply + count);
}

/// RULE: tokens ever minted never exceed a configured ceiling
#[cfg(feature = "certora")]
#[rule]
pub fn mint_respects_supply_cap(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
    max_supply: u32,
    count: u32,
) {
    cvlr_assume!(max_supply > 0);
    cvlr_assume!(count > 0 && count <= nft_types::DEFAULT_MINT_LIMIT);

    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, 4, max_supply));
    NftCollection::start_mint(env.clone(), owner);

    NftCollection::mint(env.clone(), minter, batch(&env, count), 0);

    let after = CollectionSnapshot::capture(&env);
    cvlr_assert!(after.total_minted <= max_supply);
}
