// ============================================================================
// SALE PHASE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Before the sale opens only whitelisted addresses mint
// 2. Only the collection owner moves the sale phase
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{vec, Address, Env, String};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::{free_config, CollectionSnapshot};
#[cfg(feature = "certora")]
use crate::NftCollection;

/// RULE: an address off the whitelist cannot mint while the sale is closed
#[cfg(feature = "certora")]
#[rule]
pub fn closed_sale_rejects_outsiders(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
) {
    NftCollection::initialize(env.clone(), owner, free_config(&env, payment_token, 4, 0));
    cvlr_assume!(!NftCollection::is_whitelisted(env.clone(), minter.clone()));

    let ids = vec![&env, String::from_str(&env, "QmcLkFCxE4fsqUZei9LqCNnUgq3EP6WUgBLNVXcDhww828")];
    NftCollection::mint(env.clone(), minter, ids, 0);

    cvlr_satisfy!(false);
}

/// RULE: a whitelisted address can mint before the sale opens
#[cfg(feature = "certora")]
#[rule]
pub fn whitelisted_mints_early(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
) {
    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, 4, 0));
    NftCollection::add_to_whitelist(env.clone(), owner, vec![&env, minter.clone()]);

    let before = CollectionSnapshot::capture(&env);
    cvlr_assert!(!before.sale_open);

    let ids = vec![&env, String::from_str(&env, "QmcLkFCxE4fsqUZei9LqCNnUgq3EP6WUgBLNVXcDhww828")];
    NftCollection::mint(env.clone(), minter, ids, 0);

    let after = CollectionSnapshot::capture(&env);
    cvlr_assert!(after.total_minted == before.total_minted + 1);
}

/// RULE: only the owner can open the sale
#[cfg(feature = "certora")]
#[rule]
pub fn start_mint_owner_only(
    env: Env,
    owner: Address,
    payment_token: Address,
    caller: Address,
) {
    NftCollection::initialize(env.clone(), owner.clone(), free_config(&env, payment_token, 4, 0));
    cvlr_assume!(caller != owner);

    NftCollection::start_mint(env.clone(), caller);

    cvlr_satisfy!(false);
}
