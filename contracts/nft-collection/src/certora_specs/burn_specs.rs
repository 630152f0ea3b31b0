// ============================================================================
// BURN SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Only the current holder burns a token
// 2. Burning never lowers a mint count
// 3. Burned ids are never minted again
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{vec, Address, Env, String};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::{self, free_config, AccountSnapshot, CollectionSnapshot};
#[cfg(feature = "certora")]
use crate::NftCollection;

#[cfg(feature = "certora")]
fn mint_one(env: &Env, owner: &Address, payment_token: Address, minter: &Address) -> u32 {
    NftCollection::initialize(env.clone(), owner.clone(), free_config(env, payment_token, 4, 0));
    NftCollection::start_mint(env.clone(), owner.clone());
    let ids = vec![env, String::from_str(env, "QmcLkFCxE4fsqUZei9LqCNnUgq3EP6WUgBLNVXcDhww828")];
    NftCollection::mint(env.clone(), minter.clone(), ids, 0).get_unchecked(0)
}

/// RULE: burn keeps the burner's mint count and lowers outstanding supply
#[cfg(feature = "certora")]
#[rule]
pub fn burn_keeps_mint_count(env: Env, owner: Address, payment_token: Address, minter: Address) {
    let token_id = mint_one(&env, &owner, payment_token, &minter);

    let account_before = AccountSnapshot::capture(&env, &minter);
    let collection_before = CollectionSnapshot::capture(&env);

    NftCollection::burn(env.clone(), minter.clone(), token_id);

    let account_after = AccountSnapshot::capture(&env, &minter);
    let collection_after = CollectionSnapshot::capture(&env);

    cvlr_assert!(account_after.minted_by == account_before.minted_by);
    cvlr_assert!(account_after.balance + 1 == account_before.balance);
    cvlr_assert!(collection_after.total_supply + 1 == collection_before.total_supply);
    cvlr_assert!(collection_after.total_minted == collection_before.total_minted);
}

/// RULE: a non-holder cannot burn
#[cfg(feature = "certora")]
#[rule]
pub fn burn_by_stranger_reverts(
    env: Env,
    owner: Address,
    payment_token: Address,
    minter: Address,
    stranger: Address,
) {
    cvlr_assume!(stranger != minter);
    let token_id = mint_one(&env, &owner, payment_token, &minter);

    NftCollection::burn(env.clone(), stranger, token_id);

    cvlr_satisfy!(false);
}

/// RULE: an id that was never minted cannot be burned
#[cfg(feature = "certora")]
#[rule]
pub fn burn_unminted_reverts(env: Env, owner: Address, payment_token: Address, minter: Address) {
    model::init();
    let token_id = model::skolem_token_id();
    mint_one(&env, &owner, payment_token, &minter);
    cvlr_assume!(token_id != nft_types::FIRST_TOKEN_ID);

    NftCollection::burn(env.clone(), minter, token_id);

    cvlr_satisfy!(false);
}
