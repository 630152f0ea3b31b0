// ============================================================================
// GHOST STATE AND MODEL INITIALIZATION
// ============================================================================

/// Skolem variable for an arbitrary token id
#[cfg(feature = "certora")]
static mut SKOLEM_TOKEN_ID: u32 = 0;

#[cfg(feature = "certora")]
pub fn skolem_token_id() -> u32 {
    unsafe { SKOLEM_TOKEN_ID }
}

/// Set up arbitrary initial ghost state at the start of a rule
#[cfg(feature = "certora")]
pub fn init() {
    use cvlr::nondet::nondet;

    unsafe {
        SKOLEM_TOKEN_ID = nondet();
    }
}

/// Free-mint config used by every rule
#[cfg(feature = "certora")]
pub fn free_config(
    env: &soroban_sdk::Env,
    payment_token: soroban_sdk::Address,
    mint_limit: u32,
    max_supply: u32,
) -> nft_types::CollectionConfig {
    let mut config = nft_types::CollectionConfig::standard(env, "Token721", "T721", payment_token);
    config.price = 0;
    config.mint_limit = mint_limit;
    config.max_supply = max_supply;
    config
}

// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures collection counters for before/after comparisons
#[cfg(feature = "certora")]
#[derive(Clone)]
pub struct CollectionSnapshot {
    pub total_supply: u32,
    pub total_minted: u32,
    pub sale_open: bool,
}

#[cfg(feature = "certora")]
impl CollectionSnapshot {
    pub fn capture(env: &soroban_sdk::Env) -> Self {
        Self {
            total_supply: crate::NftCollection::total_supply(env.clone()),
            total_minted: crate::NftCollection::total_minted(env.clone()),
            sale_open: crate::NftCollection::is_sale_open(env.clone()),
        }
    }
}

/// Captures one account's holdings for before/after comparisons
#[cfg(feature = "certora")]
#[derive(Clone)]
pub struct AccountSnapshot {
    pub minted_by: u32,
    pub balance: u32,
}

#[cfg(feature = "certora")]
impl AccountSnapshot {
    pub fn capture(env: &soroban_sdk::Env, account: &soroban_sdk::Address) -> Self {
        Self {
            minted_by: crate::NftCollection::minted_by(env.clone(), account.clone()),
            balance: crate::NftCollection::balance_of(env.clone(), account.clone()),
        }
    }
}
