use soroban_sdk::{contracttype, Address, Env, String};

use crate::{DEFAULT_BASE_URI, DEFAULT_MINT_LIMIT, DEFAULT_PRICE};

/// Collection configuration - set once at initialization (Instance storage)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionConfig {
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
    /// Prefix for rendered token URIs
    pub base_uri: String,
    /// Token contract used to pay for mints
    pub payment_token: Address,
    /// Price per token in payment token units
    pub price: i128,
    /// Maximum tokens one address may ever mint
    pub mint_limit: u32,
    /// Maximum tokens ever minted (0 = unlimited)
    pub max_supply: u32,
}

impl CollectionConfig {
    /// Config with the default price, limit and base URI
    pub fn standard(env: &Env, name: &str, symbol: &str, payment_token: Address) -> Self {
        Self {
            name: String::from_str(env, name),
            symbol: String::from_str(env, symbol),
            base_uri: String::from_str(env, DEFAULT_BASE_URI),
            payment_token,
            price: DEFAULT_PRICE,
            mint_limit: DEFAULT_MINT_LIMIT,
            max_supply: 0,
        }
    }
}

/// Running counters - updated on every mint and burn (Instance storage)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyState {
    /// Id the next minted token receives
    pub next_token_id: u32,
    /// Tokens minted and not burned
    pub outstanding: u32,
}

impl SupplyState {
    pub fn new() -> Self {
        Self {
            next_token_id: crate::FIRST_TOKEN_ID,
            outstanding: 0,
        }
    }

    /// Tokens ever minted, burned ones included
    pub fn minted_total(&self) -> u32 {
        self.next_token_id.saturating_sub(crate::FIRST_TOKEN_ID)
    }
}

impl Default for SupplyState {
    fn default() -> Self {
        Self::new()
    }
}
