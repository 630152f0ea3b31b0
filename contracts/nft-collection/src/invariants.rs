// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over collection state. They are asserted in debug builds
// after every mutation and reused by the Certora rules.
//
// INVARIANT CATEGORIES:
//
// 1. MINT INVARIANTS
//    - No address mints past its limit
//    - Closed sale admits only whitelisted minters
//    - Token ids are handed out sequentially
//
// 2. SUPPLY INVARIANTS
//    - Outstanding supply never exceeds tokens ever minted
//    - Tokens ever minted respect the supply ceiling
//
// 3. PAYMENT INVARIANTS
//    - Collected amount equals price times tokens minted
//
// ============================================================================

use nft_types::SupplyState;

// ============================================================================
// MINT INVARIANTS
// ============================================================================

/// Invariant: per-address mint count respects the limit
///
/// Property:
///   minted_by(a) <= mint_limit
pub fn within_mint_limit(minted_by: u32, mint_limit: u32) -> bool {
    minted_by <= mint_limit
}

/// Invariant: a mint went through only if the sale was open or the
/// caller was whitelisted
pub fn sale_gate_respected(minted: bool, sale_open: bool, whitelisted: bool) -> bool {
    !minted || sale_open || whitelisted
}

/// Invariant: a batch of `count` tokens starting at `first_id` advances
/// the id counter by exactly `count`
pub fn ids_sequential(first_id: u32, count: u32, next_token_id: u32) -> bool {
    first_id.checked_add(count) == Some(next_token_id)
}

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Invariant: burned tokens are never counted as outstanding
///
/// Property:
///   outstanding <= next_token_id - 1
pub fn supply_consistent(supply: &SupplyState) -> bool {
    supply.next_token_id >= nft_types::FIRST_TOKEN_ID && supply.outstanding <= supply.minted_total()
}

/// Invariant: tokens ever minted respect the ceiling (0 = unlimited)
pub fn within_supply_cap(supply: &SupplyState, max_supply: u32) -> bool {
    max_supply == 0 || supply.minted_total() <= max_supply
}

// ============================================================================
// PAYMENT INVARIANTS
// ============================================================================

/// Invariant: the contract collected exactly `price * count`
pub fn payment_matches(collected: i128, price: i128, count: u32) -> bool {
    nft_guard::mint_cost(price, count) == Some(collected)
}
