// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal rules for the NFT collection's mint, sale and burn guards.
//
// STRUCTURE:
//
// - model.rs       : Ghost state, state snapshots
// - mint_specs.rs  : Mint limit, id sequencing, supply accounting
// - sale_specs.rs  : Sale phase and whitelist gating
// - burn_specs.rs  : Burn ownership and mint-count retention
//
// Rules configure price 0 so no payment token call is made.
//
// USAGE:
// - Unit tests: cargo test -p nft-collection
// - Certora build: cargo build --features certora -p nft-collection
// - Verification: certoraSorobanProver nft_collection.conf
//
// ============================================================================

// Ghost state and model initialization
pub mod model;

// Spec modules
pub mod burn_specs;
pub mod mint_specs;
pub mod sale_specs;
