#![no_std]

mod certora_specs;
mod invariants;
mod ledger;
mod storage;

use nft_guard::{
    authorize_mint, check_account_batch, check_collection_owner, check_config, check_content_id,
    check_spender, check_token_owner, check_withdraw_amount, render_token_uri, require_existing,
    MintRequest, MintRules,
};
use nft_types::{CollectionConfig, GuardError, SupplyState, TokenInfo};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Symbol, Vec};

#[contract]
pub struct NftCollection;

/// Abort the invocation with the guard's reason string.
/// The host rolls back every write made by the failed call.
fn fail(env: &Env, err: GuardError) -> ! {
    log!(env, "Guard rejected call: code={}", err.code());
    panic!("{}", err.reason())
}

trait OrFail<T> {
    fn or_fail(self, env: &Env) -> T;
}

impl<T> OrFail<T> for Result<T, GuardError> {
    fn or_fail(self, env: &Env) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fail(env, err),
        }
    }
}

fn require_collection_owner(env: &Env, caller: &Address) {
    caller.require_auth();
    check_collection_owner(&storage::get_owner(env), caller).or_fail(env);
}

#[contractimpl]
impl NftCollection {
    /// Create the collection, closed and empty, owned by `owner`
    pub fn initialize(env: Env, owner: Address, config: CollectionConfig) {
        if storage::is_initialized(&env) {
            panic!("Already initialized");
        }

        owner.require_auth();
        check_config(&config).or_fail(&env);

        storage::set_owner(&env, &owner);
        storage::set_config(&env, &config);
        storage::set_supply(&env, &SupplyState::new());
        storage::set_sale_open(&env, false);

        log!(&env, "Collection initialized: owner={}", owner);
    }

    // === Sale phase ===

    /// Open public minting (owner only)
    pub fn start_mint(env: Env, caller: Address) {
        require_collection_owner(&env, &caller);
        storage::set_sale_open(&env, true);

        env.events()
            .publish((Symbol::new(&env, "sale_started"),), caller);
        log!(&env, "Sale opened");
    }

    /// Close public minting again (owner only)
    pub fn stop_mint(env: Env, caller: Address) {
        require_collection_owner(&env, &caller);
        storage::set_sale_open(&env, false);

        env.events()
            .publish((Symbol::new(&env, "sale_stopped"),), caller);
        log!(&env, "Sale closed");
    }

    // === Whitelist ===

    /// Allow `accounts` to mint before the sale opens (owner only).
    /// At most `MAX_WHITELIST_BATCH` accounts per call.
    pub fn add_to_whitelist(env: Env, caller: Address, accounts: Vec<Address>) {
        require_collection_owner(&env, &caller);
        check_account_batch(accounts.len()).or_fail(&env);
        for account in accounts.iter() {
            storage::set_whitelisted(&env, &account, true);
            env.events()
                .publish((Symbol::new(&env, "whitelist_updated"), account), true);
        }
    }

    /// Revoke early-mint rights (owner only)
    pub fn remove_from_whitelist(env: Env, caller: Address, accounts: Vec<Address>) {
        require_collection_owner(&env, &caller);
        check_account_batch(accounts.len()).or_fail(&env);
        for account in accounts.iter() {
            storage::set_whitelisted(&env, &account, false);
            env.events()
                .publish((Symbol::new(&env, "whitelist_updated"), account), false);
        }
    }

    // === Mint / burn ===

    /// Mint one token per content id to `caller`, charging `price` each.
    ///
    /// `payment` must equal `price * content_ids.len()` exactly; it is
    /// pulled from `caller` in the collection's payment token.
    ///
    /// # Returns
    /// The new token ids, in content id order
    pub fn mint(env: Env, caller: Address, content_ids: Vec<String>, payment: i128) -> Vec<u32> {
        caller.require_auth();

        let config = storage::get_config(&env);
        let mut supply = storage::get_supply(&env);
        let minted_by_caller = storage::get_minted_by(&env, &caller);
        let sale_open = storage::is_sale_open(&env);
        let whitelisted = storage::is_whitelisted(&env, &caller);

        let request = MintRequest {
            sale_open,
            caller_whitelisted: whitelisted,
            count: content_ids.len(),
            payment,
            minted_by_caller,
            minted_total: supply.minted_total(),
        };
        let ticket = authorize_mint(&MintRules::from(&config), &request).or_fail(&env);
        for content_id in content_ids.iter() {
            check_content_id(&content_id).or_fail(&env);
        }

        // All checks passed - collect payment, then write
        if ticket.cost > 0 {
            let payment_token = token::Client::new(&env, &config.payment_token);
            payment_token.transfer(&caller, &env.current_contract_address(), &ticket.cost);
        }

        let first_id = supply.next_token_id;
        let mut token_ids: Vec<u32> = Vec::new(&env);
        for content_id in content_ids.iter() {
            let token_id = supply.next_token_id;
            supply.next_token_id += 1;
            supply.outstanding += 1;

            storage::set_token_owner(&env, token_id, &caller);
            storage::set_content_id(&env, token_id, &content_id);
            ledger::add_token_to_owner(&env, &caller, token_id);

            env.events().publish(
                (Symbol::new(&env, "minted"), token_id),
                (caller.clone(), content_id),
            );
            token_ids.push_back(token_id);
        }

        let minted_after = minted_by_caller + ticket.count;
        storage::set_supply(&env, &supply);
        storage::set_minted_by(&env, &caller, minted_after);

        debug_assert!(invariants::within_mint_limit(minted_after, config.mint_limit));
        debug_assert!(invariants::sale_gate_respected(true, sale_open, whitelisted));
        debug_assert!(invariants::ids_sequential(first_id, ticket.count, supply.next_token_id));
        debug_assert!(invariants::supply_consistent(&supply));
        debug_assert!(invariants::within_supply_cap(&supply, config.max_supply));
        debug_assert!(invariants::payment_matches(ticket.cost, config.price, ticket.count));

        log!(&env, "Minted: to={}, first_id={}, count={}", caller, first_id, ticket.count);
        token_ids
    }

    /// Destroy a token. Only its current owner may burn it.
    /// The owner's mint count is left untouched.
    pub fn burn(env: Env, caller: Address, token_id: u32) {
        caller.require_auth();

        let owner = storage::get_token_owner(&env, token_id);
        check_token_owner(owner.as_ref(), &caller).or_fail(&env);

        storage::remove_token(&env, token_id);
        ledger::remove_token_from_owner(&env, &caller, token_id);

        let mut supply = storage::get_supply(&env);
        supply.outstanding -= 1;
        storage::set_supply(&env, &supply);
        debug_assert!(invariants::supply_consistent(&supply));

        env.events()
            .publish((Symbol::new(&env, "burned"), token_id), caller.clone());
        log!(&env, "Burned: owner={}, token_id={}", caller, token_id);
    }

    // === Metadata ===

    /// Rendered URI (`base_uri ++ content_id`) of an existing token
    pub fn token_uri(env: Env, token_id: u32) -> String {
        let content_id = require_existing(storage::get_content_id(&env, token_id)).or_fail(&env);
        let config = storage::get_config(&env);
        render_token_uri(&env, &config.base_uri, &content_id)
    }

    /// Raw content id stored for an existing token
    pub fn content_id(env: Env, token_id: u32) -> String {
        require_existing(storage::get_content_id(&env, token_id)).or_fail(&env)
    }

    /// Owner, content id and approval of an existing token
    pub fn token_info(env: Env, token_id: u32) -> TokenInfo {
        let owner = require_existing(storage::get_token_owner(&env, token_id)).or_fail(&env);
        let content_id = require_existing(storage::get_content_id(&env, token_id)).or_fail(&env);
        TokenInfo {
            token_id,
            owner,
            content_id,
            approved: storage::get_approval(&env, token_id),
        }
    }

    // === Ownership ===

    /// Owner of an existing token
    pub fn owner_of(env: Env, token_id: u32) -> Address {
        require_existing(storage::get_token_owner(&env, token_id)).or_fail(&env)
    }

    /// Number of tokens held by `owner`
    pub fn balance_of(env: Env, owner: Address) -> u32 {
        storage::get_owner_token_count(&env, &owner)
    }

    /// Token ids held by `owner`, paginated.
    /// Returns up to `limit` ids (max 50) starting from `start_index`.
    pub fn tokens_of(env: Env, owner: Address, start_index: u32, limit: u32) -> Vec<u32> {
        ledger::tokens_of_page(&env, &owner, start_index, limit)
    }

    /// Let `spender` transfer `token_id`, or clear the approval with `None`
    pub fn approve(env: Env, caller: Address, spender: Option<Address>, token_id: u32) {
        caller.require_auth();

        let owner = storage::get_token_owner(&env, token_id);
        check_token_owner(owner.as_ref(), &caller).or_fail(&env);

        storage::set_approval(&env, token_id, spender.as_ref());

        env.events().publish(
            (Symbol::new(&env, "approval"), caller),
            (spender, token_id),
        );
    }

    /// Approved spender of an existing token
    pub fn get_approved(env: Env, token_id: u32) -> Option<Address> {
        require_existing(storage::get_token_owner(&env, token_id)).or_fail(&env);
        storage::get_approval(&env, token_id)
    }

    /// Move a token held by `from`
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();

        let owner = storage::get_token_owner(&env, token_id);
        check_token_owner(owner.as_ref(), &from).or_fail(&env);

        ledger::move_token(&env, &from, &to, token_id);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), token_id);
    }

    /// Move a token on behalf of its owner, as the owner or approved spender
    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();

        let owner = storage::get_token_owner(&env, token_id);
        check_token_owner(owner.as_ref(), &from).or_fail(&env);
        let approved = storage::get_approval(&env, token_id);
        check_spender(&from, approved.as_ref(), &spender).or_fail(&env);

        ledger::move_token(&env, &from, &to, token_id);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), token_id);
    }

    // === Treasury ===

    /// Send collected mint payments to `to` (owner only)
    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) {
        require_collection_owner(&env, &caller);
        check_withdraw_amount(amount).or_fail(&env);

        let config = storage::get_config(&env);
        let payment_token = token::Client::new(&env, &config.payment_token);
        payment_token.transfer(&env.current_contract_address(), &to, &amount);

        env.events()
            .publish((Symbol::new(&env, "withdrawn"), to.clone()), amount);
        log!(&env, "Withdrawn: to={}, amount={}", to, amount);
    }

    // === View Functions ===

    /// Collection owner
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Collection configuration
    pub fn config(env: Env) -> CollectionConfig {
        storage::get_config(&env)
    }

    pub fn name(env: Env) -> String {
        storage::get_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        storage::get_config(&env).symbol
    }

    /// Price per token
    pub fn price(env: Env) -> i128 {
        storage::get_config(&env).price
    }

    /// Tokens one address may ever mint
    pub fn mint_limit(env: Env) -> u32 {
        storage::get_config(&env).mint_limit
    }

    /// Supply ceiling (0 = unlimited)
    pub fn max_supply(env: Env) -> u32 {
        storage::get_config(&env).max_supply
    }

    pub fn is_sale_open(env: Env) -> bool {
        storage::is_sale_open(&env)
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    /// Tokens ever minted by `account`, burned ones included
    pub fn minted_by(env: Env, account: Address) -> u32 {
        storage::get_minted_by(&env, &account)
    }

    /// Tokens minted and not burned
    pub fn total_supply(env: Env) -> u32 {
        storage::get_supply(&env).outstanding
    }

    /// Tokens ever minted
    pub fn total_minted(env: Env) -> u32 {
        storage::get_supply(&env).minted_total()
    }
}
