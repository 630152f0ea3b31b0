use nft_types::MAX_PAGE_SIZE;
use soroban_sdk::{Address, Env, Vec};

use crate::storage::{
    get_owner_token_at, get_owner_token_count, get_token_index, remove_owner_token_at,
    remove_token_index, set_approval, set_owner_token_at, set_owner_token_count, set_token_index,
    set_token_owner,
};

/// Append a token to its owner's indexed list - O(1)
pub fn add_token_to_owner(env: &Env, owner: &Address, token_id: u32) {
    let count = get_owner_token_count(env, owner);

    set_owner_token_at(env, owner, count, token_id);
    set_token_index(env, token_id, count);
    set_owner_token_count(env, owner, count + 1);
}

/// Remove a token from its owner's indexed list using swap-and-pop - O(1)
pub fn remove_token_from_owner(env: &Env, owner: &Address, token_id: u32) {
    let count = get_owner_token_count(env, owner);
    if count == 0 {
        return;
    }

    let index_to_remove = get_token_index(env, token_id);
    let last_index = count - 1;

    // Move the last token into the vacated slot
    if index_to_remove != last_index {
        if let Some(last_token_id) = get_owner_token_at(env, owner, last_index) {
            set_owner_token_at(env, owner, index_to_remove, last_token_id);
            set_token_index(env, last_token_id, index_to_remove);
        }
    }

    remove_owner_token_at(env, owner, last_index);
    remove_token_index(env, token_id);
    set_owner_token_count(env, owner, last_index);
}

/// Hand a token to a new owner, clearing any approval
pub fn move_token(env: &Env, from: &Address, to: &Address, token_id: u32) {
    set_token_owner(env, token_id, to);
    set_approval(env, token_id, None);

    remove_token_from_owner(env, from, token_id);
    add_token_to_owner(env, to, token_id);
}

/// Up to `limit` token ids of `owner` starting at `start_index`.
/// `limit` is capped at MAX_PAGE_SIZE to stay within read entry limits.
pub fn tokens_of_page(env: &Env, owner: &Address, start_index: u32, limit: u32) -> Vec<u32> {
    let safe_limit = limit.min(MAX_PAGE_SIZE);
    let count = get_owner_token_count(env, owner);
    let end_index = start_index.saturating_add(safe_limit).min(count);

    let mut tokens: Vec<u32> = Vec::new(env);
    for i in start_index..end_index {
        if let Some(token_id) = get_owner_token_at(env, owner, i) {
            tokens.push_back(token_id);
        }
    }
    tokens
}
