use nft_types::{GuardError, MAX_WHITELIST_BATCH};

/// Caller must be the collection owner
pub fn check_collection_owner<A: PartialEq>(owner: &A, caller: &A) -> Result<(), GuardError> {
    if owner != caller {
        return Err(GuardError::NotOwner);
    }
    Ok(())
}

/// Token must exist and be owned by `caller`.
/// `owner` is the stored owner record, `None` when the token does not exist.
pub fn check_token_owner<A: PartialEq>(owner: Option<&A>, caller: &A) -> Result<(), GuardError> {
    match owner {
        None => Err(GuardError::NonexistentToken),
        Some(owner) if owner != caller => Err(GuardError::NotOwner),
        Some(_) => Ok(()),
    }
}

/// Token must exist; returns its owner
pub fn require_existing<A>(owner: Option<A>) -> Result<A, GuardError> {
    owner.ok_or(GuardError::NonexistentToken)
}

/// Spender may move a token it owns or has been approved for
pub fn check_spender<A: PartialEq>(
    owner: &A,
    approved: Option<&A>,
    spender: &A,
) -> Result<(), GuardError> {
    if owner == spender || approved == Some(spender) {
        return Ok(());
    }
    Err(GuardError::NotApproved)
}

/// Withdrawals must move a positive amount
pub fn check_withdraw_amount(amount: i128) -> Result<(), GuardError> {
    if amount <= 0 {
        return Err(GuardError::InvalidAmount);
    }
    Ok(())
}

/// Whitelist updates touch one entry per account
pub fn check_account_batch(count: u32) -> Result<(), GuardError> {
    if count > MAX_WHITELIST_BATCH {
        return Err(GuardError::InvalidAccountBatch);
    }
    Ok(())
}
