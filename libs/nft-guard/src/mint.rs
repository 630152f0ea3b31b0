use nft_types::{CollectionConfig, GuardError, MAX_BATCH_SIZE};

/// Numeric mint parameters taken from the collection config
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MintRules {
    pub price: i128,
    pub mint_limit: u32,
    /// 0 = unlimited
    pub max_supply: u32,
}

impl From<&CollectionConfig> for MintRules {
    fn from(config: &CollectionConfig) -> Self {
        Self {
            price: config.price,
            mint_limit: config.mint_limit,
            max_supply: config.max_supply,
        }
    }
}

/// Snapshot of everything a mint decision depends on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MintRequest {
    pub sale_open: bool,
    pub caller_whitelisted: bool,
    /// Number of content ids in the batch
    pub count: u32,
    /// Amount the caller offers to pay
    pub payment: i128,
    /// Tokens the caller has minted so far
    pub minted_by_caller: u32,
    /// Tokens the collection has ever minted
    pub minted_total: u32,
}

/// Approved mint: how many tokens and what to charge
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MintTicket {
    pub count: u32,
    pub cost: i128,
}

/// Total price for `count` tokens, `None` on overflow
pub fn mint_cost(price: i128, count: u32) -> Option<i128> {
    price.checked_mul(count as i128)
}

/// Decide whether a mint may proceed.
///
/// Checks run in a fixed order and the first failure wins:
/// whitelist, payment, per-address limit, batch size, supply ceiling.
pub fn authorize_mint(rules: &MintRules, request: &MintRequest) -> Result<MintTicket, GuardError> {
    if !request.sale_open && !request.caller_whitelisted {
        return Err(GuardError::NotWhitelisted);
    }

    let cost = mint_cost(rules.price, request.count).ok_or(GuardError::IncorrectPayment)?;
    if request.payment != cost {
        return Err(GuardError::IncorrectPayment);
    }

    match request.minted_by_caller.checked_add(request.count) {
        Some(after) if after <= rules.mint_limit => {}
        _ => return Err(GuardError::MintLimitExceeded),
    }

    if request.count == 0 || request.count > MAX_BATCH_SIZE {
        return Err(GuardError::InvalidBatch);
    }

    if rules.max_supply > 0 {
        match request.minted_total.checked_add(request.count) {
            Some(after) if after <= rules.max_supply => {}
            _ => return Err(GuardError::MaxSupplyExceeded),
        }
    }

    Ok(MintTicket {
        count: request.count,
        cost,
    })
}
