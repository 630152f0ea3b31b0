/// Rule violations reported by the collection.
///
/// Integrators match on the rendered reason string, so `reason()` is part
/// of the public interface and must not change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GuardError {
    /// Sale is closed and the caller is not whitelisted
    NotWhitelisted = 1,
    /// Payment differs from `price * count`
    IncorrectPayment = 2,
    /// Caller would exceed the per-address mint limit
    MintLimitExceeded = 3,
    /// Caller does not own the collection or the token
    NotOwner = 4,
    /// Token was never minted or has been burned
    NonexistentToken = 5,
    /// Empty batch, or more content ids than one call accepts
    InvalidBatch = 6,
    /// Minting would pass the collection's supply ceiling
    MaxSupplyExceeded = 7,
    /// Content id is empty or too long
    InvalidContentId = 8,
    /// Spender is neither the token owner nor approved for it
    NotApproved = 9,
    /// Non-positive withdrawal amount
    InvalidAmount = 10,
    /// Collection config failed validation
    InvalidConfig = 11,
    /// More accounts than one whitelist update accepts
    InvalidAccountBatch = 12,
}

impl GuardError {
    /// Human-readable reason surfaced to callers
    pub const fn reason(&self) -> &'static str {
        match self {
            GuardError::NotWhitelisted => "only whitelist can mint before sale",
            GuardError::IncorrectPayment => "incorrect payment amount",
            GuardError::MintLimitExceeded => "mint up to the allowed limit",
            GuardError::NotOwner => "Caller is not owner",
            GuardError::NonexistentToken => "ERC721Metadata: URI query for nonexistent token",
            GuardError::InvalidBatch => "invalid mint batch size",
            GuardError::MaxSupplyExceeded => "max supply reached",
            GuardError::InvalidContentId => "invalid content id",
            GuardError::NotApproved => "caller is not token owner or approved",
            GuardError::InvalidAmount => "amount must be positive",
            GuardError::InvalidConfig => "invalid collection config",
            GuardError::InvalidAccountBatch => "invalid account batch size",
        }
    }

    /// Numeric tag, used in diagnostic logs
    pub const fn code(&self) -> u32 {
        *self as u32
    }
}

impl core::fmt::Display for GuardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.reason())
    }
}
