use soroban_sdk::{contracttype, Address, String};

/// Full token view returned by `token_info`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenInfo {
    pub token_id: u32,
    pub owner: Address,
    /// Content identifier supplied at mint time
    pub content_id: String,
    /// Address approved to transfer this token, if any
    pub approved: Option<Address>,
}
