#![no_std]

mod config;
mod error;
mod token;

pub use config::*;
pub use error::*;
pub use token::*;

/// Tokens a single address may ever mint
pub const DEFAULT_MINT_LIMIT: u32 = 4;

/// Price per token in the payment token's smallest unit
/// 100_000 = 0.01 of a 7-decimal Stellar asset
pub const DEFAULT_PRICE: i128 = 100_000;

/// Prefix prepended to content ids when rendering token URIs
pub const DEFAULT_BASE_URI: &str = "ipfs://";

/// Maximum length in bytes of a stored content id
pub const MAX_CONTENT_ID_LEN: u32 = 128;

/// Maximum length in bytes of the collection base URI
pub const MAX_BASE_URI_LEN: u32 = 128;

/// Longest URI `token_uri` can render
pub const MAX_TOKEN_URI_LEN: usize = (MAX_BASE_URI_LEN + MAX_CONTENT_ID_LEN) as usize;

/// Maximum content ids accepted by a single mint call.
/// Each token costs ~5 persistent writes; 20 keeps a batch
/// well inside the 100 write entries per transaction.
pub const MAX_BATCH_SIZE: u32 = 20;

/// Maximum accounts in one whitelist add or remove.
/// One persistent write per account, kept under the 50 write entries
/// per transaction.
pub const MAX_WHITELIST_BATCH: u32 = 25;

/// Maximum ids returned by one page of owner enumeration
pub const MAX_PAGE_SIZE: u32 = 50;

/// Id assigned to the first token minted by a collection
pub const FIRST_TOKEN_ID: u32 = 1;
