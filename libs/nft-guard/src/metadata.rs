use nft_types::{
    CollectionConfig, GuardError, MAX_BASE_URI_LEN, MAX_CONTENT_ID_LEN, MAX_TOKEN_URI_LEN,
};
use soroban_sdk::{Env, String};

/// Content id must be non-empty and fit the stored length bound
pub fn check_content_id(content_id: &String) -> Result<(), GuardError> {
    let len = content_id.len();
    if len == 0 || len > MAX_CONTENT_ID_LEN {
        return Err(GuardError::InvalidContentId);
    }
    Ok(())
}

/// Validate collection parameters before they are stored
pub fn check_config(config: &CollectionConfig) -> Result<(), GuardError> {
    if config.price < 0 || config.mint_limit == 0 || config.base_uri.len() > MAX_BASE_URI_LEN {
        return Err(GuardError::InvalidConfig);
    }
    Ok(())
}

/// Render `base_uri ++ content_id`.
///
/// `check_config` and `check_content_id` bound both parts before they are
/// stored, so the result always fits `MAX_TOKEN_URI_LEN`.
pub fn render_token_uri(env: &Env, base_uri: &String, content_id: &String) -> String {
    let base_len = base_uri.len() as usize;
    let id_len = content_id.len() as usize;
    let total = base_len + id_len;
    debug_assert!(total <= MAX_TOKEN_URI_LEN);

    let mut buf = [0u8; MAX_TOKEN_URI_LEN];
    base_uri.copy_into_slice(&mut buf[..base_len]);
    content_id.copy_into_slice(&mut buf[base_len..total]);
    String::from_bytes(env, &buf[..total])
}
