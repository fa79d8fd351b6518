//! State definitions for the CCTP contract
//!
//! Every protocol entity has its own typed key here. Handlers receive the
//! storage explicitly through `deps` and never cache state between calls.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Immutable contract configuration, fixed at instantiate
#[cw_serde]
pub struct Config {
    /// Domain identifier of this chain
    pub local_domain: u32,
    /// 32-byte identity of the local token messenger. Burn messages addressed
    /// to it are minted here, and outgoing burn messages are sent from it.
    pub token_messenger: Binary,
    /// Bech32 prefix used to turn mint recipients into local addresses
    pub bech32_prefix: String,
}

/// Role holders
#[cw_serde]
pub struct Roles {
    pub owner: Addr,
    /// Proposed owner awaiting `AcceptOwner`
    pub pending_owner: Option<Addr>,
    pub attester_manager: Addr,
    pub pauser: Addr,
    pub token_controller: Addr,
}

// ============================================================================
// Registry Entries
// ============================================================================

/// Link between a token on a remote domain and its local CW20 representation
#[cw_serde]
pub struct TokenPair {
    pub remote_domain: u32,
    /// 32-byte remote token identifier
    pub remote_token: Binary,
    /// Local CW20 token contract address
    pub local_token: String,
}

/// Maximum amount of a local token burnable in one deposit
#[cw_serde]
pub struct PerMessageBurnLimit {
    pub denom: String,
    pub amount: Uint128,
}

/// Trusted token messenger on a remote domain
#[cw_serde]
pub struct RemoteTokenMessenger {
    pub domain_id: u32,
    /// 32-byte sender identity of the remote token messenger
    pub address: Binary,
}

/// An inbound (source domain, nonce) pair that has been consumed
#[cw_serde]
pub struct UsedNonce {
    pub source_domain: u32,
    pub nonce: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for migration
pub const CONTRACT_NAME: &str = "crates.io:cctp";

/// Contract version for migration
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum message body size in bytes
pub const DEFAULT_MAX_MESSAGE_BODY_SIZE: u64 = 8000;

/// Default number of attester signatures required
pub const DEFAULT_SIGNATURE_THRESHOLD: u32 = 1;

// ============================================================================
// Storage Keys
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const ROLES: Item<Roles> = Item::new("roles");

pub const BURNING_AND_MINTING_PAUSED: Item<bool> = Item::new("burning_and_minting_paused");

pub const SENDING_AND_RECEIVING_MESSAGES_PAUSED: Item<bool> =
    Item::new("sending_and_receiving_messages_paused");

pub const MAX_MESSAGE_BODY_SIZE: Item<u64> = Item::new("max_message_body_size");

/// Next nonce assigned to an outgoing message
pub const NEXT_AVAILABLE_NONCE: Item<u64> = Item::new("next_available_nonce");

pub const SIGNATURE_THRESHOLD: Item<u32> = Item::new("signature_threshold");

/// Enabled attesters, keyed by lowercase hex of the uncompressed public key
pub const ATTESTERS: Map<&str, bool> = Map::new("attesters");

/// Token pairs keyed by (remote domain, remote token)
pub const TOKEN_PAIRS: Map<(u32, &[u8]), TokenPair> = Map::new("token_pairs");

/// Per-message burn limits keyed by local token
pub const PER_MESSAGE_BURN_LIMITS: Map<&str, Uint128> = Map::new("per_message_burn_limits");

/// Consumed inbound nonces keyed by (source domain, nonce)
pub const USED_NONCES: Map<(u32, u64), bool> = Map::new("used_nonces");

/// Remote token messengers keyed by domain
pub const REMOTE_TOKEN_MESSENGERS: Map<u32, Binary> = Map::new("remote_token_messengers");

// ============================================================================
// Bulk Accessors
// ============================================================================

pub fn all_attesters(storage: &dyn Storage) -> StdResult<Vec<String>> {
    ATTESTERS
        .keys(storage, None, None, Order::Ascending)
        .collect()
}

pub fn all_token_pairs(storage: &dyn Storage) -> StdResult<Vec<TokenPair>> {
    TOKEN_PAIRS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, pair)| pair))
        .collect()
}

pub fn all_per_message_burn_limits(storage: &dyn Storage) -> StdResult<Vec<PerMessageBurnLimit>> {
    PER_MESSAGE_BURN_LIMITS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(denom, amount)| PerMessageBurnLimit { denom, amount }))
        .collect()
}

pub fn all_used_nonces(storage: &dyn Storage) -> StdResult<Vec<UsedNonce>> {
    USED_NONCES
        .keys(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(source_domain, nonce)| UsedNonce { source_domain, nonce }))
        .collect()
}

pub fn all_remote_token_messengers(
    storage: &dyn Storage,
) -> StdResult<Vec<RemoteTokenMessenger>> {
    REMOTE_TOKEN_MESSENGERS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(domain_id, address)| RemoteTokenMessenger { domain_id, address }))
        .collect()
}
