//! Message types for the CCTP contract
//!
//! This module defines all messages for instantiation, execution, and queries.
//! Every 32-byte identifier (addresses, tokens, callers) travels as `Binary`.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{PerMessageBurnLimit, RemoteTokenMessenger, TokenPair, UsedNonce};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// This is the full genesis snapshot of the protocol. `ExportGenesis` returns
/// the same structure so state can be dumped and reloaded.
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (required)
    pub owner: String,
    pub attester_manager: String,
    pub pauser: String,
    pub token_controller: String,
    /// Domain identifier of this chain
    pub local_domain: u32,
    /// Bech32 prefix of local account addresses (e.g. "noble")
    pub bech32_prefix: String,
    /// 32-byte identity of the local token messenger
    /// (defaults to the padded contract address)
    pub token_messenger: Option<Binary>,
    /// Enabled attesters as hex uncompressed public keys
    #[serde(default)]
    pub attesters: Vec<String>,
    #[serde(default)]
    pub per_message_burn_limits: Vec<PerMessageBurnLimit>,
    /// Defaults to paused
    pub burning_and_minting_paused: Option<bool>,
    /// Defaults to paused
    pub sending_and_receiving_messages_paused: Option<bool>,
    /// Defaults to 8000 bytes
    pub max_message_body_size: Option<u64>,
    /// Defaults to 0
    pub next_available_nonce: Option<u64>,
    /// Defaults to 1, must not be 0
    pub signature_threshold: Option<u32>,
    #[serde(default)]
    pub token_pairs: Vec<TokenPair>,
    #[serde(default)]
    pub used_nonces: Vec<UsedNonce>,
    #[serde(default)]
    pub remote_token_messengers: Vec<RemoteTokenMessenger>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Token Messenger
    // ========================================================================
    /// Deposit CW20 tokens for burning (called via CW20 send)
    /// Implements CW20 Receiver interface
    Receive(cw20::Cw20ReceiveMsg),

    /// Replace the mint recipient and destination caller of a previously
    /// sent deposit-for-burn message.
    ///
    /// Authorization: the depositor of the original burn
    ReplaceDepositForBurn {
        original_message: Binary,
        original_attestation: Binary,
        /// 32 bytes, all-zero for anyone
        new_destination_caller: Binary,
        /// 32 bytes, nonzero
        new_mint_recipient: Binary,
    },

    // ========================================================================
    // Message Transmitter
    // ========================================================================
    /// Send an arbitrary message to a remote domain
    SendMessage {
        destination_domain: u32,
        /// 32-byte recipient on the destination domain
        recipient: Binary,
        message_body: Binary,
    },

    /// Send a message that only `destination_caller` may receive
    SendMessageWithCaller {
        destination_domain: u32,
        recipient: Binary,
        message_body: Binary,
        /// 32 bytes, nonzero
        destination_caller: Binary,
    },

    /// Deliver an attested message from a remote domain
    ReceiveMessage { message: Binary, attestation: Binary },

    /// Re-send a previously sent message with a new body and destination caller
    ///
    /// Authorization: the sender of the original message
    ReplaceMessage {
        original_message: Binary,
        original_attestation: Binary,
        new_message_body: Binary,
        /// 32 bytes, all-zero for anyone
        new_destination_caller: Binary,
    },

    // ========================================================================
    // Attester Management (AttesterManager)
    // ========================================================================
    EnableAttester { attester: String },

    DisableAttester { attester: String },

    UpdateSignatureThreshold { amount: u32 },

    // ========================================================================
    // Token Control (TokenController)
    // ========================================================================
    LinkTokenPair {
        remote_domain: u32,
        /// 32-byte remote token identifier
        remote_token: Binary,
        /// Local CW20 token contract
        local_token: String,
    },

    UnlinkTokenPair { remote_domain: u32, remote_token: Binary },

    SetMaxBurnAmountPerMessage { local_token: String, amount: Uint128 },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    AddRemoteTokenMessenger {
        domain_id: u32,
        /// 32-byte remote token messenger address
        address: Binary,
    },

    RemoveRemoteTokenMessenger { domain_id: u32 },

    UpdateMaxMessageBodySize { message_size: u64 },

    /// Propose a new owner (takes effect on `AcceptOwner`)
    UpdateOwner { new_owner: String },

    /// Accept ownership (pending owner only)
    AcceptOwner {},

    UpdateAttesterManager { new_attester_manager: String },

    UpdatePauser { new_pauser: String },

    UpdateTokenController { new_token_controller: String },

    // ========================================================================
    // Pausing (Pauser)
    // ========================================================================
    PauseBurningAndMinting {},

    UnpauseBurningAndMinting {},

    PauseSendingAndReceivingMessages {},

    UnpauseSendingAndReceivingMessages {},
}

/// CW20 receive hook messages
#[cw_serde]
pub enum ReceiveMsg {
    /// Burn the sent tokens and mint them to `mint_recipient` on `destination_domain`
    DepositForBurn {
        destination_domain: u32,
        /// 32-byte recipient on the destination domain
        mint_recipient: Binary,
    },
    /// As `DepositForBurn`, but only `destination_caller` may deliver the message
    DepositForBurnWithCaller {
        destination_domain: u32,
        mint_recipient: Binary,
        destination_caller: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RolesResponse)]
    Roles {},

    #[returns(AttesterResponse)]
    Attester { attester: String },

    #[returns(AttestersResponse)]
    Attesters {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PerMessageBurnLimitResponse)]
    PerMessageBurnLimit { denom: String },

    #[returns(PerMessageBurnLimitsResponse)]
    PerMessageBurnLimits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(PausedResponse)]
    BurningAndMintingPaused {},

    #[returns(PausedResponse)]
    SendingAndReceivingMessagesPaused {},

    #[returns(MaxMessageBodySizeResponse)]
    MaxMessageBodySize {},

    #[returns(NextAvailableNonceResponse)]
    NextAvailableNonce {},

    #[returns(SignatureThresholdResponse)]
    SignatureThreshold {},

    #[returns(TokenPairResponse)]
    TokenPair {
        remote_domain: u32,
        remote_token: Binary,
    },

    #[returns(TokenPairsResponse)]
    TokenPairs {
        /// Resume after this (remote_domain, remote_token)
        start_after: Option<(u32, Binary)>,
        limit: Option<u32>,
    },

    #[returns(UsedNonceResponse)]
    UsedNonce { source_domain: u32, nonce: u64 },

    #[returns(UsedNoncesResponse)]
    UsedNonces {
        start_after: Option<UsedNonce>,
        limit: Option<u32>,
    },

    #[returns(RemoteTokenMessengerResponse)]
    RemoteTokenMessenger { domain_id: u32 },

    #[returns(RemoteTokenMessengersResponse)]
    RemoteTokenMessengers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(LocalDomainResponse)]
    LocalDomain {},

    #[returns(VersionResponse)]
    LocalMessageVersion {},

    #[returns(VersionResponse)]
    BurnMessageVersion {},

    /// Full state snapshot in instantiate format
    #[returns(InstantiateMsg)]
    ExportGenesis {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct RolesResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
    pub attester_manager: Addr,
    pub pauser: Addr,
    pub token_controller: Addr,
}

#[cw_serde]
pub struct AttesterResponse {
    pub attester: String,
    pub enabled: bool,
}

#[cw_serde]
pub struct AttestersResponse {
    pub attesters: Vec<String>,
}

#[cw_serde]
pub struct PerMessageBurnLimitResponse {
    pub denom: String,
    pub amount: Option<Uint128>,
}

#[cw_serde]
pub struct PerMessageBurnLimitsResponse {
    pub burn_limits: Vec<PerMessageBurnLimit>,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct MaxMessageBodySizeResponse {
    pub amount: u64,
}

#[cw_serde]
pub struct NextAvailableNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct SignatureThresholdResponse {
    pub amount: u32,
}

#[cw_serde]
pub struct TokenPairResponse {
    pub pair: TokenPair,
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub token_pairs: Vec<TokenPair>,
}

#[cw_serde]
pub struct UsedNonceResponse {
    pub source_domain: u32,
    pub nonce: u64,
    pub used: bool,
}

#[cw_serde]
pub struct UsedNoncesResponse {
    pub used_nonces: Vec<UsedNonce>,
}

#[cw_serde]
pub struct RemoteTokenMessengerResponse {
    pub remote_token_messenger: RemoteTokenMessenger,
}

#[cw_serde]
pub struct RemoteTokenMessengersResponse {
    pub remote_token_messengers: Vec<RemoteTokenMessenger>,
}

#[cw_serde]
pub struct LocalDomainResponse {
    pub domain_id: u32,
}

#[cw_serde]
pub struct VersionResponse {
    pub version: u32,
}
