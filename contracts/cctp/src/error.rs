//! Error types for the CCTP contract
//!
//! Every failure is surfaced to the caller as-is. Because the contract runs
//! inside a single transaction, returning any of these reverts all state
//! written by the operation.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the {role}")]
    Unauthorized { role: String },

    #[error("No pending owner to accept")]
    NoPendingOwner,

    // ========================================================================
    // Pause Errors
    // ========================================================================

    #[error("{operation} is paused")]
    Paused { operation: String },

    // ========================================================================
    // Message Errors
    // ========================================================================

    #[error("Malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("Invalid message version: expected {expected}, got {actual}")]
    InvalidMessageVersion { expected: u32, actual: u32 },

    #[error("Message body too large: {size} bytes exceeds max {max}")]
    MessageBodyTooLarge { size: u64, max: u64 },

    #[error("Invalid destination domain: expected {expected}, got {actual}")]
    InvalidDestinationDomain { expected: u32, actual: u32 },

    #[error("Invalid source domain: expected {expected}, got {actual}")]
    InvalidSourceDomain { expected: u32, actual: u32 },

    #[error("Destination caller {reason}")]
    InvalidDestinationCaller { reason: String },

    #[error("Recipient must be nonzero")]
    InvalidRecipient,

    // ========================================================================
    // Attestation Errors
    // ========================================================================

    #[error("Malformed attestation: {reason}")]
    MalformedAttestation { reason: String },

    #[error("Invalid signature at index {index}")]
    InvalidSignature { index: usize },

    #[error("Signer at index {index} is a duplicate or out of order")]
    DuplicateOrUnorderedSigner { index: usize },

    #[error("Signer {signer} is not an enabled attester")]
    UnauthorizedAttester { signer: String },

    #[error("Threshold not met: {provided} signatures, {threshold} required")]
    ThresholdNotMet { provided: u32, threshold: u32 },

    #[error("Invalid signature threshold: {reason}")]
    InvalidSignatureThreshold { reason: String },

    #[error("Invalid attester: {reason}")]
    InvalidAttester { reason: String },

    #[error("Attester already enabled: {attester}")]
    AttesterAlreadyEnabled { attester: String },

    #[error("Attester not found: {attester}")]
    AttesterNotFound { attester: String },

    // ========================================================================
    // Nonce Errors
    // ========================================================================

    #[error("Nonce already used: source domain {source_domain}, nonce {nonce}")]
    NonceAlreadyUsed { source_domain: u32, nonce: u64 },

    #[error("Nonce overflow")]
    NonceOverflow,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Remote token messenger already registered for domain {domain}")]
    DomainAlreadyRegistered { domain: u32 },

    #[error("No remote token messenger registered for domain {domain}")]
    DomainNotFound { domain: u32 },

    #[error("Token pair already linked: domain {remote_domain}, token {remote_token}")]
    TokenPairAlreadyLinked {
        remote_domain: u32,
        remote_token: String,
    },

    #[error("Token pair not found: domain {remote_domain}, token {remote_token}")]
    TokenPairNotFound {
        remote_domain: u32,
        remote_token: String,
    },

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Burn token not supported: {token}")]
    BurnTokenNotSupported { token: String },

    #[error("Burn limit exceeded: {amount} exceeds per-message limit {limit}")]
    BurnLimitExceeded { amount: Uint128, limit: Uint128 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Encoding Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid length for {field}: expected {expected}, got {actual}")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    // ========================================================================
    // Genesis Errors
    // ========================================================================

    #[error("Invalid genesis: {reason}")]
    InvalidGenesis { reason: String },
}
