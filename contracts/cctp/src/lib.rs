//! CCTP Contract - Cross-Chain Transfer Protocol for CosmWasm
//!
//! Moves messages and tokens between domains using attested messages.
//!
//! # Outgoing Flow (Burn)
//! 1. User sends CW20 tokens to this contract with a `DepositForBurn` hook
//! 2. The contract burns them and emits a `message_sent` event carrying a
//!    burn message for the destination domain
//! 3. Attesters sign keccak256 of the message bytes off-chain
//!
//! # Incoming Flow (Mint)
//! 1. A relayer calls `ReceiveMessage` with the message and its attestation
//! 2. The attestation must carry `threshold` signatures from enabled
//!    attesters, ordered by signer address
//! 3. The (source domain, nonce) pair is consumed and, for burn messages
//!    from a trusted remote token messenger, the linked local token is minted
//!
//! # Security
//! - Replay protection per (source domain, nonce)
//! - Ascending signer order enforces distinct attesters
//! - Per-message burn limits
//! - Independent pause flags for messaging and for burning/minting

pub mod address_codec;
pub mod attestation;
pub mod auth;
pub mod bank;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod genesis;
pub mod hash;
pub mod message;
pub mod msg;
pub mod nonce;
mod query;
pub mod registry;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::keccak256;
pub use crate::message::{BurnMessage, Message};
