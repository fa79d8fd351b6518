//! Wire format of cross-domain messages
//!
//! # Message Layout (116-byte header + body)
//! - Bytes 0-3:     version (u32, big-endian)
//! - Bytes 4-7:     source domain (u32)
//! - Bytes 8-11:    destination domain (u32)
//! - Bytes 12-19:   nonce (u64)
//! - Bytes 20-51:   sender (bytes32)
//! - Bytes 52-83:   recipient (bytes32)
//! - Bytes 84-115:  destination caller (bytes32, zero = anyone)
//! - Bytes 116-:    message body
//!
//! # Burn Message Layout (132 bytes, carried as a message body)
//! - Bytes 0-3:     version (u32)
//! - Bytes 4-35:    burn token (bytes32)
//! - Bytes 36-67:   mint recipient (bytes32)
//! - Bytes 68-99:   amount (uint256, big-endian)
//! - Bytes 100-131: message sender (bytes32)

use cosmwasm_std::Uint256;

use crate::error::ContractError;
use crate::hash::Bytes32;

/// Version of the message envelope handled by this contract.
pub const MESSAGE_VERSION: u32 = 0;

/// Version of the burn message body handled by this contract.
pub const BURN_MESSAGE_VERSION: u32 = 0;

const VERSION_INDEX: usize = 0;
const SOURCE_DOMAIN_INDEX: usize = 4;
const DESTINATION_DOMAIN_INDEX: usize = 8;
const NONCE_INDEX: usize = 12;
const SENDER_INDEX: usize = 20;
const RECIPIENT_INDEX: usize = 52;
const DESTINATION_CALLER_INDEX: usize = 84;
const MESSAGE_BODY_INDEX: usize = 116;

/// Fixed header size of a [`Message`].
pub const MESSAGE_HEADER_LEN: usize = MESSAGE_BODY_INDEX;

const BURN_VERSION_INDEX: usize = 0;
const BURN_TOKEN_INDEX: usize = 4;
const MINT_RECIPIENT_INDEX: usize = 36;
const AMOUNT_INDEX: usize = 68;
const MESSAGE_SENDER_INDEX: usize = 100;

/// Exact size of a [`BurnMessage`].
pub const BURN_MESSAGE_LEN: usize = 132;

/// Generic cross-domain message envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub version: u32,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub nonce: u64,
    pub sender: Bytes32,
    pub recipient: Bytes32,
    pub destination_caller: Bytes32,
    pub message_body: Vec<u8>,
}

impl Message {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MESSAGE_HEADER_LEN + self.message_body.len());
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&self.source_domain.to_be_bytes());
        out.extend_from_slice(&self.destination_domain.to_be_bytes());
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.recipient);
        out.extend_from_slice(&self.destination_caller);
        out.extend_from_slice(&self.message_body);
        out
    }

    /// Parse a message from wire bytes. Everything past the header is the body.
    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() < MESSAGE_HEADER_LEN {
            return Err(ContractError::MalformedMessage {
                reason: format!(
                    "message is {} bytes, header requires {}",
                    bytes.len(),
                    MESSAGE_HEADER_LEN
                ),
            });
        }

        Ok(Self {
            version: read_u32(bytes, VERSION_INDEX),
            source_domain: read_u32(bytes, SOURCE_DOMAIN_INDEX),
            destination_domain: read_u32(bytes, DESTINATION_DOMAIN_INDEX),
            nonce: read_u64(bytes, NONCE_INDEX),
            sender: read_bytes32(bytes, SENDER_INDEX),
            recipient: read_bytes32(bytes, RECIPIENT_INDEX),
            destination_caller: read_bytes32(bytes, DESTINATION_CALLER_INDEX),
            message_body: bytes[MESSAGE_BODY_INDEX..].to_vec(),
        })
    }
}

/// Token bridging payload carried in [`Message::message_body`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnMessage {
    pub version: u32,
    pub burn_token: Bytes32,
    pub mint_recipient: Bytes32,
    pub amount: Uint256,
    pub message_sender: Bytes32,
}

impl BurnMessage {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BURN_MESSAGE_LEN);
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&self.burn_token);
        out.extend_from_slice(&self.mint_recipient);
        out.extend_from_slice(&self.amount.to_be_bytes());
        out.extend_from_slice(&self.message_sender);
        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() != BURN_MESSAGE_LEN {
            return Err(ContractError::MalformedMessage {
                reason: format!(
                    "burn message is {} bytes, expected {}",
                    bytes.len(),
                    BURN_MESSAGE_LEN
                ),
            });
        }

        Ok(Self {
            version: read_u32(bytes, BURN_VERSION_INDEX),
            burn_token: read_bytes32(bytes, BURN_TOKEN_INDEX),
            mint_recipient: read_bytes32(bytes, MINT_RECIPIENT_INDEX),
            amount: Uint256::from_be_bytes(read_bytes32(bytes, AMOUNT_INDEX)),
            message_sender: read_bytes32(bytes, MESSAGE_SENDER_INDEX),
        })
    }
}

// Callers check the total length before reading fixed offsets.

fn read_u32(bytes: &[u8], index: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[index..index + 4]);
    u32::from_be_bytes(buf)
}

fn read_u64(bytes: &[u8], index: usize) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[index..index + 8]);
    u64::from_be_bytes(buf)
}

fn read_bytes32(bytes: &[u8], index: usize) -> Bytes32 {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes[index..index + 32]);
    buf
}
