//! Local Address <-> 32-byte Identifier Encoding
//!
//! Cross-domain messages carry every address as 32 bytes. A bech32 account
//! address is represented by its raw data bytes, left-padded with zeros:
//!
//! ```text
//! | Zero padding (12 bytes) | Raw Address (20 bytes) |
//! ```
//!
//! 32-byte addresses (e.g. module or contract accounts) fill the whole word.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::ContractError;
use crate::hash::{left_pad_bytes32, Bytes32};

/// Width of a standard account address.
const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Decode a bech32 address into its hrp and raw data bytes.
pub fn decode_bech32_address(addr: &str) -> Result<(String, Vec<u8>), ContractError> {
    let (hrp, data, variant) =
        bech32::decode(addr).map_err(|e| ContractError::InvalidAddress {
            reason: format!("invalid bech32 address {}: {}", addr, e),
        })?;
    if variant != Variant::Bech32 {
        return Err(ContractError::InvalidAddress {
            reason: format!("{} is not bech32 encoded", addr),
        });
    }
    let bytes = Vec::<u8>::from_base32(&data).map_err(|e| ContractError::InvalidAddress {
        reason: format!("invalid bech32 data in {}: {}", addr, e),
    })?;
    Ok((hrp, bytes))
}

/// Encode raw address bytes as bech32 with the given human readable part.
pub fn encode_bech32_address(bytes: &[u8], hrp: &str) -> Result<String, ContractError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32).map_err(|e| {
        ContractError::InvalidAddress {
            reason: format!("failed to encode bech32 address: {}", e),
        }
    })
}

/// Convert a local bech32 address to its padded 32-byte identifier.
pub fn padded_address(addr: &str) -> Result<Bytes32, ContractError> {
    let (_, bytes) = decode_bech32_address(addr)?;
    if bytes.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: format!("{} has no address bytes", addr),
        });
    }
    left_pad_bytes32(&bytes, "address")
}

/// Convert a padded 32-byte identifier back into a local bech32 address.
///
/// Identifiers whose first 12 bytes are zero are treated as 20-byte account
/// addresses, everything else as a full 32-byte address.
pub fn address_from_padded(padded: &Bytes32, hrp: &str) -> Result<String, ContractError> {
    let split = 32 - ACCOUNT_ADDRESS_LEN;
    if padded[..split].iter().all(|b| *b == 0) {
        encode_bech32_address(&padded[split..], hrp)
    } else {
        encode_bech32_address(padded, hrp)
    }
}
