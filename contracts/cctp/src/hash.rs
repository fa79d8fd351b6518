//! Hashing and fixed-width identifier helpers
//!
//! Message digests, burn token identities and attester ordering keys are all
//! keccak256 based so that they agree with the EVM side of the bridge.

use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// A 32-byte cross-domain identifier (address, token, or caller).
pub type Bytes32 = [u8; 32];

/// The all-zero identifier, meaning "unrestricted" for destination callers.
pub const ZERO_BYTES32: Bytes32 = [0u8; 32];

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the 20-byte Ethereum-style address of an uncompressed secp256k1
/// public key (`0x04 || x || y`).
///
/// This is the key attestation signers are ordered by.
pub fn ethereum_address(uncompressed_pubkey: &[u8]) -> Result<[u8; 20], ContractError> {
    if uncompressed_pubkey.len() != 65 || uncompressed_pubkey[0] != 0x04 {
        return Err(ContractError::InvalidLength {
            field: "uncompressed public key".to_string(),
            expected: 65,
            actual: uncompressed_pubkey.len(),
        });
    }
    let hash = keccak256(&uncompressed_pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Identity of a local token on remote domains: keccak256 of its lowercased identifier.
pub fn burn_token_id(local_token: &str) -> Bytes32 {
    keccak256(local_token.to_lowercase().as_bytes())
}

/// Convert a `Binary` into a fixed 32-byte identifier.
pub fn to_bytes32(value: &Binary, field: &str) -> Result<Bytes32, ContractError> {
    value
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidLength {
            field: field.to_string(),
            expected: 32,
            actual: value.len(),
        })
}

/// Left-pad a slice of at most 32 bytes into a 32-byte identifier.
pub fn left_pad_bytes32(value: &[u8], field: &str) -> Result<Bytes32, ContractError> {
    if value.len() > 32 {
        return Err(ContractError::InvalidLength {
            field: field.to_string(),
            expected: 32,
            actual: value.len(),
        });
    }
    let mut out = ZERO_BYTES32;
    out[32 - value.len()..].copy_from_slice(value);
    Ok(out)
}

pub fn is_zero(value: &Bytes32) -> bool {
    value.iter().all(|b| *b == 0)
}

/// Convert bytes32 to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &Bytes32) -> String {
    format!("0x{}", hex::encode(bytes))
}
