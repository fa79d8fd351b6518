//! Attestation verification
//!
//! An attestation is a concatenation of 65-byte `r || s || v` secp256k1
//! signatures over keccak256(message). Signers must appear in strictly
//! increasing order of their Ethereum-style address. That ordering is what
//! rules out a signer being counted twice, so no separate dedup pass runs.

use std::collections::BTreeSet;

use cosmwasm_std::{Api, Storage};

use crate::error::ContractError;
use crate::hash::{ethereum_address, keccak256};
use crate::state::{ATTESTERS, SIGNATURE_THRESHOLD};

/// Length of a single signature record
pub const SIGNATURE_LENGTH: usize = 65;

/// Normalise an attester registration to lowercase hex without `0x`.
///
/// Attesters are uncompressed secp256k1 public keys (65 bytes, `0x04` prefix).
pub fn normalize_attester(attester: &str) -> Result<String, ContractError> {
    let trimmed = attester.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(stripped).map_err(|e| ContractError::InvalidAttester {
        reason: format!("{} is not hex: {}", attester, e),
    })?;
    if bytes.len() != 65 || bytes[0] != 0x04 {
        return Err(ContractError::InvalidAttester {
            reason: format!(
                "expected a 65-byte uncompressed public key, got {} bytes",
                bytes.len()
            ),
        });
    }
    Ok(hex::encode(bytes))
}

/// Verify `attestation` over `message` against the attester set and threshold.
///
/// An empty attestation or one whose length is not a multiple of 65 bytes is
/// `MalformedAttestation`; well-formed but fewer records than the threshold is
/// `ThresholdNotMet`.
pub fn verify_attestation_signatures(
    api: &dyn Api,
    message: &[u8],
    attestation: &[u8],
    attesters: &BTreeSet<String>,
    signature_threshold: u32,
) -> Result<(), ContractError> {
    if signature_threshold == 0 {
        return Err(ContractError::InvalidSignatureThreshold {
            reason: "threshold must be at least 1".to_string(),
        });
    }
    if attestation.is_empty() || attestation.len() % SIGNATURE_LENGTH != 0 {
        return Err(ContractError::MalformedAttestation {
            reason: format!(
                "length {} is not a nonzero multiple of {}",
                attestation.len(),
                SIGNATURE_LENGTH
            ),
        });
    }

    let provided = attestation.len() / SIGNATURE_LENGTH;
    if provided < signature_threshold as usize {
        return Err(ContractError::ThresholdNotMet {
            provided: provided as u32,
            threshold: signature_threshold,
        });
    }

    let digest = keccak256(message);
    let mut latest_signer: Option<[u8; 20]> = None;

    for (index, record) in attestation.chunks_exact(SIGNATURE_LENGTH).enumerate() {
        let recovery_param = match record[64] {
            0 | 27 => 0,
            1 | 28 => 1,
            _ => return Err(ContractError::InvalidSignature { index }),
        };
        let pubkey = api
            .secp256k1_recover_pubkey(&digest, &record[..64], recovery_param)
            .map_err(|_| ContractError::InvalidSignature { index })?;

        let signer = ethereum_address(&pubkey)?;
        if let Some(previous) = latest_signer {
            if signer <= previous {
                return Err(ContractError::DuplicateOrUnorderedSigner { index });
            }
        }

        let signer_key = hex::encode(&pubkey);
        if !attesters.contains(&signer_key) {
            return Err(ContractError::UnauthorizedAttester { signer: signer_key });
        }

        latest_signer = Some(signer);
    }

    Ok(())
}

/// Verify an attestation against the attester set and threshold in storage.
pub fn verify_attestation(
    storage: &dyn Storage,
    api: &dyn Api,
    message: &[u8],
    attestation: &[u8],
) -> Result<(), ContractError> {
    let attesters = crate::state::all_attesters(storage)?
        .into_iter()
        .collect::<BTreeSet<_>>();
    let threshold = SIGNATURE_THRESHOLD.load(storage)?;
    verify_attestation_signatures(api, message, attestation, &attesters, threshold)
}

pub fn is_attester(storage: &dyn Storage, attester: &str) -> bool {
    ATTESTERS.has(storage, attester)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use k256::ecdsa::SigningKey;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    struct TestAttester {
        key: SigningKey,
        pubkey_hex: String,
        address: [u8; 20],
    }

    fn attester(seed: u8) -> TestAttester {
        let key = SigningKey::from_slice(&[seed; 32]).unwrap();
        let pubkey = key.verifying_key().to_encoded_point(false).as_bytes().to_vec();
        TestAttester {
            pubkey_hex: hex::encode(&pubkey),
            address: ethereum_address(&pubkey).unwrap(),
            key,
        }
    }

    /// Three attesters sorted by address ascending
    fn sorted_attesters() -> Vec<TestAttester> {
        let mut attesters = vec![attester(1), attester(2), attester(3)];
        attesters.sort_by(|a, b| a.address.cmp(&b.address));
        attesters
    }

    fn sign(attester: &TestAttester, message: &[u8]) -> Vec<u8> {
        let digest = keccak256(message);
        let (signature, recovery_id) = attester.key.sign_prehash_recoverable(&digest).unwrap();
        let mut out = signature.to_bytes().to_vec();
        out.push(recovery_id.to_byte() + 27);
        out
    }

    fn attestation(signers: &[&TestAttester], message: &[u8]) -> Vec<u8> {
        signers.iter().flat_map(|a| sign(a, message)).collect()
    }

    fn set_of(attesters: &[TestAttester]) -> BTreeSet<String> {
        attesters.iter().map(|a| a.pubkey_hex.clone()).collect()
    }

    #[test]
    fn test_threshold_of_two_in_order() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let message = b"hello world";
        let sig = attestation(&[&attesters[0], &attesters[1]], message);

        verify_attestation_signatures(&api, message, &sig, &set_of(&attesters), 2).unwrap();
    }

    #[test]
    fn test_reordered_signers_rejected() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let message = b"hello world";
        let sig = attestation(&[&attesters[1], &attesters[0]], message);

        let err = verify_attestation_signatures(&api, message, &sig, &set_of(&attesters), 2)
            .unwrap_err();
        assert_eq!(err, ContractError::DuplicateOrUnorderedSigner { index: 1 });
    }

    #[test]
    fn test_duplicate_signer_rejected() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let message = b"hello world";
        let sig = attestation(&[&attesters[0], &attesters[0]], message);

        let err = verify_attestation_signatures(&api, message, &sig, &set_of(&attesters), 2)
            .unwrap_err();
        assert_eq!(err, ContractError::DuplicateOrUnorderedSigner { index: 1 });
    }

    #[test]
    fn test_too_few_signatures() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let message = b"hello world";
        let sig = attestation(&[&attesters[0]], message);

        let err = verify_attestation_signatures(&api, message, &sig, &set_of(&attesters), 2)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::ThresholdNotMet {
                provided: 1,
                threshold: 2
            }
        );
    }

    #[test]
    fn test_empty_or_truncated_attestation_is_malformed() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let message = b"hello world";
        let sig = attestation(&[&attesters[0]], message);

        for bytes in [&[][..], &sig[..64]] {
            let err = verify_attestation_signatures(&api, message, bytes, &set_of(&attesters), 2)
                .unwrap_err();
            assert!(matches!(err, ContractError::MalformedAttestation { .. }));
        }
    }

    #[test]
    fn test_unknown_signer_rejected() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let outsider = attester(9);
        let message = b"hello world";
        let sig = attestation(&[&outsider], message);

        let err = verify_attestation_signatures(&api, message, &sig, &set_of(&attesters), 1)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::UnauthorizedAttester {
                signer: outsider.pubkey_hex.clone()
            }
        );
    }

    #[test]
    fn test_signature_over_other_message_is_not_an_attester() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let sig = attestation(&[&attesters[0]], b"original");

        let err = verify_attestation_signatures(&api, b"tampered", &sig, &set_of(&attesters), 1)
            .unwrap_err();
        assert!(matches!(err, ContractError::UnauthorizedAttester { .. }));
    }

    #[test]
    fn test_malformed_length() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let mut sig = attestation(&[&attesters[0]], b"msg");
        sig.pop();

        assert!(matches!(
            verify_attestation_signatures(&api, b"msg", &sig, &set_of(&attesters), 1),
            Err(ContractError::MalformedAttestation { .. })
        ));
        assert!(matches!(
            verify_attestation_signatures(&api, b"msg", &[], &set_of(&attesters), 1),
            Err(ContractError::MalformedAttestation { .. })
        ));
    }

    #[test]
    fn test_bad_recovery_id() {
        let api = MockApi::default();
        let attesters = sorted_attesters();
        let mut sig = attestation(&[&attesters[0]], b"msg");
        sig[64] = 5;

        assert_eq!(
            verify_attestation_signatures(&api, b"msg", &sig, &set_of(&attesters), 1)
                .unwrap_err(),
            ContractError::InvalidSignature { index: 0 }
        );
    }

    #[test]
    fn test_normalize_attester() {
        let a = attester(1);
        let upper = format!("0x{}", a.pubkey_hex.to_uppercase());
        assert_eq!(normalize_attester(&upper).unwrap(), a.pubkey_hex);
        assert!(normalize_attester("0x1234").is_err());
        assert!(normalize_attester("zz").is_err());
    }
}
