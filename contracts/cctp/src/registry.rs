//! Domain and token registry
//!
//! Keyed storage for remote token messengers, token pairs and burn limits.
//! Uniqueness and nonzero identifiers are enforced here; role checks
//! happen before these are reached.

use cosmwasm_std::{Binary, Storage, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, is_zero, Bytes32};
use crate::state::{TokenPair, PER_MESSAGE_BURN_LIMITS, REMOTE_TOKEN_MESSENGERS, TOKEN_PAIRS};

// ============================================================================
// Remote Token Messengers
// ============================================================================

/// Register the trusted sender for a remote domain.
///
/// A domain holds one trusted sender; replacing it requires removing the
/// existing entry first.
pub fn add_remote_token_messenger(
    storage: &mut dyn Storage,
    domain: u32,
    address: &Bytes32,
) -> Result<(), ContractError> {
    if is_zero(address) {
        return Err(ContractError::InvalidAddress {
            reason: "remote token messenger must be nonzero".to_string(),
        });
    }
    if REMOTE_TOKEN_MESSENGERS.has(storage, domain) {
        return Err(ContractError::DomainAlreadyRegistered { domain });
    }
    REMOTE_TOKEN_MESSENGERS.save(storage, domain, &Binary::from(address.to_vec()))?;
    Ok(())
}

/// Remove the trusted sender of a remote domain, returning it.
pub fn remove_remote_token_messenger(
    storage: &mut dyn Storage,
    domain: u32,
) -> Result<Binary, ContractError> {
    let existing = remote_token_messenger(storage, domain)?;
    REMOTE_TOKEN_MESSENGERS.remove(storage, domain);
    Ok(Binary::from(existing.to_vec()))
}

pub fn remote_token_messenger(
    storage: &dyn Storage,
    domain: u32,
) -> Result<Bytes32, ContractError> {
    let address = REMOTE_TOKEN_MESSENGERS
        .may_load(storage, domain)?
        .ok_or(ContractError::DomainNotFound { domain })?;
    crate::hash::to_bytes32(&address, "remote token messenger")
}

// ============================================================================
// Token Pairs
// ============================================================================

pub fn link_token_pair(
    storage: &mut dyn Storage,
    remote_domain: u32,
    remote_token: &Bytes32,
    local_token: &str,
) -> Result<TokenPair, ContractError> {
    let key = (remote_domain, remote_token.as_slice());
    if TOKEN_PAIRS.has(storage, key) {
        return Err(ContractError::TokenPairAlreadyLinked {
            remote_domain,
            remote_token: bytes32_to_hex(remote_token),
        });
    }

    let pair = TokenPair {
        remote_domain,
        remote_token: Binary::from(remote_token.to_vec()),
        local_token: local_token.to_lowercase(),
    };
    TOKEN_PAIRS.save(storage, key, &pair)?;
    Ok(pair)
}

pub fn unlink_token_pair(
    storage: &mut dyn Storage,
    remote_domain: u32,
    remote_token: &Bytes32,
) -> Result<TokenPair, ContractError> {
    let pair = token_pair(storage, remote_domain, remote_token)?;
    TOKEN_PAIRS.remove(storage, (remote_domain, remote_token.as_slice()));
    Ok(pair)
}

pub fn token_pair(
    storage: &dyn Storage,
    remote_domain: u32,
    remote_token: &Bytes32,
) -> Result<TokenPair, ContractError> {
    TOKEN_PAIRS
        .may_load(storage, (remote_domain, remote_token.as_slice()))?
        .ok_or_else(|| ContractError::TokenPairNotFound {
            remote_domain,
            remote_token: bytes32_to_hex(remote_token),
        })
}

// ============================================================================
// Burn Limits
// ============================================================================

pub fn set_per_message_burn_limit(
    storage: &mut dyn Storage,
    local_token: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    PER_MESSAGE_BURN_LIMITS.save(storage, &local_token.to_lowercase(), &amount)?;
    Ok(())
}

pub fn per_message_burn_limit(
    storage: &dyn Storage,
    local_token: &str,
) -> Result<Option<Uint128>, ContractError> {
    Ok(PER_MESSAGE_BURN_LIMITS.may_load(storage, &local_token.to_lowercase())?)
}

/// Check a deposit against the burn limit of its token.
///
/// Tokens without a configured limit cannot be burned.
pub fn check_burn_limit(
    storage: &dyn Storage,
    local_token: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    let limit = per_message_burn_limit(storage, local_token)?.ok_or_else(|| {
        ContractError::BurnTokenNotSupported {
            token: local_token.to_string(),
        }
    })?;
    if amount > limit {
        return Err(ContractError::BurnLimitExceeded { amount, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_remote_token_messenger_rejects_duplicate() {
        let mut storage = MockStorage::new();
        add_remote_token_messenger(&mut storage, 0, &[1u8; 32]).unwrap();

        let err = add_remote_token_messenger(&mut storage, 0, &[2u8; 32]).unwrap_err();
        assert_eq!(err, ContractError::DomainAlreadyRegistered { domain: 0 });
        assert_eq!(remote_token_messenger(&storage, 0).unwrap(), [1u8; 32]);
    }

    #[test]
    fn test_remote_token_messenger_replace_via_remove() {
        let mut storage = MockStorage::new();
        add_remote_token_messenger(&mut storage, 0, &[1u8; 32]).unwrap();

        let removed = remove_remote_token_messenger(&mut storage, 0).unwrap();
        assert_eq!(removed.as_slice(), &[1u8; 32]);

        add_remote_token_messenger(&mut storage, 0, &[2u8; 32]).unwrap();
        assert_eq!(remote_token_messenger(&storage, 0).unwrap(), [2u8; 32]);
    }

    #[test]
    fn test_remove_unknown_domain() {
        let mut storage = MockStorage::new();
        assert_eq!(
            remove_remote_token_messenger(&mut storage, 9).unwrap_err(),
            ContractError::DomainNotFound { domain: 9 }
        );
    }

    #[test]
    fn test_token_pair_lifecycle() {
        let mut storage = MockStorage::new();
        let remote = [0xabu8; 32];

        let pair = link_token_pair(&mut storage, 0, &remote, "Token1").unwrap();
        assert_eq!(pair.local_token, "token1");
        assert!(matches!(
            link_token_pair(&mut storage, 0, &remote, "other").unwrap_err(),
            ContractError::TokenPairAlreadyLinked { remote_domain: 0, .. }
        ));

        // same token on a different domain is a separate pair
        link_token_pair(&mut storage, 1, &remote, "token1").unwrap();

        assert_eq!(token_pair(&storage, 0, &remote).unwrap(), pair);
        unlink_token_pair(&mut storage, 0, &remote).unwrap();
        assert!(matches!(
            token_pair(&storage, 0, &remote).unwrap_err(),
            ContractError::TokenPairNotFound { .. }
        ));
        assert!(matches!(
            unlink_token_pair(&mut storage, 0, &remote).unwrap_err(),
            ContractError::TokenPairNotFound { .. }
        ));
    }

    #[test]
    fn test_burn_limit() {
        let mut storage = MockStorage::new();
        assert!(matches!(
            check_burn_limit(&storage, "uusdc", Uint128::one()).unwrap_err(),
            ContractError::BurnTokenNotSupported { .. }
        ));

        set_per_message_burn_limit(&mut storage, "UUSDC", Uint128::new(100)).unwrap();
        check_burn_limit(&storage, "uusdc", Uint128::new(100)).unwrap();
        assert_eq!(
            check_burn_limit(&storage, "uusdc", Uint128::new(101)).unwrap_err(),
            ContractError::BurnLimitExceeded {
                amount: Uint128::new(101),
                limit: Uint128::new(100)
            }
        );
    }
}
