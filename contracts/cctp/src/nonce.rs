//! Nonce ledger: outbound nonce allocation and inbound replay protection.

use cosmwasm_std::Storage;

use crate::error::ContractError;
use crate::state::{NEXT_AVAILABLE_NONCE, USED_NONCES};

/// Return the next outbound nonce and advance the counter.
pub fn allocate_outbound_nonce(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let nonce = NEXT_AVAILABLE_NONCE.may_load(storage)?.unwrap_or_default();
    let next = nonce.checked_add(1).ok_or(ContractError::NonceOverflow)?;
    NEXT_AVAILABLE_NONCE.save(storage, &next)?;
    Ok(nonce)
}

/// Record `(source_domain, nonce)` as consumed, failing if it already was.
pub fn consume_inbound_nonce(
    storage: &mut dyn Storage,
    source_domain: u32,
    nonce: u64,
) -> Result<(), ContractError> {
    USED_NONCES.update(storage, (source_domain, nonce), |used| match used {
        Some(_) => Err(ContractError::NonceAlreadyUsed {
            source_domain,
            nonce,
        }),
        None => Ok(true),
    })?;
    Ok(())
}

pub fn is_nonce_used(storage: &dyn Storage, source_domain: u32, nonce: u64) -> bool {
    USED_NONCES.has(storage, (source_domain, nonce))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_allocate_is_monotonic() {
        let mut storage = MockStorage::new();
        let mut previous = None;
        for expected in 0..5u64 {
            let nonce = allocate_outbound_nonce(&mut storage).unwrap();
            assert_eq!(nonce, expected);
            if let Some(prev) = previous {
                assert!(nonce > prev);
            }
            previous = Some(nonce);
        }
        assert_eq!(NEXT_AVAILABLE_NONCE.load(&storage).unwrap(), 5);
    }

    #[test]
    fn test_allocate_resumes_from_stored_counter() {
        let mut storage = MockStorage::new();
        NEXT_AVAILABLE_NONCE.save(&mut storage, &41).unwrap();
        assert_eq!(allocate_outbound_nonce(&mut storage).unwrap(), 41);
        assert_eq!(allocate_outbound_nonce(&mut storage).unwrap(), 42);
    }

    #[test]
    fn test_allocate_overflow() {
        let mut storage = MockStorage::new();
        NEXT_AVAILABLE_NONCE.save(&mut storage, &u64::MAX).unwrap();
        assert_eq!(
            allocate_outbound_nonce(&mut storage).unwrap_err(),
            ContractError::NonceOverflow
        );
    }

    #[test]
    fn test_consume_inbound_once() {
        let mut storage = MockStorage::new();
        consume_inbound_nonce(&mut storage, 0, 7).unwrap();
        assert!(is_nonce_used(&storage, 0, 7));

        let err = consume_inbound_nonce(&mut storage, 0, 7).unwrap_err();
        assert_eq!(
            err,
            ContractError::NonceAlreadyUsed {
                source_domain: 0,
                nonce: 7
            }
        );
    }

    #[test]
    fn test_consume_inbound_is_per_domain() {
        let mut storage = MockStorage::new();
        consume_inbound_nonce(&mut storage, 0, 7).unwrap();
        consume_inbound_nonce(&mut storage, 1, 7).unwrap();
        assert!(!is_nonce_used(&storage, 2, 7));
    }
}
