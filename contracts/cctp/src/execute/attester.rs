//! Attester management handlers (AttesterManager).

use cosmwasm_std::{DepsMut, Event, Order, Response};

use crate::attestation::{is_attester, normalize_attester};
use crate::error::ContractError;
use crate::state::{ATTESTERS, SIGNATURE_THRESHOLD};

pub fn execute_enable_attester(deps: DepsMut, attester: String) -> Result<Response, ContractError> {
    let attester = normalize_attester(&attester)?;
    if is_attester(deps.storage, &attester) {
        return Err(ContractError::AttesterAlreadyEnabled { attester });
    }
    ATTESTERS.save(deps.storage, &attester, &true)?;

    Ok(Response::new()
        .add_attribute("method", "enable_attester")
        .add_event(Event::new("attester_enabled").add_attribute("attester", attester)))
}

/// Disable an attester. Not blocked by the current threshold; attestations
/// that can no longer reach it simply fail verification.
pub fn execute_disable_attester(
    deps: DepsMut,
    attester: String,
) -> Result<Response, ContractError> {
    let attester = normalize_attester(&attester)?;
    if !is_attester(deps.storage, &attester) {
        return Err(ContractError::AttesterNotFound { attester });
    }
    ATTESTERS.remove(deps.storage, &attester);

    Ok(Response::new()
        .add_attribute("method", "disable_attester")
        .add_event(Event::new("attester_disabled").add_attribute("attester", attester)))
}

pub fn execute_update_signature_threshold(
    deps: DepsMut,
    amount: u32,
) -> Result<Response, ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidSignatureThreshold {
            reason: "threshold must be at least 1".to_string(),
        });
    }

    let current = SIGNATURE_THRESHOLD.load(deps.storage)?;
    if amount == current {
        return Err(ContractError::InvalidSignatureThreshold {
            reason: format!("threshold is already {}", amount),
        });
    }

    let enabled = ATTESTERS
        .keys(deps.storage, None, None, Order::Ascending)
        .count();
    if amount as usize > enabled {
        return Err(ContractError::InvalidSignatureThreshold {
            reason: format!("{} exceeds the {} enabled attesters", amount, enabled),
        });
    }

    SIGNATURE_THRESHOLD.save(deps.storage, &amount)?;

    Ok(Response::new()
        .add_attribute("method", "update_signature_threshold")
        .add_event(
            Event::new("signature_threshold_updated")
                .add_attribute("old_signature_threshold", current.to_string())
                .add_attribute("new_signature_threshold", amount.to_string()),
        ))
}
