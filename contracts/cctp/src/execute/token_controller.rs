//! Token control handlers (TokenController).
//!
//! This module handles:
//! - Token pair link/unlink
//! - Per-message burn limits

use cosmwasm_std::{Binary, DepsMut, Event, Response, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, to_bytes32};
use crate::registry;

pub fn execute_link_token_pair(
    deps: DepsMut,
    remote_domain: u32,
    remote_token: Binary,
    local_token: String,
) -> Result<Response, ContractError> {
    let remote_token = to_bytes32(&remote_token, "remote_token")?;
    let local_token = deps.api.addr_validate(&local_token)?;
    let pair = registry::link_token_pair(
        deps.storage,
        remote_domain,
        &remote_token,
        local_token.as_str(),
    )?;

    Ok(Response::new()
        .add_attribute("method", "link_token_pair")
        .add_event(
            Event::new("token_pair_linked")
                .add_attribute("local_token", pair.local_token)
                .add_attribute("remote_domain", remote_domain.to_string())
                .add_attribute("remote_token", bytes32_to_hex(&remote_token)),
        ))
}

pub fn execute_unlink_token_pair(
    deps: DepsMut,
    remote_domain: u32,
    remote_token: Binary,
) -> Result<Response, ContractError> {
    let remote_token = to_bytes32(&remote_token, "remote_token")?;
    let pair = registry::unlink_token_pair(deps.storage, remote_domain, &remote_token)?;

    Ok(Response::new()
        .add_attribute("method", "unlink_token_pair")
        .add_event(
            Event::new("token_pair_unlinked")
                .add_attribute("local_token", pair.local_token)
                .add_attribute("remote_domain", remote_domain.to_string())
                .add_attribute("remote_token", bytes32_to_hex(&remote_token)),
        ))
}

pub fn execute_set_max_burn_amount_per_message(
    deps: DepsMut,
    local_token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let local_token = deps.api.addr_validate(&local_token)?;
    registry::set_per_message_burn_limit(deps.storage, local_token.as_str(), amount)?;

    Ok(Response::new()
        .add_attribute("method", "set_max_burn_amount_per_message")
        .add_event(
            Event::new("set_burn_limit_per_message")
                .add_attribute("token", local_token.as_str())
                .add_attribute("burn_limit_per_message", amount.to_string()),
        ))
}
