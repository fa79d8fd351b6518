//! Owner operations handlers.
//!
//! This module handles:
//! - Remote token messenger registration
//! - Max message body size
//! - Ownership transfer (propose/accept)
//! - Attester manager, pauser and token controller updates

use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, to_bytes32};
use crate::registry;
use crate::state::{MAX_MESSAGE_BODY_SIZE, ROLES};

// ============================================================================
// Remote Token Messengers
// ============================================================================

pub fn execute_add_remote_token_messenger(
    deps: DepsMut,
    domain_id: u32,
    address: Binary,
) -> Result<Response, ContractError> {
    let address = to_bytes32(&address, "address")?;
    registry::add_remote_token_messenger(deps.storage, domain_id, &address)?;

    Ok(Response::new()
        .add_attribute("method", "add_remote_token_messenger")
        .add_event(
            Event::new("remote_token_messenger_added")
                .add_attribute("domain", domain_id.to_string())
                .add_attribute("remote_token_messenger", bytes32_to_hex(&address)),
        ))
}

pub fn execute_remove_remote_token_messenger(
    deps: DepsMut,
    domain_id: u32,
) -> Result<Response, ContractError> {
    let removed = registry::remove_remote_token_messenger(deps.storage, domain_id)?;

    Ok(Response::new()
        .add_attribute("method", "remove_remote_token_messenger")
        .add_event(
            Event::new("remote_token_messenger_removed")
                .add_attribute("domain", domain_id.to_string())
                .add_attribute("remote_token_messenger", format!("0x{}", hex::encode(removed))),
        ))
}

// ============================================================================
// Message Limits
// ============================================================================

pub fn execute_update_max_message_body_size(
    deps: DepsMut,
    message_size: u64,
) -> Result<Response, ContractError> {
    MAX_MESSAGE_BODY_SIZE.save(deps.storage, &message_size)?;

    Ok(Response::new()
        .add_attribute("method", "update_max_message_body_size")
        .add_event(
            Event::new("max_message_body_size_updated")
                .add_attribute("new_max_message_body_size", message_size.to_string()),
        ))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner. Ownership moves only once they accept.
pub fn execute_update_owner(
    deps: DepsMut,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let mut roles = ROLES.load(deps.storage)?;
    roles.pending_owner = Some(new_owner.clone());
    ROLES.save(deps.storage, &roles)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_event(
            Event::new("ownership_transfer_started")
                .add_attribute("previous_owner", roles.owner.as_str())
                .add_attribute("new_owner", new_owner.as_str()),
        ))
}

/// Accept a pending ownership transfer. The role table already checked
/// that the caller is the pending owner.
pub fn execute_accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut roles = ROLES.load(deps.storage)?;
    let previous_owner = std::mem::replace(&mut roles.owner, info.sender.clone());
    roles.pending_owner = None;
    ROLES.save(deps.storage, &roles)?;

    Ok(Response::new()
        .add_attribute("method", "accept_owner")
        .add_event(
            Event::new("ownership_transferred")
                .add_attribute("previous_owner", previous_owner.as_str())
                .add_attribute("new_owner", info.sender.as_str()),
        ))
}

// ============================================================================
// Role Updates
// ============================================================================

pub fn execute_update_attester_manager(
    deps: DepsMut,
    new_attester_manager: String,
) -> Result<Response, ContractError> {
    let new_attester_manager = deps.api.addr_validate(&new_attester_manager)?;
    let mut roles = ROLES.load(deps.storage)?;
    let previous = std::mem::replace(&mut roles.attester_manager, new_attester_manager.clone());
    ROLES.save(deps.storage, &roles)?;

    Ok(Response::new()
        .add_attribute("method", "update_attester_manager")
        .add_event(
            Event::new("attester_manager_updated")
                .add_attribute("previous_attester_manager", previous.as_str())
                .add_attribute("new_attester_manager", new_attester_manager.as_str()),
        ))
}

pub fn execute_update_pauser(deps: DepsMut, new_pauser: String) -> Result<Response, ContractError> {
    let new_pauser = deps.api.addr_validate(&new_pauser)?;
    let mut roles = ROLES.load(deps.storage)?;
    let previous = std::mem::replace(&mut roles.pauser, new_pauser.clone());
    ROLES.save(deps.storage, &roles)?;

    Ok(Response::new()
        .add_attribute("method", "update_pauser")
        .add_event(
            Event::new("pauser_updated")
                .add_attribute("previous_pauser", previous.as_str())
                .add_attribute("new_pauser", new_pauser.as_str()),
        ))
}

pub fn execute_update_token_controller(
    deps: DepsMut,
    new_token_controller: String,
) -> Result<Response, ContractError> {
    let new_token_controller = deps.api.addr_validate(&new_token_controller)?;
    let mut roles = ROLES.load(deps.storage)?;
    let previous = std::mem::replace(&mut roles.token_controller, new_token_controller.clone());
    ROLES.save(deps.storage, &roles)?;

    Ok(Response::new()
        .add_attribute("method", "update_token_controller")
        .add_event(
            Event::new("token_controller_updated")
                .add_attribute("previous_token_controller", previous.as_str())
                .add_attribute("new_token_controller", new_token_controller.as_str()),
        ))
}
