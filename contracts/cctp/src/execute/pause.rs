//! Pause flag handlers and guards.
//!
//! Two independent flags:
//! - burning and minting (token messenger)
//! - sending and receiving messages (message transmitter)

use cosmwasm_std::{DepsMut, Event, Response, Storage};

use crate::error::ContractError;
use crate::state::{BURNING_AND_MINTING_PAUSED, SENDING_AND_RECEIVING_MESSAGES_PAUSED};

pub fn ensure_burning_and_minting_enabled(storage: &dyn Storage) -> Result<(), ContractError> {
    if BURNING_AND_MINTING_PAUSED.load(storage)? {
        return Err(ContractError::Paused {
            operation: "burning and minting".to_string(),
        });
    }
    Ok(())
}

pub fn ensure_sending_and_receiving_enabled(storage: &dyn Storage) -> Result<(), ContractError> {
    if SENDING_AND_RECEIVING_MESSAGES_PAUSED.load(storage)? {
        return Err(ContractError::Paused {
            operation: "sending and receiving messages".to_string(),
        });
    }
    Ok(())
}

pub fn execute_set_burning_and_minting_paused(
    deps: DepsMut,
    paused: bool,
) -> Result<Response, ContractError> {
    BURNING_AND_MINTING_PAUSED.save(deps.storage, &paused)?;

    let (method, event) = if paused {
        ("pause_burning_and_minting", "burning_and_minting_paused")
    } else {
        ("unpause_burning_and_minting", "burning_and_minting_unpaused")
    };
    Ok(Response::new()
        .add_attribute("method", method)
        .add_event(Event::new(event)))
}

pub fn execute_set_sending_and_receiving_paused(
    deps: DepsMut,
    paused: bool,
) -> Result<Response, ContractError> {
    SENDING_AND_RECEIVING_MESSAGES_PAUSED.save(deps.storage, &paused)?;

    let (method, event) = if paused {
        (
            "pause_sending_and_receiving_messages",
            "sending_and_receiving_paused",
        )
    } else {
        (
            "unpause_sending_and_receiving_messages",
            "sending_and_receiving_unpaused",
        )
    };
    Ok(Response::new()
        .add_attribute("method", method)
        .add_event(Event::new(event)))
}
