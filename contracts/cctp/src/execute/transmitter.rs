//! Message transmitter handlers.
//!
//! This module handles:
//! - SendMessage / SendMessageWithCaller
//! - ReceiveMessage (with burn message minting)
//! - ReplaceMessage

use cosmwasm_std::{Api, Binary, CosmosMsg, Deps, DepsMut, Event, MessageInfo, Response, Storage};

use super::pause::{ensure_burning_and_minting_enabled, ensure_sending_and_receiving_enabled};
use crate::address_codec::{address_from_padded, padded_address};
use crate::attestation::verify_attestation;
use crate::bank::{mint_msg, to_token_amount};
use crate::error::ContractError;
use crate::events;
use crate::hash::{bytes32_to_hex, is_zero, to_bytes32, Bytes32, ZERO_BYTES32};
use crate::message::{BurnMessage, Message, BURN_MESSAGE_VERSION, MESSAGE_VERSION};
use crate::nonce::{allocate_outbound_nonce, consume_inbound_nonce};
use crate::registry;
use crate::state::{Config, CONFIG, MAX_MESSAGE_BODY_SIZE};

// ============================================================================
// Shared Send Path
// ============================================================================

/// Outgoing message fields chosen by the caller.
pub(crate) struct OutgoingMessage<'a> {
    pub destination_domain: u32,
    pub recipient: &'a Bytes32,
    pub sender: &'a Bytes32,
    pub destination_caller: &'a Bytes32,
    pub message_body: &'a [u8],
    /// Reuse an existing nonce (replacements) instead of allocating one
    pub nonce: Option<u64>,
}

/// Validate and encode an outgoing message, allocating a nonce unless one is given.
pub(crate) fn send_message_inner(
    storage: &mut dyn Storage,
    config: &Config,
    outgoing: OutgoingMessage,
) -> Result<Message, ContractError> {
    ensure_sending_and_receiving_enabled(storage)?;

    let max = MAX_MESSAGE_BODY_SIZE.load(storage)?;
    let size = outgoing.message_body.len() as u64;
    if size > max {
        return Err(ContractError::MessageBodyTooLarge { size, max });
    }
    if is_zero(outgoing.recipient) {
        return Err(ContractError::InvalidRecipient);
    }

    let nonce = match outgoing.nonce {
        Some(nonce) => nonce,
        None => allocate_outbound_nonce(storage)?,
    };

    Ok(Message {
        version: MESSAGE_VERSION,
        source_domain: config.local_domain,
        destination_domain: outgoing.destination_domain,
        nonce,
        sender: *outgoing.sender,
        recipient: *outgoing.recipient,
        destination_caller: *outgoing.destination_caller,
        message_body: outgoing.message_body.to_vec(),
    })
}

/// Verify and re-send `original_message` with a new body and destination caller.
///
/// `sender` must match the sender recorded in the original message.
#[allow(clippy::too_many_arguments)]
pub(crate) fn replace_message_inner(
    storage: &mut dyn Storage,
    api: &dyn Api,
    config: &Config,
    original_message: &[u8],
    original_attestation: &[u8],
    sender: &Bytes32,
    new_message_body: &[u8],
    new_destination_caller: &Bytes32,
) -> Result<Message, ContractError> {
    ensure_sending_and_receiving_enabled(storage)?;
    verify_attestation(storage, api, original_message, original_attestation)?;

    let original = Message::decode(original_message)?;
    if original.sender != *sender {
        return Err(ContractError::Unauthorized {
            role: "original message sender".to_string(),
        });
    }
    if original.source_domain != config.local_domain {
        return Err(ContractError::InvalidSourceDomain {
            expected: config.local_domain,
            actual: original.source_domain,
        });
    }

    send_message_inner(
        storage,
        config,
        OutgoingMessage {
            destination_domain: original.destination_domain,
            recipient: &original.recipient,
            sender,
            destination_caller: new_destination_caller,
            message_body: new_message_body,
            nonce: Some(original.nonce),
        },
    )
}

// ============================================================================
// Send
// ============================================================================

/// Send a message from the caller to `recipient` on `destination_domain`.
///
/// `destination_caller` is `None` for SendMessage and must be nonzero when given.
pub fn execute_send_message(
    deps: DepsMut,
    info: MessageInfo,
    destination_domain: u32,
    recipient: Binary,
    message_body: Binary,
    destination_caller: Option<Binary>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let recipient = to_bytes32(&recipient, "recipient")?;
    let destination_caller = match destination_caller {
        Some(caller) => {
            let caller = to_bytes32(&caller, "destination_caller")?;
            if is_zero(&caller) {
                return Err(ContractError::InvalidDestinationCaller {
                    reason: "must be nonzero".to_string(),
                });
            }
            caller
        }
        None => ZERO_BYTES32,
    };
    let sender = padded_address(info.sender.as_str())?;

    let message = send_message_inner(
        deps.storage,
        &config,
        OutgoingMessage {
            destination_domain,
            recipient: &recipient,
            sender: &sender,
            destination_caller: &destination_caller,
            message_body: &message_body,
            nonce: None,
        },
    )?;

    Ok(Response::new()
        .add_event(events::message_sent(&message.encode()))
        .add_attribute("method", "send_message")
        .add_attribute("nonce", message.nonce.to_string())
        .add_attribute("destination_domain", destination_domain.to_string()))
}

// ============================================================================
// Receive
// ============================================================================

/// Deliver an attested message addressed to this domain.
pub fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    message_bytes: Binary,
    attestation: Binary,
) -> Result<Response, ContractError> {
    ensure_sending_and_receiving_enabled(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;

    let message = Message::decode(&message_bytes)?;
    if message.version != MESSAGE_VERSION {
        return Err(ContractError::InvalidMessageVersion {
            expected: MESSAGE_VERSION,
            actual: message.version,
        });
    }
    if message.destination_domain != config.local_domain {
        return Err(ContractError::InvalidDestinationDomain {
            expected: config.local_domain,
            actual: message.destination_domain,
        });
    }
    if !is_zero(&message.destination_caller) {
        // Callers that cannot be padded can never match a restricted caller.
        let caller = padded_address(info.sender.as_str()).ok();
        if caller != Some(message.destination_caller) {
            return Err(ContractError::InvalidDestinationCaller {
                reason: format!("does not match sender {}", info.sender),
            });
        }
    }

    verify_attestation(deps.storage, deps.api, &message_bytes, &attestation)?;
    consume_inbound_nonce(deps.storage, message.source_domain, message.nonce)?;

    let mut response = Response::new()
        .add_attribute("method", "receive_message")
        .add_attribute("source_domain", message.source_domain.to_string())
        .add_attribute("nonce", message.nonce.to_string());

    let token_messenger = to_bytes32(&config.token_messenger, "token_messenger")?;
    if message.recipient == token_messenger {
        let (mint, event) = handle_burn_message(deps.as_ref(), &config, &message)?;
        response = response.add_message(mint).add_event(event);
    }

    Ok(response.add_event(events::message_received(info.sender.as_str(), &message)))
}

/// Mint the tokens described by a burn message from a trusted remote messenger.
fn handle_burn_message(
    deps: Deps,
    config: &Config,
    message: &Message,
) -> Result<(CosmosMsg, Event), ContractError> {
    ensure_burning_and_minting_enabled(deps.storage)?;

    let burn = BurnMessage::decode(&message.message_body)?;
    if burn.version != BURN_MESSAGE_VERSION {
        return Err(ContractError::InvalidMessageVersion {
            expected: BURN_MESSAGE_VERSION,
            actual: burn.version,
        });
    }

    let remote_messenger = registry::remote_token_messenger(deps.storage, message.source_domain)?;
    if message.sender != remote_messenger {
        return Err(ContractError::Unauthorized {
            role: format!(
                "remote token messenger {} for domain {}",
                bytes32_to_hex(&remote_messenger),
                message.source_domain
            ),
        });
    }

    let pair = registry::token_pair(deps.storage, message.source_domain, &burn.burn_token)?;
    let amount = to_token_amount(burn.amount)?;
    let recipient = address_from_padded(&burn.mint_recipient, &config.bech32_prefix)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    Ok((
        mint_msg(&pair.local_token, recipient.as_str(), amount)?,
        events::mint_and_withdraw(recipient.as_str(), amount, &pair.local_token),
    ))
}

// ============================================================================
// Replace
// ============================================================================

pub fn execute_replace_message(
    deps: DepsMut,
    info: MessageInfo,
    original_message: Binary,
    original_attestation: Binary,
    new_message_body: Binary,
    new_destination_caller: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let new_destination_caller = to_bytes32(&new_destination_caller, "new_destination_caller")?;
    let sender = padded_address(info.sender.as_str())?;

    let message = replace_message_inner(
        deps.storage,
        deps.api,
        &config,
        &original_message,
        &original_attestation,
        &sender,
        &new_message_body,
        &new_destination_caller,
    )?;

    Ok(Response::new()
        .add_event(events::message_sent(&message.encode()))
        .add_attribute("method", "replace_message")
        .add_attribute("nonce", message.nonce.to_string()))
}
