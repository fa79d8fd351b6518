//! Token messenger handlers.
//!
//! This module handles:
//! - DepositForBurn / DepositForBurnWithCaller (CW20 receive hook)
//! - ReplaceDepositForBurn

use cosmwasm_std::{from_json, Binary, DepsMut, MessageInfo, Response, Uint128, Uint256};
use cw20::Cw20ReceiveMsg;

use super::pause::ensure_burning_and_minting_enabled;
use super::transmitter::{replace_message_inner, send_message_inner, OutgoingMessage};
use crate::address_codec::padded_address;
use crate::bank::{burn_msg, to_token_amount};
use crate::error::ContractError;
use crate::events::{self, DepositForBurnEvent};
use crate::hash::{burn_token_id, is_zero, to_bytes32, ZERO_BYTES32};
use crate::message::{BurnMessage, Message, BURN_MESSAGE_VERSION};
use crate::msg::ReceiveMsg;
use crate::registry;
use crate::state::CONFIG;

// ============================================================================
// Deposit For Burn
// ============================================================================

/// Handle CW20 tokens sent to the contract.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    // info.sender is the token contract, cw20_msg.sender the depositor
    let token = info.sender.to_string();

    let msg: ReceiveMsg = from_json(&cw20_msg.msg)?;
    match msg {
        ReceiveMsg::DepositForBurn {
            destination_domain,
            mint_recipient,
        } => deposit_for_burn(
            deps,
            token,
            cw20_msg.sender,
            cw20_msg.amount,
            destination_domain,
            mint_recipient,
            None,
        ),
        ReceiveMsg::DepositForBurnWithCaller {
            destination_domain,
            mint_recipient,
            destination_caller,
        } => deposit_for_burn(
            deps,
            token,
            cw20_msg.sender,
            cw20_msg.amount,
            destination_domain,
            mint_recipient,
            Some(destination_caller),
        ),
    }
}

/// Burn deposited tokens and emit a burn message to the remote token messenger.
#[allow(clippy::too_many_arguments)]
fn deposit_for_burn(
    deps: DepsMut,
    token: String,
    depositor: String,
    amount: Uint128,
    destination_domain: u32,
    mint_recipient: Binary,
    destination_caller: Option<Binary>,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let mint_recipient = to_bytes32(&mint_recipient, "mint_recipient")?;
    if is_zero(&mint_recipient) {
        return Err(ContractError::InvalidRecipient);
    }
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

    let config = CONFIG.load(deps.storage)?;
    let destination_messenger = registry::remote_token_messenger(deps.storage, destination_domain)?;
    ensure_burning_and_minting_enabled(deps.storage)?;
    registry::check_burn_limit(deps.storage, &token, amount)?;

    let burn = BurnMessage {
        version: BURN_MESSAGE_VERSION,
        burn_token: burn_token_id(&token),
        mint_recipient,
        amount: Uint256::from(amount.u128()),
        message_sender: padded_address(&depositor)?,
    };

    let token_messenger = to_bytes32(&config.token_messenger, "token_messenger")?;
    let message = send_message_inner(
        deps.storage,
        &config,
        OutgoingMessage {
            destination_domain,
            recipient: &destination_messenger,
            sender: &token_messenger,
            destination_caller: &destination_caller,
            message_body: &burn.encode(),
            nonce: None,
        },
    )?;

    Ok(Response::new()
        .add_message(burn_msg(&token, amount)?)
        .add_event(events::message_sent(&message.encode()))
        .add_event(events::deposit_for_burn(&DepositForBurnEvent {
            nonce: message.nonce,
            burn_token: &burn.burn_token,
            amount,
            depositor: &depositor,
            mint_recipient: &mint_recipient,
            destination_domain,
            destination_token_messenger: &destination_messenger,
            destination_caller: &destination_caller,
        }))
        .add_attribute("method", "deposit_for_burn")
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", message.nonce.to_string()))
}

// ============================================================================
// Replace Deposit For Burn
// ============================================================================

/// Re-send a burn message with a new mint recipient and destination caller.
///
/// Only the original depositor may replace it; nonce and amount are kept.
pub fn execute_replace_deposit_for_burn(
    deps: DepsMut,
    info: MessageInfo,
    original_message: Binary,
    original_attestation: Binary,
    new_destination_caller: Binary,
    new_mint_recipient: Binary,
) -> Result<Response, ContractError> {
    ensure_burning_and_minting_enabled(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;

    let original = Message::decode(&original_message)?;
    let burn = BurnMessage::decode(&original.message_body)?;

    let new_mint_recipient = to_bytes32(&new_mint_recipient, "new_mint_recipient")?;
    if is_zero(&new_mint_recipient) {
        return Err(ContractError::InvalidRecipient);
    }
    let new_destination_caller = to_bytes32(&new_destination_caller, "new_destination_caller")?;

    let caller = padded_address(info.sender.as_str())?;
    if caller != burn.message_sender {
        return Err(ContractError::Unauthorized {
            role: "original depositor".to_string(),
        });
    }

    let new_burn = BurnMessage {
        mint_recipient: new_mint_recipient,
        ..burn
    };

    let token_messenger = to_bytes32(&config.token_messenger, "token_messenger")?;
    let message = replace_message_inner(
        deps.storage,
        deps.api,
        &config,
        &original_message,
        &original_attestation,
        &token_messenger,
        &new_burn.encode(),
        &new_destination_caller,
    )?;

    let amount = to_token_amount(new_burn.amount)?;
    Ok(Response::new()
        .add_event(events::message_sent(&message.encode()))
        .add_event(events::deposit_for_burn(&DepositForBurnEvent {
            nonce: message.nonce,
            burn_token: &new_burn.burn_token,
            amount,
            depositor: info.sender.as_str(),
            mint_recipient: &new_mint_recipient,
            destination_domain: message.destination_domain,
            destination_token_messenger: &message.recipient,
            destination_caller: &new_destination_caller,
        }))
        .add_attribute("method", "replace_deposit_for_burn")
        .add_attribute("nonce", message.nonce.to_string()))
}
