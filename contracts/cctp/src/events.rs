//! Relayer-facing events
//!
//! Off-chain relayers and attesters watch for these. Identifiers are rendered
//! as 0x-prefixed hex and raw payloads as plain hex.

use cosmwasm_std::{Event, Uint128};

use crate::hash::{bytes32_to_hex, Bytes32};
use crate::message::Message;

/// Carries the exact bytes attesters sign.
pub fn message_sent(message: &[u8]) -> Event {
    Event::new("message_sent").add_attribute("message", hex::encode(message))
}

pub fn message_received(caller: &str, message: &Message) -> Event {
    Event::new("message_received")
        .add_attribute("caller", caller)
        .add_attribute("source_domain", message.source_domain.to_string())
        .add_attribute("nonce", message.nonce.to_string())
        .add_attribute("sender", bytes32_to_hex(&message.sender))
        .add_attribute("message_body", hex::encode(&message.message_body))
}

pub struct DepositForBurnEvent<'a> {
    pub nonce: u64,
    pub burn_token: &'a Bytes32,
    pub amount: Uint128,
    pub depositor: &'a str,
    pub mint_recipient: &'a Bytes32,
    pub destination_domain: u32,
    pub destination_token_messenger: &'a Bytes32,
    pub destination_caller: &'a Bytes32,
}

pub fn deposit_for_burn(event: &DepositForBurnEvent) -> Event {
    Event::new("deposit_for_burn")
        .add_attribute("nonce", event.nonce.to_string())
        .add_attribute("burn_token", bytes32_to_hex(event.burn_token))
        .add_attribute("amount", event.amount.to_string())
        .add_attribute("depositor", event.depositor)
        .add_attribute("mint_recipient", bytes32_to_hex(event.mint_recipient))
        .add_attribute("destination_domain", event.destination_domain.to_string())
        .add_attribute(
            "destination_token_messenger",
            bytes32_to_hex(event.destination_token_messenger),
        )
        .add_attribute(
            "destination_caller",
            bytes32_to_hex(event.destination_caller),
        )
}

pub fn mint_and_withdraw(mint_recipient: &str, amount: Uint128, mint_token: &str) -> Event {
    Event::new("mint_and_withdraw")
        .add_attribute("mint_recipient", mint_recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("mint_token", mint_token)
}
