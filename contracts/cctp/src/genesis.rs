//! Genesis load and export
//!
//! `instantiate` loads a full state snapshot; `QueryMsg::ExportGenesis` dumps
//! one in the same shape. Any inconsistency in the snapshot aborts
//! instantiation so the contract never starts half-configured.

use std::collections::BTreeSet;

use cosmwasm_std::{Binary, Deps, DepsMut, Env, StdResult};

use crate::address_codec::padded_address;
use crate::attestation::normalize_attester;
use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, to_bytes32};
use crate::msg::InstantiateMsg;
use crate::nonce::consume_inbound_nonce;
use crate::registry;
use crate::state::{
    all_attesters, all_per_message_burn_limits, all_remote_token_messengers, all_token_pairs,
    all_used_nonces, Config, Roles, ATTESTERS, BURNING_AND_MINTING_PAUSED, CONFIG,
    DEFAULT_MAX_MESSAGE_BODY_SIZE, DEFAULT_SIGNATURE_THRESHOLD, MAX_MESSAGE_BODY_SIZE,
    NEXT_AVAILABLE_NONCE, PER_MESSAGE_BURN_LIMITS, ROLES, SENDING_AND_RECEIVING_MESSAGES_PAUSED,
    SIGNATURE_THRESHOLD,
};

fn invalid(reason: impl Into<String>) -> ContractError {
    ContractError::InvalidGenesis {
        reason: reason.into(),
    }
}

pub fn init_genesis(deps: DepsMut, env: &Env, msg: InstantiateMsg) -> Result<(), ContractError> {
    // ------------------------------------------------------------------------
    // Roles and configuration
    // ------------------------------------------------------------------------
    if msg.owner.trim().is_empty() {
        return Err(invalid("owner is required"));
    }
    let roles = Roles {
        owner: deps.api.addr_validate(&msg.owner)?,
        pending_owner: None,
        attester_manager: deps.api.addr_validate(&msg.attester_manager)?,
        pauser: deps.api.addr_validate(&msg.pauser)?,
        token_controller: deps.api.addr_validate(&msg.token_controller)?,
    };
    ROLES.save(deps.storage, &roles)?;

    if msg.bech32_prefix.is_empty() {
        return Err(invalid("bech32 prefix is required"));
    }
    let token_messenger = match msg.token_messenger {
        Some(identity) => to_bytes32(&identity, "token_messenger")?,
        None => padded_address(env.contract.address.as_str())?,
    };
    CONFIG.save(
        deps.storage,
        &Config {
            local_domain: msg.local_domain,
            token_messenger: Binary::from(token_messenger.to_vec()),
            bech32_prefix: msg.bech32_prefix,
        },
    )?;

    // ------------------------------------------------------------------------
    // Scalars
    // ------------------------------------------------------------------------
    let threshold = msg
        .signature_threshold
        .unwrap_or(DEFAULT_SIGNATURE_THRESHOLD);
    if threshold == 0 {
        return Err(ContractError::InvalidSignatureThreshold {
            reason: "threshold must be at least 1".to_string(),
        });
    }
    SIGNATURE_THRESHOLD.save(deps.storage, &threshold)?;
    BURNING_AND_MINTING_PAUSED.save(
        deps.storage,
        &msg.burning_and_minting_paused.unwrap_or(true),
    )?;
    SENDING_AND_RECEIVING_MESSAGES_PAUSED.save(
        deps.storage,
        &msg.sending_and_receiving_messages_paused.unwrap_or(true),
    )?;
    MAX_MESSAGE_BODY_SIZE.save(
        deps.storage,
        &msg
            .max_message_body_size
            .unwrap_or(DEFAULT_MAX_MESSAGE_BODY_SIZE),
    )?;
    NEXT_AVAILABLE_NONCE.save(deps.storage, &msg.next_available_nonce.unwrap_or_default())?;

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------
    for attester in &msg.attesters {
        let attester = normalize_attester(attester)?;
        if ATTESTERS.has(deps.storage, &attester) {
            return Err(invalid(format!("duplicate attester {}", attester)));
        }
        ATTESTERS.save(deps.storage, &attester, &true)?;
    }

    let mut limit_tokens = BTreeSet::new();
    for limit in &msg.per_message_burn_limits {
        let denom = deps.api.addr_validate(&limit.denom)?.to_string().to_lowercase();
        if !limit_tokens.insert(denom.clone()) {
            return Err(invalid(format!("duplicate burn limit for {}", denom)));
        }
        PER_MESSAGE_BURN_LIMITS.save(deps.storage, &denom, &limit.amount)?;
    }

    for pair in &msg.token_pairs {
        let remote_token = to_bytes32(&pair.remote_token, "remote_token")?;
        let local_token = deps.api.addr_validate(&pair.local_token)?;
        registry::link_token_pair(
            deps.storage,
            pair.remote_domain,
            &remote_token,
            local_token.as_str(),
        )
        .map_err(|e| match e {
            ContractError::TokenPairAlreadyLinked { .. } => invalid(format!(
                "duplicate token pair {} on domain {}",
                bytes32_to_hex(&remote_token),
                pair.remote_domain
            )),
            other => other,
        })?;
    }

    for used in &msg.used_nonces {
        consume_inbound_nonce(deps.storage, used.source_domain, used.nonce).map_err(|e| match e {
            ContractError::NonceAlreadyUsed { .. } => invalid(format!(
                "duplicate used nonce {} from domain {}",
                used.nonce, used.source_domain
            )),
            other => other,
        })?;
    }

    for messenger in &msg.remote_token_messengers {
        let address = to_bytes32(&messenger.address, "remote token messenger")?;
        registry::add_remote_token_messenger(deps.storage, messenger.domain_id, &address)
            .map_err(|e| match e {
                ContractError::DomainAlreadyRegistered { .. } => invalid(format!(
                    "duplicate remote token messenger for domain {}",
                    messenger.domain_id
                )),
                other => other,
            })?;
    }

    Ok(())
}

pub fn export_genesis(deps: Deps) -> StdResult<InstantiateMsg> {
    let roles = ROLES.load(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;

    Ok(InstantiateMsg {
        owner: roles.owner.to_string(),
        attester_manager: roles.attester_manager.to_string(),
        pauser: roles.pauser.to_string(),
        token_controller: roles.token_controller.to_string(),
        local_domain: config.local_domain,
        bech32_prefix: config.bech32_prefix,
        token_messenger: Some(config.token_messenger),
        attesters: all_attesters(deps.storage)?,
        per_message_burn_limits: all_per_message_burn_limits(deps.storage)?,
        burning_and_minting_paused: Some(BURNING_AND_MINTING_PAUSED.load(deps.storage)?),
        sending_and_receiving_messages_paused: Some(
            SENDING_AND_RECEIVING_MESSAGES_PAUSED.load(deps.storage)?,
        ),
        max_message_body_size: Some(MAX_MESSAGE_BODY_SIZE.load(deps.storage)?),
        next_available_nonce: Some(NEXT_AVAILABLE_NONCE.load(deps.storage)?),
        signature_threshold: Some(SIGNATURE_THRESHOLD.load(deps.storage)?),
        token_pairs: all_token_pairs(deps.storage)?,
        used_nonces: all_used_nonces(deps.storage)?,
        remote_token_messengers: all_remote_token_messengers(deps.storage)?,
    })
}
