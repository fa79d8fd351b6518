//! CCTP Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `genesis` - Instantiate-time state loading and export
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::auth::{ensure_role, required_role};
use crate::error::ContractError;
use crate::execute::{
    execute_accept_owner, execute_add_remote_token_messenger, execute_disable_attester,
    execute_enable_attester, execute_link_token_pair, execute_receive, execute_receive_message,
    execute_remove_remote_token_messenger, execute_replace_deposit_for_burn,
    execute_replace_message, execute_send_message, execute_set_burning_and_minting_paused,
    execute_set_max_burn_amount_per_message, execute_set_sending_and_receiving_paused,
    execute_unlink_token_pair, execute_update_attester_manager,
    execute_update_max_message_body_size, execute_update_owner, execute_update_pauser,
    execute_update_signature_threshold, execute_update_token_controller,
};
use crate::genesis::{export_genesis, init_genesis};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_attester, query_attesters, query_burn_message_version,
    query_burning_and_minting_paused, query_local_domain, query_local_message_version,
    query_max_message_body_size, query_next_available_nonce, query_per_message_burn_limit,
    query_per_message_burn_limits, query_remote_token_messenger, query_remote_token_messengers,
    query_roles, query_sending_and_receiving_messages_paused, query_signature_threshold,
    query_token_pair, query_token_pairs, query_used_nonce, query_used_nonces,
};
use crate::state::{CONFIG, CONTRACT_NAME, CONTRACT_VERSION, SIGNATURE_THRESHOLD};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.clone();
    init_genesis(deps.branch(), &env, msg)?;

    let config = CONFIG.load(deps.storage)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("local_domain", config.local_domain.to_string())
        .add_attribute(
            "signature_threshold",
            SIGNATURE_THRESHOLD.load(deps.storage)?.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    if let Some(role) = required_role(&msg) {
        ensure_role(deps.storage, role, &info.sender)?;
    }

    match msg {
        // Token messenger
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::ReplaceDepositForBurn {
            original_message,
            original_attestation,
            new_destination_caller,
            new_mint_recipient,
        } => execute_replace_deposit_for_burn(
            deps,
            info,
            original_message,
            original_attestation,
            new_destination_caller,
            new_mint_recipient,
        ),

        // Message transmitter
        ExecuteMsg::SendMessage {
            destination_domain,
            recipient,
            message_body,
        } => execute_send_message(deps, info, destination_domain, recipient, message_body, None),
        ExecuteMsg::SendMessageWithCaller {
            destination_domain,
            recipient,
            message_body,
            destination_caller,
        } => execute_send_message(
            deps,
            info,
            destination_domain,
            recipient,
            message_body,
            Some(destination_caller),
        ),
        ExecuteMsg::ReceiveMessage {
            message,
            attestation,
        } => execute_receive_message(deps, info, message, attestation),
        ExecuteMsg::ReplaceMessage {
            original_message,
            original_attestation,
            new_message_body,
            new_destination_caller,
        } => execute_replace_message(
            deps,
            info,
            original_message,
            original_attestation,
            new_message_body,
            new_destination_caller,
        ),

        // Attester manager
        ExecuteMsg::EnableAttester { attester } => execute_enable_attester(deps, attester),
        ExecuteMsg::DisableAttester { attester } => execute_disable_attester(deps, attester),
        ExecuteMsg::UpdateSignatureThreshold { amount } => {
            execute_update_signature_threshold(deps, amount)
        }

        // Token controller
        ExecuteMsg::LinkTokenPair {
            remote_domain,
            remote_token,
            local_token,
        } => execute_link_token_pair(deps, remote_domain, remote_token, local_token),
        ExecuteMsg::UnlinkTokenPair {
            remote_domain,
            remote_token,
        } => execute_unlink_token_pair(deps, remote_domain, remote_token),
        ExecuteMsg::SetMaxBurnAmountPerMessage {
            local_token,
            amount,
        } => execute_set_max_burn_amount_per_message(deps, local_token, amount),

        // Owner
        ExecuteMsg::AddRemoteTokenMessenger { domain_id, address } => {
            execute_add_remote_token_messenger(deps, domain_id, address)
        }
        ExecuteMsg::RemoveRemoteTokenMessenger { domain_id } => {
            execute_remove_remote_token_messenger(deps, domain_id)
        }
        ExecuteMsg::UpdateMaxMessageBodySize { message_size } => {
            execute_update_max_message_body_size(deps, message_size)
        }
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, new_owner),
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, info),
        ExecuteMsg::UpdateAttesterManager {
            new_attester_manager,
        } => execute_update_attester_manager(deps, new_attester_manager),
        ExecuteMsg::UpdatePauser { new_pauser } => execute_update_pauser(deps, new_pauser),
        ExecuteMsg::UpdateTokenController {
            new_token_controller,
        } => execute_update_token_controller(deps, new_token_controller),

        // Pauser
        ExecuteMsg::PauseBurningAndMinting {} => execute_set_burning_and_minting_paused(deps, true),
        ExecuteMsg::UnpauseBurningAndMinting {} => {
            execute_set_burning_and_minting_paused(deps, false)
        }
        ExecuteMsg::PauseSendingAndReceivingMessages {} => {
            execute_set_sending_and_receiving_paused(deps, true)
        }
        ExecuteMsg::UnpauseSendingAndReceivingMessages {} => {
            execute_set_sending_and_receiving_paused(deps, false)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Roles {} => to_json_binary(&query_roles(deps)?),
        QueryMsg::Attester { attester } => to_json_binary(&query_attester(deps, attester)?),
        QueryMsg::Attesters { start_after, limit } => {
            to_json_binary(&query_attesters(deps, start_after, limit)?)
        }
        QueryMsg::PerMessageBurnLimit { denom } => {
            to_json_binary(&query_per_message_burn_limit(deps, denom)?)
        }
        QueryMsg::PerMessageBurnLimits { start_after, limit } => {
            to_json_binary(&query_per_message_burn_limits(deps, start_after, limit)?)
        }
        QueryMsg::BurningAndMintingPaused {} => {
            to_json_binary(&query_burning_and_minting_paused(deps)?)
        }
        QueryMsg::SendingAndReceivingMessagesPaused {} => {
            to_json_binary(&query_sending_and_receiving_messages_paused(deps)?)
        }
        QueryMsg::MaxMessageBodySize {} => to_json_binary(&query_max_message_body_size(deps)?),
        QueryMsg::NextAvailableNonce {} => to_json_binary(&query_next_available_nonce(deps)?),
        QueryMsg::SignatureThreshold {} => to_json_binary(&query_signature_threshold(deps)?),
        QueryMsg::TokenPair {
            remote_domain,
            remote_token,
        } => to_json_binary(&query_token_pair(deps, remote_domain, remote_token)?),
        QueryMsg::TokenPairs { start_after, limit } => {
            to_json_binary(&query_token_pairs(deps, start_after, limit)?)
        }
        QueryMsg::UsedNonce {
            source_domain,
            nonce,
        } => to_json_binary(&query_used_nonce(deps, source_domain, nonce)),
        QueryMsg::UsedNonces { start_after, limit } => {
            to_json_binary(&query_used_nonces(deps, start_after, limit)?)
        }
        QueryMsg::RemoteTokenMessenger { domain_id } => {
            to_json_binary(&query_remote_token_messenger(deps, domain_id)?)
        }
        QueryMsg::RemoteTokenMessengers { start_after, limit } => {
            to_json_binary(&query_remote_token_messengers(deps, start_after, limit)?)
        }
        QueryMsg::LocalDomain {} => to_json_binary(&query_local_domain(deps)?),
        QueryMsg::LocalMessageVersion {} => to_json_binary(&query_local_message_version()),
        QueryMsg::BurnMessageVersion {} => to_json_binary(&query_burn_message_version()),
        QueryMsg::ExportGenesis {} => to_json_binary(&export_genesis(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
