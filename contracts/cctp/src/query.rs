//! Query handlers for the CCTP contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::attestation::normalize_attester;
use crate::message::{BURN_MESSAGE_VERSION, MESSAGE_VERSION};
use crate::msg::{
    AttesterResponse, AttestersResponse, LocalDomainResponse, MaxMessageBodySizeResponse,
    NextAvailableNonceResponse, PausedResponse, PerMessageBurnLimitResponse,
    PerMessageBurnLimitsResponse, RemoteTokenMessengerResponse, RemoteTokenMessengersResponse,
    RolesResponse, SignatureThresholdResponse, TokenPairResponse, TokenPairsResponse,
    UsedNonceResponse, UsedNoncesResponse, VersionResponse,
};
use crate::nonce::is_nonce_used;
use crate::state::{
    PerMessageBurnLimit, RemoteTokenMessenger, UsedNonce, ATTESTERS, BURNING_AND_MINTING_PAUSED,
    CONFIG, MAX_MESSAGE_BODY_SIZE, NEXT_AVAILABLE_NONCE, PER_MESSAGE_BURN_LIMITS,
    REMOTE_TOKEN_MESSENGERS, ROLES, SENDING_AND_RECEIVING_MESSAGES_PAUSED, SIGNATURE_THRESHOLD,
    TOKEN_PAIRS, USED_NONCES,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

// ============================================================================
// Roles & Configuration
// ============================================================================

pub fn query_roles(deps: Deps) -> StdResult<RolesResponse> {
    let roles = ROLES.load(deps.storage)?;
    Ok(RolesResponse {
        owner: roles.owner,
        pending_owner: roles.pending_owner,
        attester_manager: roles.attester_manager,
        pauser: roles.pauser,
        token_controller: roles.token_controller,
    })
}

pub fn query_burning_and_minting_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: BURNING_AND_MINTING_PAUSED.load(deps.storage)?,
    })
}

pub fn query_sending_and_receiving_messages_paused(deps: Deps) -> StdResult<PausedResponse> {
    Ok(PausedResponse {
        paused: SENDING_AND_RECEIVING_MESSAGES_PAUSED.load(deps.storage)?,
    })
}

pub fn query_max_message_body_size(deps: Deps) -> StdResult<MaxMessageBodySizeResponse> {
    Ok(MaxMessageBodySizeResponse {
        amount: MAX_MESSAGE_BODY_SIZE.load(deps.storage)?,
    })
}

pub fn query_next_available_nonce(deps: Deps) -> StdResult<NextAvailableNonceResponse> {
    Ok(NextAvailableNonceResponse {
        nonce: NEXT_AVAILABLE_NONCE.load(deps.storage)?,
    })
}

pub fn query_signature_threshold(deps: Deps) -> StdResult<SignatureThresholdResponse> {
    Ok(SignatureThresholdResponse {
        amount: SIGNATURE_THRESHOLD.load(deps.storage)?,
    })
}

pub fn query_local_domain(deps: Deps) -> StdResult<LocalDomainResponse> {
    Ok(LocalDomainResponse {
        domain_id: CONFIG.load(deps.storage)?.local_domain,
    })
}

pub fn query_local_message_version() -> VersionResponse {
    VersionResponse {
        version: MESSAGE_VERSION,
    }
}

pub fn query_burn_message_version() -> VersionResponse {
    VersionResponse {
        version: BURN_MESSAGE_VERSION,
    }
}

// ============================================================================
// Attester Queries
// ============================================================================

pub fn query_attester(deps: Deps, attester: String) -> StdResult<AttesterResponse> {
    let attester =
        normalize_attester(&attester).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(AttesterResponse {
        enabled: ATTESTERS.has(deps.storage, &attester),
        attester,
    })
}

pub fn query_attesters(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AttestersResponse> {
    let start_after = start_after
        .map(|a| normalize_attester(&a).map_err(|e| StdError::generic_err(e.to_string())))
        .transpose()?;
    let start = start_after.as_deref().map(Bound::exclusive);

    let attesters = ATTESTERS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AttestersResponse { attesters })
}

// ============================================================================
// Token Queries
// ============================================================================

pub fn query_per_message_burn_limit(
    deps: Deps,
    denom: String,
) -> StdResult<PerMessageBurnLimitResponse> {
    let denom = denom.to_lowercase();
    Ok(PerMessageBurnLimitResponse {
        amount: PER_MESSAGE_BURN_LIMITS.may_load(deps.storage, &denom)?,
        denom,
    })
}

pub fn query_per_message_burn_limits(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<PerMessageBurnLimitsResponse> {
    let start_after = start_after.map(|d| d.to_lowercase());
    let start = start_after.as_deref().map(Bound::exclusive);

    let burn_limits = PER_MESSAGE_BURN_LIMITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(denom, amount)| PerMessageBurnLimit { denom, amount }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PerMessageBurnLimitsResponse { burn_limits })
}

pub fn query_token_pair(
    deps: Deps,
    remote_domain: u32,
    remote_token: Binary,
) -> StdResult<TokenPairResponse> {
    let pair = TOKEN_PAIRS.load(deps.storage, (remote_domain, remote_token.as_slice()))?;
    Ok(TokenPairResponse { pair })
}

pub fn query_token_pairs(
    deps: Deps,
    start_after: Option<(u32, Binary)>,
    limit: Option<u32>,
) -> StdResult<TokenPairsResponse> {
    let start = start_after
        .as_ref()
        .map(|(domain, token)| Bound::exclusive((*domain, token.as_slice())));

    let token_pairs = TOKEN_PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(_, pair)| pair))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenPairsResponse { token_pairs })
}

// ============================================================================
// Nonce Queries
// ============================================================================

pub fn query_used_nonce(deps: Deps, source_domain: u32, nonce: u64) -> UsedNonceResponse {
    UsedNonceResponse {
        source_domain,
        nonce,
        used: is_nonce_used(deps.storage, source_domain, nonce),
    }
}

pub fn query_used_nonces(
    deps: Deps,
    start_after: Option<UsedNonce>,
    limit: Option<u32>,
) -> StdResult<UsedNoncesResponse> {
    let start = start_after.map(|n| Bound::exclusive((n.source_domain, n.nonce)));

    let used_nonces = USED_NONCES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(source_domain, nonce)| UsedNonce { source_domain, nonce }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(UsedNoncesResponse { used_nonces })
}

// ============================================================================
// Remote Token Messenger Queries
// ============================================================================

pub fn query_remote_token_messenger(
    deps: Deps,
    domain_id: u32,
) -> StdResult<RemoteTokenMessengerResponse> {
    let address = REMOTE_TOKEN_MESSENGERS.load(deps.storage, domain_id)?;
    Ok(RemoteTokenMessengerResponse {
        remote_token_messenger: RemoteTokenMessenger { domain_id, address },
    })
}

pub fn query_remote_token_messengers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<RemoteTokenMessengersResponse> {
    let start = start_after.map(Bound::exclusive);

    let remote_token_messengers = REMOTE_TOKEN_MESSENGERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| item.map(|(domain_id, address)| RemoteTokenMessenger { domain_id, address }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RemoteTokenMessengersResponse {
        remote_token_messengers,
    })
}
