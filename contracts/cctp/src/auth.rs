//! Authorization policy table
//!
//! Maps each administrative operation to the role allowed to perform it.
//! `execute` checks the role once, before dispatching to any handler.

use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::ROLES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    PendingOwner,
    AttesterManager,
    Pauser,
    TokenController,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::PendingOwner => "pending owner",
            Role::AttesterManager => "attester manager",
            Role::Pauser => "pauser",
            Role::TokenController => "token controller",
        }
    }
}

/// Role required to execute `msg`, or `None` for permissionless operations.
pub fn required_role(msg: &ExecuteMsg) -> Option<Role> {
    match msg {
        ExecuteMsg::UpdateOwner { .. }
        | ExecuteMsg::UpdateAttesterManager { .. }
        | ExecuteMsg::UpdatePauser { .. }
        | ExecuteMsg::UpdateTokenController { .. }
        | ExecuteMsg::AddRemoteTokenMessenger { .. }
        | ExecuteMsg::RemoveRemoteTokenMessenger { .. }
        | ExecuteMsg::UpdateMaxMessageBodySize { .. } => Some(Role::Owner),

        ExecuteMsg::AcceptOwner {} => Some(Role::PendingOwner),

        ExecuteMsg::EnableAttester { .. }
        | ExecuteMsg::DisableAttester { .. }
        | ExecuteMsg::UpdateSignatureThreshold { .. } => Some(Role::AttesterManager),

        ExecuteMsg::PauseBurningAndMinting {}
        | ExecuteMsg::UnpauseBurningAndMinting {}
        | ExecuteMsg::PauseSendingAndReceivingMessages {}
        | ExecuteMsg::UnpauseSendingAndReceivingMessages {} => Some(Role::Pauser),

        ExecuteMsg::LinkTokenPair { .. }
        | ExecuteMsg::UnlinkTokenPair { .. }
        | ExecuteMsg::SetMaxBurnAmountPerMessage { .. } => Some(Role::TokenController),

        ExecuteMsg::Receive(_)
        | ExecuteMsg::SendMessage { .. }
        | ExecuteMsg::SendMessageWithCaller { .. }
        | ExecuteMsg::ReceiveMessage { .. }
        | ExecuteMsg::ReplaceMessage { .. }
        | ExecuteMsg::ReplaceDepositForBurn { .. } => None,
    }
}

/// Fail unless `sender` currently holds `role`.
pub fn ensure_role(storage: &dyn Storage, role: Role, sender: &Addr) -> Result<(), ContractError> {
    let roles = ROLES.load(storage)?;
    let holder = match role {
        Role::Owner => &roles.owner,
        Role::PendingOwner => roles.pending_owner.as_ref().ok_or(ContractError::NoPendingOwner)?,
        Role::AttesterManager => &roles.attester_manager,
        Role::Pauser => &roles.pauser,
        Role::TokenController => &roles.token_controller,
    };

    if holder != sender {
        return Err(ContractError::Unauthorized {
            role: role.as_str().to_string(),
        });
    }
    Ok(())
}
