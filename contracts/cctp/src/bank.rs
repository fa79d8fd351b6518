//! Token movements
//!
//! Local tokens are CW20 contracts that list this contract as minter.
//! Deposits arrive through the CW20 `Send` hook and are burned from the
//! contract's own balance; verified burn messages mint to the recipient.
//! A failing token call reverts the whole transaction.

use cosmwasm_std::{to_json_binary, CosmosMsg, StdResult, Uint128, Uint256, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;

/// Burn `amount` of `token` held by this contract.
pub fn burn_msg(token: &str, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    }))
}

/// Mint `amount` of `token` to `recipient`.
pub fn mint_msg(token: &str, recipient: &str, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Narrow a 256-bit wire amount to the CW20 amount type.
pub fn to_token_amount(amount: Uint256) -> Result<Uint128, ContractError> {
    let bytes = amount.to_be_bytes();
    if bytes[..16].iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidAmount {
            reason: format!("{} exceeds the token amount range", amount),
        });
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&bytes[16..]);
    Ok(Uint128::new(u128::from_be_bytes(low)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_to_token_amount() {
        assert_eq!(
            to_token_amount(Uint256::from(12345u128)).unwrap(),
            Uint128::new(12345)
        );
        assert_eq!(
            to_token_amount(Uint256::from(u128::MAX)).unwrap(),
            Uint128::MAX
        );
        assert!(to_token_amount(Uint256::from(u128::MAX) + Uint256::one()).is_err());
    }

    #[test]
    fn test_mint_msg_targets_token() {
        let msg = mint_msg("token", "recipient", Uint128::new(5)).unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr, msg, ..
            }) => {
                assert_eq!(contract_addr, "token");
                let parsed: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    parsed,
                    Cw20ExecuteMsg::Mint {
                        recipient: "recipient".to_string(),
                        amount: Uint128::new(5)
                    }
                );
            }
            other => panic!("unexpected message {:?}", other),
        }
    }
}
