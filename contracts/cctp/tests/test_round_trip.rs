//! Burn on one domain, mint on another.
//!
//! Two CCTP instances in the same app play the local domain and the remote
//! domain, each with its own token, trusting each other's token messenger.

mod common;

use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg, MinterResponse};
use cw_multi_test::Executor;

use cctp::hash::burn_token_id;
use cctp::msg::{ExecuteMsg, InstantiateMsg, ReceiveMsg};

use common::*;

/// Deploy the remote side: domain 0 with the remote token messenger identity.
fn deploy_remote(suite: &mut Suite) -> (Addr, Addr) {
    let code = suite.app.store_code(contract_cctp());
    let msg = InstantiateMsg {
        local_domain: REMOTE_DOMAIN,
        token_messenger: Some(Binary::from(REMOTE_TOKEN_MESSENGER.to_vec())),
        ..genesis(&suite.attesters, 2)
    };
    let remote = suite
        .app
        .instantiate_contract(code, owner(), &msg, &[], "cctp-remote", None)
        .unwrap();

    let cw20_code = suite.app.store_code(contract_cw20());
    let remote_token = suite
        .app
        .instantiate_contract(
            cw20_code,
            owner(),
            &cw20_base::msg::InstantiateMsg {
                name: "Remote USD Coin".to_string(),
                symbol: "RUSDC".to_string(),
                decimals: 6,
                initial_balances: vec![],
                mint: Some(MinterResponse {
                    minter: remote.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "remote-usdc",
            None,
        )
        .unwrap();

    suite
        .app
        .execute_contract(
            owner(),
            remote.clone(),
            &ExecuteMsg::AddRemoteTokenMessenger {
                domain_id: LOCAL_DOMAIN,
                address: Binary::from(LOCAL_TOKEN_MESSENGER.to_vec()),
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            token_controller(),
            remote.clone(),
            &ExecuteMsg::LinkTokenPair {
                remote_domain: LOCAL_DOMAIN,
                remote_token: Binary::from(burn_token_id(suite.token.as_str()).to_vec()),
                local_token: remote_token.to_string(),
            },
            &[],
        )
        .unwrap();

    (remote, remote_token)
}

#[test]
fn test_deposit_then_receive_on_remote_domain() {
    let mut suite = setup(2);
    let (remote, remote_token) = deploy_remote(&mut suite);
    let recipient = account(5);

    let res = suite
        .deposit_for_burn(
            &user(),
            25_000,
            &ReceiveMsg::DepositForBurnWithCaller {
                destination_domain: REMOTE_DOMAIN,
                mint_recipient: Binary::from(padded(&recipient).to_vec()),
                destination_caller: Binary::from(padded(&relayer()).to_vec()),
            },
        )
        .unwrap();
    let message = sent_message(&res);
    let attestation = suite.attest_ordered(2, &message);

    let deliver = |suite: &mut Suite, caller: Addr| {
        suite.app.execute_contract(
            caller,
            remote.clone(),
            &ExecuteMsg::ReceiveMessage {
                message: Binary::from(message.clone()),
                attestation: attestation.clone(),
            },
            &[],
        )
    };

    let err = deliver(&mut suite, account(9)).unwrap_err();
    assert!(root_error(&err).contains("Destination caller does not match sender"));

    deliver(&mut suite, relayer()).unwrap();

    let balance: BalanceResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &remote_token,
            &Cw20QueryMsg::Balance {
                address: recipient.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::new(25_000));
    assert_eq!(suite.balance(&user()), Uint128::new(USER_BALANCE - 25_000));

    let err = deliver(&mut suite, relayer()).unwrap_err();
    assert!(root_error(&err).contains("Nonce already used: source domain 4, nonce 0"));
}

#[test]
fn test_replacement_and_original_share_one_delivery() {
    let mut suite = setup(2);
    let (remote, remote_token) = deploy_remote(&mut suite);

    let res = suite
        .deposit_for_burn(
            &user(),
            1_000,
            &ReceiveMsg::DepositForBurn {
                destination_domain: REMOTE_DOMAIN,
                mint_recipient: Binary::from(padded(&account(5)).to_vec()),
            },
        )
        .unwrap();
    let original = sent_message(&res);
    let original_attestation = suite.attest_ordered(2, &original);

    let res = suite
        .app
        .execute_contract(
            user(),
            suite.cctp.clone(),
            &ExecuteMsg::ReplaceDepositForBurn {
                original_message: Binary::from(original.clone()),
                original_attestation: original_attestation.clone(),
                new_destination_caller: Binary::from(vec![0u8; 32]),
                new_mint_recipient: Binary::from(padded(&account(6)).to_vec()),
            },
            &[],
        )
        .unwrap();
    let replacement = sent_message(&res);
    let replacement_attestation = suite.attest_ordered(2, &replacement);

    suite
        .app
        .execute_contract(
            relayer(),
            remote.clone(),
            &ExecuteMsg::ReceiveMessage {
                message: Binary::from(replacement),
                attestation: replacement_attestation,
            },
            &[],
        )
        .unwrap();

    let err = suite
        .app
        .execute_contract(
            relayer(),
            remote,
            &ExecuteMsg::ReceiveMessage {
                message: Binary::from(original),
                attestation: original_attestation,
            },
            &[],
        )
        .unwrap_err();
    assert!(root_error(&err).contains("Nonce already used"));

    for (holder, expected) in [(account(5), 0u128), (account(6), 1_000u128)] {
        let balance: BalanceResponse = suite
            .app
            .wrap()
            .query_wasm_smart(
                &remote_token,
                &Cw20QueryMsg::Balance {
                    address: holder.to_string(),
                },
            )
            .unwrap();
        assert_eq!(balance.balance, Uint128::new(expected));
    }
}
