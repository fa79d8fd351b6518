//! Shared setup for the CCTP integration tests.
//!
//! Deploys the CCTP contract next to a cw20-base token it can mint, and
//! provides secp256k1 attesters for signing messages.

#![allow(dead_code)]

use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128, Uint256};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use cctp::address_codec::{encode_bech32_address, padded_address};
use cctp::keccak256;
use cctp::message::{BurnMessage, Message};
use cctp::msg::{ExecuteMsg, InstantiateMsg, ReceiveMsg};

// ============================================================================
// Constants
// ============================================================================

pub const LOCAL_DOMAIN: u32 = 4;
pub const REMOTE_DOMAIN: u32 = 0;
pub const PREFIX: &str = "noble";

pub const LOCAL_TOKEN_MESSENGER: [u8; 32] = [0xaa; 32];
pub const REMOTE_TOKEN_MESSENGER: [u8; 32] = [0xbb; 32];
pub const REMOTE_TOKEN: [u8; 32] = [0xcc; 32];

pub const USER_BALANCE: u128 = 1_000_000;
pub const BURN_LIMIT: u128 = 500_000;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_cctp() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cctp::contract::execute,
        cctp::contract::instantiate,
        cctp::contract::query,
    );
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Attesters
// ============================================================================

pub struct TestAttester {
    pub key: SigningKey,
    pub pubkey_hex: String,
    pub address: [u8; 20],
}

impl TestAttester {
    pub fn new(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).unwrap();
        let pubkey = key.verifying_key().to_encoded_point(false).as_bytes().to_vec();
        let hash = keccak256(&pubkey[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        Self {
            key,
            pubkey_hex: hex::encode(&pubkey),
            address,
        }
    }

    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let digest = keccak256(message);
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(&digest).unwrap();
        let mut out = signature.to_bytes().to_vec();
        out.push(recovery_id.to_byte() + 27);
        out
    }
}

/// Attesters sorted by ascending signer address
pub fn sorted_attesters(count: u8) -> Vec<TestAttester> {
    let mut attesters: Vec<TestAttester> = (1..=count).map(TestAttester::new).collect();
    attesters.sort_by(|a, b| a.address.cmp(&b.address));
    attesters
}

/// Concatenate signatures in the given order
pub fn attest(signers: &[&TestAttester], message: &[u8]) -> Binary {
    Binary::from(
        signers
            .iter()
            .flat_map(|a| a.sign(message))
            .collect::<Vec<u8>>(),
    )
}

// ============================================================================
// Accounts
// ============================================================================

pub fn owner() -> Addr {
    Addr::unchecked("owner")
}

pub fn attester_manager() -> Addr {
    Addr::unchecked("attester_manager")
}

pub fn pauser() -> Addr {
    Addr::unchecked("pauser")
}

pub fn token_controller() -> Addr {
    Addr::unchecked("token_controller")
}

/// A bech32 account address derived from `seed`
pub fn account(seed: u8) -> Addr {
    Addr::unchecked(encode_bech32_address(&[seed; 20], PREFIX).unwrap())
}

pub fn user() -> Addr {
    account(1)
}

pub fn relayer() -> Addr {
    account(2)
}

pub fn padded(addr: &Addr) -> [u8; 32] {
    padded_address(addr.as_str()).unwrap()
}

// ============================================================================
// Setup
// ============================================================================

pub struct Suite {
    pub app: App,
    pub cctp: Addr,
    pub token: Addr,
    pub attesters: Vec<TestAttester>,
}

pub fn genesis(attesters: &[TestAttester], threshold: u32) -> InstantiateMsg {
    InstantiateMsg {
        owner: owner().to_string(),
        attester_manager: attester_manager().to_string(),
        pauser: pauser().to_string(),
        token_controller: token_controller().to_string(),
        local_domain: LOCAL_DOMAIN,
        bech32_prefix: PREFIX.to_string(),
        token_messenger: Some(Binary::from(LOCAL_TOKEN_MESSENGER.to_vec())),
        attesters: attesters.iter().map(|a| a.pubkey_hex.clone()).collect(),
        per_message_burn_limits: vec![],
        burning_and_minting_paused: Some(false),
        sending_and_receiving_messages_paused: Some(false),
        max_message_body_size: None,
        next_available_nonce: None,
        signature_threshold: Some(threshold),
        token_pairs: vec![],
        used_nonces: vec![],
        remote_token_messengers: vec![],
    }
}

/// Deploy with three attesters, threshold `threshold`, a linked token and a
/// registered remote token messenger.
pub fn setup(threshold: u32) -> Suite {
    let mut app = App::default();
    let attesters = sorted_attesters(3);

    let cctp_code = app.store_code(contract_cctp());
    let cctp = app
        .instantiate_contract(
            cctp_code,
            owner(),
            &genesis(&attesters, threshold),
            &[],
            "cctp",
            Some(owner().to_string()),
        )
        .unwrap();

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner(),
            &cw20_base::msg::InstantiateMsg {
                name: "USD Coin".to_string(),
                symbol: "USDC".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: user().to_string(),
                    amount: Uint128::new(USER_BALANCE),
                }],
                mint: Some(MinterResponse {
                    minter: cctp.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            "usdc",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner(),
        cctp.clone(),
        &ExecuteMsg::AddRemoteTokenMessenger {
            domain_id: REMOTE_DOMAIN,
            address: Binary::from(REMOTE_TOKEN_MESSENGER.to_vec()),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        token_controller(),
        cctp.clone(),
        &ExecuteMsg::LinkTokenPair {
            remote_domain: REMOTE_DOMAIN,
            remote_token: Binary::from(REMOTE_TOKEN.to_vec()),
            local_token: token.to_string(),
        },
        &[],
    )
    .unwrap();

    app.execute_contract(
        token_controller(),
        cctp.clone(),
        &ExecuteMsg::SetMaxBurnAmountPerMessage {
            local_token: token.to_string(),
            amount: Uint128::new(BURN_LIMIT),
        },
        &[],
    )
    .unwrap();

    Suite {
        app,
        cctp,
        token,
        attesters,
    }
}

// ============================================================================
// Helpers
// ============================================================================

impl Suite {
    pub fn balance(&self, addr: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    /// Deposit `amount` of the local token from `depositor` via the CW20 hook
    pub fn deposit_for_burn(
        &mut self,
        depositor: &Addr,
        amount: u128,
        hook: &ReceiveMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            depositor.clone(),
            self.token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.cctp.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(hook).unwrap(),
            },
            &[],
        )
    }

    pub fn receive(
        &mut self,
        caller: &Addr,
        message: &[u8],
        attestation: Binary,
    ) -> anyhow::Result<AppResponse> {
        self.app.execute_contract(
            caller.clone(),
            self.cctp.clone(),
            &ExecuteMsg::ReceiveMessage {
                message: Binary::from(message.to_vec()),
                attestation,
            },
            &[],
        )
    }

    /// Attest with the first `count` attesters in ascending order
    pub fn attest_ordered(&self, count: usize, message: &[u8]) -> Binary {
        let signers: Vec<&TestAttester> = self.attesters.iter().take(count).collect();
        attest(&signers, message)
    }
}

/// Inbound burn message from the remote token messenger
pub fn inbound_burn(nonce: u64, recipient: &Addr, amount: u128) -> Vec<u8> {
    Message {
        version: 0,
        source_domain: REMOTE_DOMAIN,
        destination_domain: LOCAL_DOMAIN,
        nonce,
        sender: REMOTE_TOKEN_MESSENGER,
        recipient: LOCAL_TOKEN_MESSENGER,
        destination_caller: [0u8; 32],
        message_body: BurnMessage {
            version: 0,
            burn_token: REMOTE_TOKEN,
            mint_recipient: padded(recipient),
            amount: Uint256::from(amount),
            message_sender: [0x77; 32],
        }
        .encode(),
    }
    .encode()
}

/// Inbound generic message to an arbitrary recipient
pub fn inbound_message(nonce: u64, destination_caller: [u8; 32], body: &[u8]) -> Vec<u8> {
    Message {
        version: 0,
        source_domain: REMOTE_DOMAIN,
        destination_domain: LOCAL_DOMAIN,
        nonce,
        sender: [0x55; 32],
        recipient: [0x66; 32],
        destination_caller,
        message_body: body.to_vec(),
    }
    .encode()
}

/// Value of attribute `key` on the first event of type `wasm-{ty}`
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{}", ty);
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

/// Raw bytes of the `message_sent` event
pub fn sent_message(res: &AppResponse) -> Vec<u8> {
    hex::decode(event_attr(res, "message_sent", "message").unwrap()).unwrap()
}

pub fn root_error(err: &anyhow::Error) -> String {
    err.root_cause().to_string()
}
