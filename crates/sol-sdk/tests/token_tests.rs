//! Token layout decoding through the client

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;
use sol_sdk::{
    AccountState, Address, Api, BufferLayout, DecodeError, Mint, MockTransport, Pubkey, SdkError,
    TokenAccount, TOKEN_PROGRAM_ID,
};

const TOKEN_PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

fn api_serving(bytes: &[u8]) -> Api {
    let transport = MockTransport::new();
    transport.set_response(
        "getAccountInfo",
        json!({
            "context": {"slot": 250_000_000u64},
            "value": {
                "data": [STANDARD.encode(bytes), "base64"],
                "owner": TOKEN_PROGRAM,
                "lamports": 2039280,
                "executable": false,
                "rentEpoch": 18446744073709551615u64
            }
        }),
    );
    Api::with_transport(transport)
}

fn sample_account() -> TokenAccount {
    TokenAccount {
        mint: Pubkey::from_bytes([3u8; 32]),
        owner: Pubkey::from_bytes([4u8; 32]),
        amount: 5_000_000,
        delegate: None,
        state: AccountState::Initialized,
        is_native: None,
        delegated_amount: 0,
        close_authority: Some(Pubkey::from_bytes([9u8; 32])),
    }
}

#[tokio::test]
async fn test_token_account_via_api() {
    let account = sample_account();
    let api = api_serving(&account.encode());

    let info = api
        .get_account_info::<TokenAccount>(&Address::new("Holder1"))
        .await
        .unwrap();
    assert_eq!(info.data, account);
    assert_eq!(info.owner, TOKEN_PROGRAM);
    assert_eq!(info.rent_epoch, u64::MAX);
}

#[tokio::test]
async fn test_token_account_owned_by_configured_program() {
    let api = api_serving(&sample_account().encode());
    let info = api
        .get_account_info::<TokenAccount>(&Address::new("Holder1"))
        .await
        .unwrap();
    assert_eq!(api.config().token_program_id, TOKEN_PROGRAM_ID);
    assert!(info.is_owned_by(&api.config().token_program_id));
    assert!(!info.is_owned_by(&Pubkey::ZERO));
}

#[tokio::test]
async fn test_same_bytes_decode_to_other_layout() {
    // Raw bytes and typed layouts share one decode path
    let account = sample_account();
    let api = api_serving(&account.encode());

    let raw = api
        .get_account_info::<Vec<u8>>(&Address::new("Holder1"))
        .await
        .unwrap();
    assert_eq!(raw.data.len(), TokenAccount::LEN);
    assert_eq!(TokenAccount::decode(&raw.data).unwrap(), account);
}

#[tokio::test]
async fn test_mint_request_on_short_account_is_malformed() {
    let api = api_serving(&[0u8; 40]);
    let err = api
        .get_account_info::<Mint>(&Address::new("Mint1"))
        .await
        .unwrap_err();
    match err {
        SdkError::Decode(DecodeError::Malformed { type_name, .. }) => {
            assert!(type_name.ends_with("Mint"));
        }
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mint_via_api() {
    let mint = Mint {
        mint_authority: Some(Pubkey::from_bytes([1u8; 32])),
        supply: 1_000_000_000,
        decimals: 9,
        is_initialized: true,
        freeze_authority: None,
    };
    let api = api_serving(&mint.encode());
    let info = api.get_account_info::<Mint>(&Address::new("Mint1")).await.unwrap();
    assert_eq!(info.data, mint);
}
