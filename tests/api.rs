use mockito::{Matcher, Server};
use serde_json::json;
use toncenter_client::types::{v2, v3};
use toncenter_client::{ClientConfig, Error, TonCenterClient};

const ADDRESS: &str = "EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales";

fn client_for(server: &Server) -> TonCenterClient {
    TonCenterClient::new(server.url()).expect("client")
}

#[tokio::test]
async fn v2_get_transactions_sends_query_and_returns_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/getTransactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("address".into(), ADDRESS.into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ok": true,
                "result": [
                    {
                        "@type": "raw.transaction",
                        "utime": 1_700_000_000,
                        "fee": "100",
                        "out_msgs": []
                    },
                    {
                        "@type": "raw.transaction",
                        "utime": 1_700_000_100,
                        "fee": "200",
                        "out_msgs": []
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = v2::TransactionsRequest {
        limit: Some(5),
        ..v2::TransactionsRequest::new(ADDRESS)
    };
    let response = client_for(&server)
        .v2()
        .get_transactions(&request)
        .await
        .expect("transactions");

    assert!(response.ok);
    assert_eq!(response.result.len(), 2);
    assert_eq!(response.result[1].fee, "200");
    mock.assert_async().await;
}

#[tokio::test]
async fn v3_account_states_repeats_address_and_defaults_include_boc() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/accountStates")
        .match_query(Matcher::Exact(
            "address=first&address=second&include_boc=true".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "accounts": [
                    { "address": "0:01", "balance": "10", "status": "active" },
                    { "address": "0:02", "balance": "20", "status": "uninit" }
                ],
                "address_book": {
                    "0:01": { "user_friendly": "EQfirst" },
                    "0:02": { "user_friendly": "EQsecond" }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let addresses = vec!["first".to_string(), "second".to_string()];
    let response = client_for(&server)
        .v3()
        .get_account_states(&addresses, None)
        .await
        .expect("account states");

    assert_eq!(response.accounts.len(), 2);
    assert_eq!(response.accounts[0].address, "0:01");
    assert_eq!(response.address_book.len(), 2);
    assert_eq!(response.address_book["0:02"].user_friendly, "EQsecond");
    mock.assert_async().await;
}

#[tokio::test]
async fn v3_address_information_defaults_use_v2() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/addressInformation")
        .match_query(Matcher::Exact(format!("address={ADDRESS}&use_v2=true")))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "balance": "42", "status": "active" }).to_string())
        .create_async()
        .await;

    let info = client_for(&server)
        .v3()
        .get_address_information(ADDRESS, None)
        .await
        .expect("address information");

    assert_eq!(info.balance, "42");
    assert_eq!(info.status, "active");
    mock.assert_async().await;
}

#[tokio::test]
async fn v3_wallet_information_passes_explicit_use_v2() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/walletInformation")
        .match_query(Matcher::Exact(format!("address={ADDRESS}&use_v2=false")))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "balance": "7",
                "wallet_type": "wallet v4 r2",
                "seqno": 12,
                "status": "active"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let wallet = client_for(&server)
        .v3()
        .get_wallet_information(ADDRESS, Some(false))
        .await
        .expect("wallet information");

    assert_eq!(wallet.seqno, Some(12));
    assert_eq!(wallet.wallet_type.as_deref(), Some("wallet v4 r2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_not_doubled() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/masterchainInfo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "first": { "workchain": -1, "shard": "8000000000000000", "seqno": 1 },
                "last": { "workchain": -1, "shard": "8000000000000000", "seqno": 99 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = TonCenterClient::new(format!("{}/", server.url())).expect("client");
    let info = client.v3().get_masterchain_info().await.expect("masterchain info");

    assert_eq!(info.last.seqno, 99);
    mock.assert_async().await;
}

#[tokio::test]
async fn unset_parameters_are_omitted_from_query() {
    let mut server = Server::new_async().await;
    let actions = server
        .mock("GET", "/api/v3/actions")
        .match_query(Matcher::Exact("trace_id=t1".into()))
        .with_status(200)
        .with_body(r#"{"actions":[],"address_book":{}}"#)
        .create_async()
        .await;
    let top = server
        .mock("GET", "/api/v3/topAccountsByBalance")
        .match_query(Matcher::Exact("limit=10".into()))
        .with_status(200)
        .with_body(r#"[{"account":"0:01","balance":"99"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let trace_ids = vec!["t1".to_string()];
    let response = client
        .v3()
        .get_actions(None, Some(trace_ids.as_slice()))
        .await
        .expect("actions");
    assert!(response.actions.is_empty());

    let accounts = client
        .v3()
        .get_top_accounts_by_balance(Some(10), None)
        .await
        .expect("top accounts");
    assert_eq!(
        accounts,
        vec![v3::TopAccount {
            account: "0:01".into(),
            balance: "99".into()
        }]
    );

    actions.assert_async().await;
    top.assert_async().await;
}

#[tokio::test]
async fn v3_request_struct_fields_use_wire_names() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/jetton/transfers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("owner_address".into(), "A".into()),
            Matcher::UrlEncoded("owner_address".into(), "B".into()),
            Matcher::UrlEncoded("jetton_master".into(), "M".into()),
            Matcher::UrlEncoded("direction".into(), "in".into()),
            Matcher::UrlEncoded("sort".into(), "desc".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "jetton_transfers": [{ "amount": "1000", "transaction_now": 1_700_000_000 }],
                "address_book": { "0:A": { "user_friendly": "EQA" } }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let request = v3::JettonTransfersRequest {
        owner_addresses: Some(vec!["A".into(), "B".into()]),
        jetton_master: Some("M".into()),
        direction: Some(v3::MessageDirection::In),
        sort: Some(v3::SortOrder::Desc),
        ..Default::default()
    };
    let response = client_for(&server)
        .v3()
        .get_jetton_transfers(&request)
        .await
        .expect("jetton transfers");

    assert_eq!(response.jetton_transfers[0].amount, "1000");
    assert!(response.jetton_transfers[0].time().is_some());
    assert_eq!(response.address_book["0:A"].user_friendly, "EQA");
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_is_normalized() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/getAddressInformation")
        .match_query(Matcher::UrlEncoded("address".into(), ADDRESS.into()))
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":false,"error":"not found","code":404}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .v2()
        .get_address_information(ADDRESS)
        .await
        .expect_err("should fail with 404");

    assert_eq!(err.to_string(), "API Error: 404 - not found");
    let api = err.api_error().expect("normalized error");
    assert_eq!(api.status, 404);
    assert!(api.is_not_found());
    mock.assert_async().await;
}

#[tokio::test]
async fn http_error_without_error_field_uses_fallback() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/getTokenData")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let err = client_for(&server)
        .v2()
        .get_token_data(ADDRESS)
        .await
        .expect_err("should fail with 503");

    assert_eq!(err.to_string(), "API Error: 503 - Service Unavailable");
    assert!(err.api_error().is_some_and(|e| e.is_service_unavailable()));
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_host_propagates_transport_error() {
    let client = TonCenterClient::new("http://127.0.0.1:1").expect("client");

    let err = client
        .v2()
        .get_address_balance(ADDRESS)
        .await
        .expect_err("should fail to connect");

    assert!(matches!(err, Error::Http(_)), "unexpected error: {err:?}");
    assert!(err.api_error().is_none());
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v2/getAddressState")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .v2()
        .get_address_state(ADDRESS)
        .await
        .expect_err("should fail to decode");

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn api_key_and_content_type_headers_are_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/masterchainInfo")
        .match_header("x-api-key", "secret")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(r#"{"first":{"seqno":1},"last":{"seqno":42}}"#)
        .create_async()
        .await;

    let config = ClientConfig::new(server.url())
        .with_api_key("secret")
        .with_request_logging(true);
    let info = TonCenterClient::with_config(config)
        .expect("client")
        .v3()
        .get_masterchain_info()
        .await
        .expect("masterchain info");

    assert_eq!(info.first.seqno, 1);
    assert_eq!(info.last.seqno, 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_api_key_sends_no_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/packAddress")
        .match_header("x-api-key", Matcher::Missing)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"ok":true,"result":"EQpacked"}"#)
        .create_async()
        .await;

    let packed = client_for(&server)
        .v2()
        .pack_address("0:83DF")
        .await
        .expect("pack address");

    assert_eq!(packed.result, "EQpacked");
    mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_parameters_as_json_body() {
    let mut server = Server::new_async().await;
    let fee = server
        .mock("POST", "/api/v3/estimateFee")
        .match_body(Matcher::Json(json!({
            "address": ADDRESS,
            "body": "te6c",
            "ignore_chksig": true
        })))
        .with_status(200)
        .with_body(
            json!({
                "source_fees": { "in_fwd_fee": 1, "storage_fee": 2, "gas_fee": 3, "fwd_fee": 4 },
                "destination_fees": []
            })
            .to_string(),
        )
        .create_async()
        .await;
    let boc = server
        .mock("POST", "/api/v2/sendBoc")
        .match_body(Matcher::Json(json!({ "boc": "te6cc" })))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":{"@type":"ok"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let estimate = client
        .v3()
        .estimate_fee(&v3::EstimateFeeRequest {
            address: ADDRESS.into(),
            body: "te6c".into(),
            ignore_chksig: Some(true),
            ..Default::default()
        })
        .await
        .expect("estimate fee");
    assert_eq!(estimate.source_fees.gas_fee, 3);
    assert!(estimate.destination_fees.is_empty());

    let sent = client.v2().send_boc("te6cc").await.expect("send boc");
    assert!(sent.ok);
    assert_eq!(sent.result["@type"], "ok");

    fee.assert_async().await;
    boc.assert_async().await;
}

#[tokio::test]
async fn v3_run_get_method_sends_typed_stack() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v3/runGetMethod")
        .match_body(Matcher::Json(json!({
            "address": ADDRESS,
            "method": "seqno",
            "stack": [{ "type": "num", "value": "0x0" }]
        })))
        .with_status(200)
        .with_body(r#"{"gas_used":500,"exit_code":0,"stack":[{"type":"num","value":"0x5"}]}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .v3()
        .run_get_method(&v3::RunGetMethodRequest {
            address: ADDRESS.into(),
            method: "seqno".into(),
            stack: vec![v3::StackEntry::num("0x0")],
        })
        .await
        .expect("run get method");

    assert_eq!(response.exit_code, 0);
    assert_eq!(response.stack[0]["value"], "0x5");
    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_get_yields_identical_results() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("account".into(), ADDRESS.into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "transactions": [{ "account": "0:01", "hash": "h", "lt": "7", "now": 1 }],
                "address_book": { "0:01": { "user_friendly": "EQone" } }
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = v3::TransactionsRequest {
        accounts: Some(vec![ADDRESS.into()]),
        limit: Some(5),
        ..Default::default()
    };
    let first = client.v3().get_transactions(&request).await.expect("first");
    let second = client.v3().get_transactions(&request).await.expect("second");

    assert_eq!(
        serde_json::to_value(&first).expect("serialize"),
        serde_json::to_value(&second).expect("serialize"),
    );
    assert_eq!(first.transactions[0].lt, "7");
    assert_eq!(first.address_book["0:01"].user_friendly, "EQone");
    mock.assert_async().await;
}

#[tokio::test]
async fn v2_json_rpc_returns_raw_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/jsonRPC")
        .match_body(Matcher::PartialJson(json!({
            "method": "getMasterchainInfo",
            "jsonrpc": "2.0"
        })))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":{"last":{"seqno":9}},"id":"1","jsonrpc":"2.0"}"#)
        .create_async()
        .await;

    let reply = client_for(&server)
        .v2()
        .json_rpc(&v2::JsonRpcRequest::new("getMasterchainInfo", json!({})))
        .await
        .expect("json rpc");

    assert_eq!(reply["result"]["last"]["seqno"], 9);
    assert_eq!(reply["id"], "1");
    mock.assert_async().await;
}
