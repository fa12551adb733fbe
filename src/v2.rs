//! Facade for the `/api/v2` endpoints.
//!
//! Every method performs exactly one request and returns the `{ok, result}`
//! envelope as sent by the server.

use serde_json::json;

use crate::client::{Result, Transport};
use crate::types::v2::*;

/// Methods of the `/api/v2` surface. Obtained from
/// [`TonCenterClient::v2`](crate::TonCenterClient::v2).
#[derive(Debug, Clone)]
pub struct V2Api {
    transport: Transport,
}

impl V2Api {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Returns basic state of an account: balance, code, data and last
    /// transaction.
    pub async fn get_address_information(
        &self,
        address: &str,
    ) -> Result<V2Response<AddressInformation>> {
        self.transport
            .get("/api/v2/getAddressInformation", &json!({ "address": address }))
            .await
    }

    /// Like [`get_address_information`](Self::get_address_information) but with
    /// the parsed wallet state.
    pub async fn get_extended_address_information(
        &self,
        address: &str,
    ) -> Result<V2Response<ExtendedAddressInformation>> {
        self.transport
            .get(
                "/api/v2/getExtendedAddressInformation",
                &json!({ "address": address }),
            )
            .await
    }

    pub async fn get_wallet_information(
        &self,
        address: &str,
    ) -> Result<V2Response<WalletInformation>> {
        self.transport
            .get("/api/v2/getWalletInformation", &json!({ "address": address }))
            .await
    }

    /// Returns transactions of an account, newest first.
    pub async fn get_transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<V2Response<Vec<Transaction>>> {
        self.transport.get("/api/v2/getTransactions", request).await
    }

    /// Balance in nanotons, as a decimal string.
    pub async fn get_address_balance(&self, address: &str) -> Result<V2Response<String>> {
        self.transport
            .get("/api/v2/getAddressBalance", &json!({ "address": address }))
            .await
    }

    /// One of `uninitialized`, `active` or `frozen`.
    pub async fn get_address_state(&self, address: &str) -> Result<V2Response<String>> {
        self.transport
            .get("/api/v2/getAddressState", &json!({ "address": address }))
            .await
    }

    /// Converts a raw address (`0:83DF...`) to its user-friendly form.
    pub async fn pack_address(&self, address: &str) -> Result<V2Response<String>> {
        self.transport
            .get("/api/v2/packAddress", &json!({ "address": address }))
            .await
    }

    /// Converts a user-friendly address (`EQCD...`) to its raw form.
    pub async fn unpack_address(&self, address: &str) -> Result<V2Response<String>> {
        self.transport
            .get("/api/v2/unpackAddress", &json!({ "address": address }))
            .await
    }

    /// Returns jetton or NFT data for a token contract.
    ///
    /// Fails with a 503 [`ApiError`](crate::ApiError) when the contract is not a
    /// token; see [`ApiError::is_service_unavailable`](crate::ApiError::is_service_unavailable).
    pub async fn get_token_data(&self, address: &str) -> Result<V2Response<TokenData>> {
        self.transport
            .get("/api/v2/getTokenData", &json!({ "address": address }))
            .await
    }

    /// Returns every address form for an account identifier given in any form.
    pub async fn detect_address(&self, address: &str) -> Result<V2Response<DetectedAddress>> {
        self.transport
            .get("/api/v2/detectAddress", &json!({ "address": address }))
            .await
    }

    // ── POST ─────────────────────────────────────────────────────

    /// Runs a get method on a contract. The result holds `gas_used`,
    /// `exit_code` and the TVM `stack`.
    pub async fn run_get_method(
        &self,
        request: &RunGetMethodRequest,
    ) -> Result<V2Response<serde_json::Value>> {
        self.transport.post("/api/v2/runGetMethod", request).await
    }

    /// Broadcasts a serialized external message.
    pub async fn send_boc(&self, boc: &str) -> Result<V2Response<serde_json::Value>> {
        self.transport
            .post("/api/v2/sendBoc", &json!({ "boc": boc }))
            .await
    }

    /// Broadcasts a serialized external message; the result carries its hash.
    pub async fn send_boc_return_hash(&self, boc: &str) -> Result<V2Response<serde_json::Value>> {
        self.transport
            .post("/api/v2/sendBocReturnHash", &json!({ "boc": boc }))
            .await
    }

    pub async fn send_query(
        &self,
        request: &SendQueryRequest,
    ) -> Result<V2Response<serde_json::Value>> {
        self.transport.post("/api/v2/sendQuery", request).await
    }

    pub async fn estimate_fee(
        &self,
        request: &EstimateFeeRequest,
    ) -> Result<V2Response<serde_json::Value>> {
        self.transport.post("/api/v2/estimateFee", request).await
    }

    /// Forwards a JSON-RPC call. The raw JSON-RPC reply is returned as-is.
    pub async fn json_rpc(&self, request: &JsonRpcRequest) -> Result<serde_json::Value> {
        self.transport.post("/api/v2/jsonRPC", request).await
    }
}
