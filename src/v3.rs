//! Facade for the `/api/v3` indexer endpoints.

use serde_json::json;

use crate::client::{Result, Transport};
use crate::types::v3::*;

/// Methods of the `/api/v3` surface. Obtained from
/// [`TonCenterClient::v3`](crate::TonCenterClient::v3).
#[derive(Debug, Clone)]
pub struct V3Api {
    transport: Transport,
}

impl V3Api {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    // ── Accounts ─────────────────────────────────────────────────

    /// Returns account states. `include_boc` defaults to `true`.
    pub async fn get_account_states(
        &self,
        addresses: &[String],
        include_boc: Option<bool>,
    ) -> Result<AccountStatesResponse> {
        let params = json!({
            "address": addresses,
            "include_boc": include_boc.unwrap_or(true),
        });
        self.transport.get("/api/v3/accountStates", &params).await
    }

    pub async fn get_address_book(&self, addresses: &[String]) -> Result<AddressBook> {
        self.transport
            .get("/api/v3/addressBook", &json!({ "address": addresses }))
            .await
    }

    pub async fn get_wallet_states(&self, addresses: &[String]) -> Result<WalletStatesResponse> {
        self.transport
            .get("/api/v3/walletStates", &json!({ "address": addresses }))
            .await
    }

    /// Account information through the v2-compatible endpoint. `use_v2`
    /// defaults to `true`.
    pub async fn get_address_information(
        &self,
        address: &str,
        use_v2: Option<bool>,
    ) -> Result<AddressInformation> {
        let params = json!({ "address": address, "use_v2": use_v2.unwrap_or(true) });
        self.transport.get("/api/v3/addressInformation", &params).await
    }

    /// Wallet information through the v2-compatible endpoint. `use_v2`
    /// defaults to `true`.
    pub async fn get_wallet_information(
        &self,
        address: &str,
        use_v2: Option<bool>,
    ) -> Result<WalletInformation> {
        let params = json!({ "address": address, "use_v2": use_v2.unwrap_or(true) });
        self.transport.get("/api/v3/walletInformation", &params).await
    }

    // ── Actions and events ───────────────────────────────────────

    pub async fn get_actions(
        &self,
        action_ids: Option<&[String]>,
        trace_ids: Option<&[String]>,
    ) -> Result<ActionsResponse> {
        let params = json!({ "action_id": action_ids, "trace_id": trace_ids });
        self.transport.get("/api/v3/actions", &params).await
    }

    pub async fn get_events(&self, request: &EventsRequest) -> Result<EventsResponse> {
        self.transport.get("/api/v3/events", request).await
    }

    // ── Blockchain ───────────────────────────────────────────────

    pub async fn get_blocks(&self, request: &BlocksRequest) -> Result<BlocksResponse> {
        self.transport.get("/api/v3/blocks", request).await
    }

    /// First and last indexed masterchain blocks.
    pub async fn get_masterchain_info(&self) -> Result<MasterchainInfo> {
        self.transport.get("/api/v3/masterchainInfo", &()).await
    }

    /// Shard blocks committed in the masterchain block `seqno`.
    pub async fn get_masterchain_block_shards(&self, seqno: i64) -> Result<BlocksResponse> {
        self.transport
            .get("/api/v3/masterchainBlockShards", &json!({ "seqno": seqno }))
            .await
    }

    /// Shard state as of the masterchain block `seqno`.
    pub async fn get_masterchain_block_shard_state(&self, seqno: i64) -> Result<BlocksResponse> {
        self.transport
            .get("/api/v3/masterchainBlockShardState", &json!({ "seqno": seqno }))
            .await
    }

    /// Transactions linked to `hash` through incoming or outgoing messages.
    pub async fn get_adjacent_transactions(
        &self,
        hash: &str,
        direction: MessageDirection,
    ) -> Result<TransactionsResponse> {
        self.transport
            .get(
                "/api/v3/adjacentTransactions",
                &json!({ "hash": hash, "direction": direction }),
            )
            .await
    }

    pub async fn get_messages(&self, request: &MessagesRequest) -> Result<MessagesResponse> {
        self.transport.get("/api/v3/messages", request).await
    }

    pub async fn get_transactions(
        &self,
        request: &TransactionsRequest,
    ) -> Result<TransactionsResponse> {
        self.transport.get("/api/v3/transactions", request).await
    }

    pub async fn get_transactions_by_masterchain_block(
        &self,
        request: &TransactionsByMasterchainBlockRequest,
    ) -> Result<TransactionsResponse> {
        self.transport
            .get("/api/v3/transactionsByMasterchainBlock", request)
            .await
    }

    pub async fn get_transactions_by_message(
        &self,
        request: &TransactionsByMessageRequest,
    ) -> Result<TransactionsResponse> {
        self.transport.get("/api/v3/transactionsByMessage", request).await
    }

    // ── Jettons ──────────────────────────────────────────────────

    pub async fn get_jetton_burns(
        &self,
        request: &JettonBurnsRequest,
    ) -> Result<JettonBurnsResponse> {
        self.transport.get("/api/v3/jetton/burns", request).await
    }

    pub async fn get_jetton_masters(
        &self,
        request: &JettonMastersRequest,
    ) -> Result<JettonMastersResponse> {
        self.transport.get("/api/v3/jetton/masters", request).await
    }

    pub async fn get_jetton_transfers(
        &self,
        request: &JettonTransfersRequest,
    ) -> Result<JettonTransfersResponse> {
        self.transport.get("/api/v3/jetton/transfers", request).await
    }

    pub async fn get_jetton_wallets(
        &self,
        request: &JettonWalletsRequest,
    ) -> Result<JettonWalletsResponse> {
        self.transport.get("/api/v3/jetton/wallets", request).await
    }

    // ── NFTs ─────────────────────────────────────────────────────

    pub async fn get_nft_collections(
        &self,
        request: &NftCollectionsRequest,
    ) -> Result<NftCollectionsResponse> {
        self.transport.get("/api/v3/nft/collections", request).await
    }

    pub async fn get_nft_items(&self, request: &NftItemsRequest) -> Result<NftItemsResponse> {
        self.transport.get("/api/v3/nft/items", request).await
    }

    pub async fn get_nft_transfers(
        &self,
        request: &NftTransfersRequest,
    ) -> Result<NftTransfersResponse> {
        self.transport.get("/api/v3/nft/transfers", request).await
    }

    // ── Stats ────────────────────────────────────────────────────

    pub async fn get_top_accounts_by_balance(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<TopAccount>> {
        self.transport
            .get(
                "/api/v3/topAccountsByBalance",
                &json!({ "limit": limit, "offset": offset }),
            )
            .await
    }

    // ── POST ─────────────────────────────────────────────────────

    /// Broadcasts a serialized external message.
    pub async fn send_message(&self, boc: &str) -> Result<SendMessageResponse> {
        self.transport
            .post("/api/v3/message", &SendMessageRequest { boc: boc.to_string() })
            .await
    }

    pub async fn estimate_fee(&self, request: &EstimateFeeRequest) -> Result<EstimateFeeResponse> {
        self.transport.post("/api/v3/estimateFee", request).await
    }

    pub async fn run_get_method(
        &self,
        request: &RunGetMethodRequest,
    ) -> Result<RunGetMethodResponse> {
        self.transport.post("/api/v3/runGetMethod", request).await
    }
}
