//! Types for the `/api/v2` surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The `{ok, result}` envelope wrapping every v2 result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct V2Response<T> {
    pub ok: bool,
    pub result: T,
    #[serde(rename = "@extra", default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

// ── Accounts ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInformation {
    #[serde(rename = "@type")]
    pub kind: String,
    pub balance: String,
    pub code: String,
    pub data: String,
    pub last_transaction_id: TransactionId,
    pub block_id: BlockIdExt,
    pub frozen_hash: String,
    pub sync_utime: i64,
    #[serde(rename = "@extra")]
    pub extra: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAddress {
    #[serde(rename = "@type")]
    pub kind: String,
    pub account_address: String,
}

/// Logical time and hash identifying one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionId {
    #[serde(rename = "@type")]
    pub kind: String,
    pub lt: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockIdExt {
    #[serde(rename = "@type")]
    pub kind: String,
    pub workchain: i32,
    pub shard: String,
    pub seqno: i64,
    pub root_hash: String,
    pub file_hash: String,
}

/// Wallet-specific part of an extended account state. Only the fields shared
/// by the common wallet contracts are typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletAccountState {
    #[serde(rename = "@type")]
    pub kind: String,
    pub wallet_id: String,
    pub seqno: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedAddressInformation {
    #[serde(rename = "@type")]
    pub kind: String,
    pub address: AccountAddress,
    pub balance: String,
    pub last_transaction_id: TransactionId,
    pub block_id: BlockIdExt,
    pub sync_utime: i64,
    pub account_state: WalletAccountState,
    pub revision: i64,
    #[serde(rename = "@extra")]
    pub extra: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletInformation {
    pub wallet: bool,
    pub balance: String,
    pub account_state: String,
    pub wallet_type: String,
    pub seqno: i64,
    pub last_transaction_id: TransactionId,
    pub wallet_id: i64,
}

// ── Transactions ────────────────────────────────────────────────────

/// Message payload. `@type` tells which of the optional fields is set:
/// `msg.dataText` carries `text`, `msg.dataRaw` carries `body` and
/// `init_state`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageData {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_state: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMessage {
    #[serde(rename = "@type")]
    pub kind: String,
    pub source: String,
    pub destination: String,
    pub value: String,
    pub fwd_fee: String,
    pub ihr_fee: String,
    pub created_lt: String,
    pub body_hash: String,
    pub msg_data: MessageData,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(rename = "@type")]
    pub kind: String,
    pub address: AccountAddress,
    pub utime: i64,
    pub data: String,
    pub transaction_id: TransactionId,
    pub fee: String,
    pub storage_fee: String,
    pub other_fee: String,
    pub in_msg: Option<RawMessage>,
    pub out_msgs: Vec<RawMessage>,
}

impl Transaction {
    /// Block time of the transaction.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        super::unix_time(self.utime)
    }
}

/// Query for `getTransactions`. Only `address` is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival: Option<bool>,
}

impl TransactionsRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

// ── Tokens ──────────────────────────────────────────────────────────

/// Off-chain or on-chain token metadata reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonMasterData {
    /// Raw JSON number; supplies routinely exceed 64 bits.
    pub total_supply: serde_json::Value,
    pub mintable: bool,
    pub admin_address: Option<String>,
    pub jetton_content: TokenContent,
    pub jetton_wallet_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonWalletData {
    pub balance: serde_json::Value,
    pub owner: String,
    pub jetton: String,
    pub jetton_wallet_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftItemData {
    pub init: bool,
    /// Raw JSON number; DNS item indexes are 256-bit hashes.
    pub index: serde_json::Value,
    pub owner_address: Option<String>,
    pub collection_address: Option<String>,
    pub content: TokenContent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollectionData {
    /// `-1` for collections without sequential indexes.
    pub next_item_index: serde_json::Value,
    pub collection_content: TokenContent,
    pub owner_address: Option<String>,
}

/// Result of `getTokenData`, discriminated by `contract_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "contract_type", rename_all = "snake_case")]
pub enum TokenData {
    JettonMaster(JettonMasterData),
    JettonWallet(JettonWalletData),
    NftItem(NftItemData),
    NftCollection(NftCollectionData),
}

// ── Addresses ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    pub b64: String,
    pub b64url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedAddress {
    pub raw_form: String,
    pub bounceable: AddressForm,
    pub non_bounceable: AddressForm,
    pub given_type: String,
    pub test_only: bool,
}

// ── POST bodies ─────────────────────────────────────────────────────

/// Body of `runGetMethod`. Stack entries are `[type, value]` pairs such as
/// `["num", "0x1"]`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunGetMethodRequest {
    pub address: String,
    pub method: String,
    pub stack: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqno: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendQueryRequest {
    pub address: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EstimateFeeRequest {
    pub address: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_chksig: Option<bool>,
}

/// A JSON-RPC 2.0 call forwarded through `jsonRPC`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub method: String,
    pub params: serde_json::Value,
    pub id: String,
    pub jsonrpc: String,
}

impl JsonRpcRequest {
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            params,
            id: "1".to_string(),
            jsonrpc: "2.0".to_string(),
        }
    }
}
