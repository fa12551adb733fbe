//! Types for the `/api/v3` indexer surface.
//!
//! Most list responses pair a primary collection with an [`AddressBook`].
//! The two are separate fields of every response struct and the client never
//! merges one into the other.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw address → display form, returned next to most v3 results.
pub type AddressBook = HashMap<String, AddressBookEntry>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBookEntry {
    pub user_friendly: String,
}

/// Result ordering for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Message direction relative to the queried account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    Out,
    #[serde(rename = "--")]
    Both,
}

// ── Accounts ────────────────────────────────────────────────────────

/// Current state of an account as returned by `accountStates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountState {
    pub address: String,
    pub account_state_hash: String,
    pub balance: String,
    pub status: String,
    pub code_boc: Option<String>,
    pub code_hash: Option<String>,
    pub data_boc: Option<String>,
    pub data_hash: Option<String>,
    pub frozen_hash: Option<String>,
    pub last_transaction_hash: String,
    pub last_transaction_lt: String,
}

/// Account state captured before or after a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStateSnapshot {
    pub hash: String,
    pub balance: Option<String>,
    pub account_status: Option<String>,
    pub frozen_hash: Option<String>,
    pub code_hash: Option<String>,
    pub data_hash: Option<String>,
    pub code_boc: Option<String>,
    pub data_boc: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletState {
    pub address: String,
    pub balance: String,
    pub code_hash: String,
    pub is_signature_allowed: bool,
    pub is_wallet: bool,
    pub last_transaction_hash: String,
    pub last_transaction_lt: String,
    pub seqno: Option<i64>,
    pub status: String,
    pub wallet_id: Option<i64>,
    pub wallet_type: Option<String>,
}

/// Result of `addressInformation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressInformation {
    pub balance: String,
    pub code: Option<String>,
    pub data: Option<String>,
    pub frozen_hash: Option<String>,
    pub last_transaction_hash: Option<String>,
    pub last_transaction_lt: Option<String>,
    pub status: String,
}

/// Result of `walletInformation`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletInformation {
    pub balance: String,
    pub wallet_type: Option<String>,
    pub seqno: Option<i64>,
    pub wallet_id: Option<i64>,
    pub last_transaction_hash: Option<String>,
    pub last_transaction_lt: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStatesResponse {
    pub accounts: Vec<AccountState>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletStatesResponse {
    pub wallets: Vec<WalletState>,
    pub address_book: AddressBook,
}

// ── Actions and events ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub action_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub details: serde_json::Value,
    pub raw_action: serde_json::Value,
    pub start_lt: String,
    pub end_lt: String,
    pub start_utime: i64,
    pub end_utime: i64,
    pub success: bool,
    pub trace_id: String,
    pub transactions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceInfo {
    pub classification_state: String,
    pub messages: i64,
    pub pending_messages: i64,
    pub trace_state: String,
    pub transactions: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub trace_id: String,
    pub external_hash: Option<String>,
    pub actions: Vec<Action>,
    pub start_lt: String,
    pub end_lt: String,
    pub start_utime: i64,
    pub end_utime: i64,
    pub is_incomplete: bool,
    pub mc_seqno_start: String,
    pub mc_seqno_end: String,
    pub trace: serde_json::Value,
    pub trace_info: TraceInfo,
    pub transactions: HashMap<String, Transaction>,
    pub transactions_order: Vec<String>,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsResponse {
    pub actions: Vec<Action>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsResponse {
    pub events: Vec<Event>,
    pub address_book: AddressBook,
}

/// Query for `events`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(rename = "tx_hash", skip_serializing_if = "Option::is_none")]
    pub tx_hashes: Option<Vec<String>>,
    #[serde(rename = "msg_hash", skip_serializing_if = "Option::is_none")]
    pub msg_hashes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mc_seqno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

// ── Blocks ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRef {
    pub workchain: i32,
    pub shard: String,
    pub seqno: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub workchain: i32,
    pub shard: String,
    pub seqno: i64,
    pub root_hash: String,
    pub file_hash: String,
    pub global_id: i64,
    pub version: i64,
    pub after_merge: bool,
    pub before_split: bool,
    pub after_split: bool,
    pub want_merge: bool,
    pub want_split: bool,
    pub key_block: bool,
    pub vert_seqno_incr: bool,
    pub flags: i64,
    pub gen_utime: String,
    pub start_lt: String,
    pub end_lt: String,
    pub validator_list_hash_short: i64,
    pub gen_catchain_seqno: i64,
    pub min_ref_mc_seqno: i64,
    pub prev_key_block_seqno: i64,
    pub vert_seqno: i64,
    pub master_ref_seqno: Option<i64>,
    pub rand_seed: String,
    pub created_by: String,
    pub tx_count: i64,
    pub masterchain_block_ref: Option<BlockRef>,
    pub prev_blocks: Vec<BlockRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksResponse {
    pub blocks: Vec<Block>,
}

/// First and latest indexed masterchain blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterchainInfo {
    pub first: Block,
    pub last: Block,
}

/// Query for `blocks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlocksRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workchain: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mc_seqno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

// ── Messages ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodedContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageContent {
    pub hash: String,
    pub body: String,
    pub decoded: Option<DecodedContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub hash: String,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub value: Option<String>,
    pub fwd_fee: Option<String>,
    pub ihr_fee: Option<String>,
    pub import_fee: Option<String>,
    pub created_lt: Option<String>,
    pub created_at: Option<String>,
    /// Number or `0x`-prefixed hex string depending on the indexer version.
    pub opcode: Option<serde_json::Value>,
    pub ihr_disabled: Option<bool>,
    pub bounce: Option<bool>,
    pub bounced: Option<bool>,
    pub message_content: Option<MessageContent>,
    pub init_state: Option<MessageContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
    pub address_book: AddressBook,
}

/// Query for `messages`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessagesRequest {
    #[serde(rename = "msg_hash", skip_serializing_if = "Option::is_none")]
    pub msg_hashes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<MessageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

// ── Transactions ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgSize {
    pub bits: String,
    pub cells: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPhase {
    pub success: bool,
    pub valid: bool,
    pub no_funds: bool,
    pub status_change: String,
    pub total_fwd_fees: Option<String>,
    pub total_action_fees: Option<String>,
    pub result_code: i64,
    pub result_arg: Option<i64>,
    pub tot_actions: i64,
    pub spec_actions: i64,
    pub skipped_actions: i64,
    pub msgs_created: i64,
    pub action_list_hash: String,
    pub tot_msg_size: MsgSize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BouncePhase {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg_size: Option<MsgSize>,
    pub req_fwd_fees: Option<String>,
    pub msg_fees: Option<String>,
    pub fwd_fees: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputePhase {
    pub skipped: bool,
    pub reason: Option<String>,
    pub success: Option<bool>,
    pub msg_state_used: Option<bool>,
    pub account_activated: Option<bool>,
    pub gas_fees: Option<String>,
    pub gas_used: Option<String>,
    pub gas_limit: Option<String>,
    pub gas_credit: Option<String>,
    pub mode: Option<i64>,
    pub exit_code: Option<i64>,
    pub exit_arg: Option<i64>,
    pub vm_steps: Option<i64>,
    pub vm_init_state_hash: Option<String>,
    pub vm_final_state_hash: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditPhase {
    pub due_fees_collected: Option<String>,
    pub credit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitInfo {
    pub cur_shard_pfx_len: i64,
    pub acc_split_depth: i64,
    pub this_addr: Option<String>,
    pub sibling_addr: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoragePhase {
    pub storage_fees_collected: String,
    pub storage_fees_due: Option<String>,
    pub status_change: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDescription {
    #[serde(rename = "type")]
    pub kind: String,
    pub aborted: bool,
    pub destroyed: bool,
    pub credit_first: bool,
    pub is_tock: bool,
    pub installed: bool,
    pub storage_ph: Option<StoragePhase>,
    pub credit_ph: Option<CreditPhase>,
    pub compute_ph: Option<ComputePhase>,
    pub action: Option<ActionPhase>,
    pub bounce: Option<BouncePhase>,
    pub split_info: Option<SplitInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub account: String,
    pub hash: String,
    pub lt: String,
    pub now: i64,
    pub mc_block_seqno: Option<i64>,
    pub trace_id: Option<String>,
    pub prev_trans_hash: String,
    pub prev_trans_lt: String,
    pub orig_status: String,
    pub end_status: String,
    pub total_fees: String,
    pub description: TransactionDescription,
    pub block_ref: Option<BlockRef>,
    pub in_msg: Option<Message>,
    pub out_msgs: Vec<Message>,
    pub account_state_before: Option<AccountStateSnapshot>,
    pub account_state_after: Option<AccountStateSnapshot>,
}

impl Transaction {
    /// Block time of the transaction.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        super::unix_time(self.now)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub address_book: AddressBook,
}

/// Query for `transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workchain: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seqno: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mc_seqno: Option<i64>,
    #[serde(rename = "account", skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,
    #[serde(rename = "exclude_account", skip_serializing_if = "Option::is_none")]
    pub exclude_accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Query for `transactionsByMasterchainBlock`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsByMasterchainBlockRequest {
    pub seqno: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Query for `transactionsByMessage`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionsByMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<MessageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

// ── Jettons ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonBurn {
    pub query_id: String,
    pub owner: String,
    pub jetton_wallet: String,
    pub jetton_master: String,
    pub amount: String,
    pub response_destination: Option<String>,
    pub custom_payload: Option<String>,
    pub trace_id: Option<String>,
    pub transaction_hash: String,
    pub transaction_lt: String,
    pub transaction_now: i64,
    pub transaction_aborted: bool,
}

impl JettonBurn {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        super::unix_time(self.transaction_now)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonMaster {
    pub address: String,
    pub admin_address: Option<String>,
    pub code_hash: String,
    pub data_hash: String,
    pub jetton_content: serde_json::Value,
    pub jetton_wallet_code_hash: String,
    pub last_transaction_lt: String,
    pub mintable: bool,
    pub total_supply: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonTransfer {
    pub query_id: String,
    pub source: String,
    pub destination: String,
    pub amount: String,
    pub source_wallet: String,
    pub jetton_master: String,
    pub response_destination: Option<String>,
    pub custom_payload: Option<String>,
    pub forward_ton_amount: Option<String>,
    pub forward_payload: Option<String>,
    pub trace_id: Option<String>,
    pub transaction_hash: String,
    pub transaction_lt: String,
    pub transaction_now: i64,
    pub transaction_aborted: bool,
}

impl JettonTransfer {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        super::unix_time(self.transaction_now)
    }
}

/// Airdrop claim data attached to mintless jetton wallets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MintlessInfo {
    pub amount: String,
    pub custom_payload_api_uri: Vec<String>,
    pub expire_at: i64,
    pub start_from: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonWallet {
    pub address: String,
    pub balance: String,
    pub owner: String,
    pub jetton: String,
    pub code_hash: String,
    pub data_hash: String,
    pub last_transaction_lt: String,
    pub mintless_info: Option<MintlessInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonBurnsResponse {
    pub jetton_burns: Vec<JettonBurn>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonMastersResponse {
    pub jetton_masters: Vec<JettonMaster>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonTransfersResponse {
    pub jetton_transfers: Vec<JettonTransfer>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JettonWalletsResponse {
    pub jetton_wallets: Vec<JettonWallet>,
    pub address_book: AddressBook,
}

/// Query for `jetton/burns`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JettonBurnsRequest {
    #[serde(rename = "address", skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "jetton_wallet", skip_serializing_if = "Option::is_none")]
    pub jetton_wallets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetton_master: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Query for `jetton/masters`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JettonMastersRequest {
    #[serde(rename = "address", skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "admin_address", skip_serializing_if = "Option::is_none")]
    pub admin_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Query for `jetton/transfers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JettonTransfersRequest {
    #[serde(rename = "owner_address", skip_serializing_if = "Option::is_none")]
    pub owner_addresses: Option<Vec<String>>,
    #[serde(rename = "jetton_wallet", skip_serializing_if = "Option::is_none")]
    pub jetton_wallets: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetton_master: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<MessageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

/// Query for `jetton/wallets`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JettonWalletsRequest {
    #[serde(rename = "address", skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "owner_address", skip_serializing_if = "Option::is_none")]
    pub owner_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jetton_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_zero_balance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

// ── NFTs ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollection {
    pub address: String,
    pub owner_address: Option<String>,
    pub next_item_index: String,
    pub collection_content: serde_json::Value,
    pub code_hash: String,
    pub data_hash: String,
    pub last_transaction_lt: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftItem {
    pub address: String,
    pub init: bool,
    pub index: String,
    pub collection_address: Option<String>,
    pub owner_address: Option<String>,
    pub content: serde_json::Value,
    pub code_hash: String,
    pub data_hash: String,
    pub last_transaction_lt: String,
    pub collection: Option<NftCollection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftTransfer {
    pub query_id: String,
    pub nft_address: String,
    pub nft_collection: Option<String>,
    pub old_owner: String,
    pub new_owner: String,
    pub response_destination: Option<String>,
    pub custom_payload: Option<String>,
    pub forward_amount: Option<String>,
    pub forward_payload: Option<String>,
    pub trace_id: Option<String>,
    pub transaction_hash: String,
    pub transaction_lt: String,
    pub transaction_now: i64,
    pub transaction_aborted: bool,
}

impl NftTransfer {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        super::unix_time(self.transaction_now)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftCollectionsResponse {
    pub nft_collections: Vec<NftCollection>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftItemsResponse {
    pub nft_items: Vec<NftItem>,
    pub address_book: AddressBook,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NftTransfersResponse {
    pub nft_transfers: Vec<NftTransfer>,
    pub address_book: AddressBook,
}

/// Query for `nft/collections`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NftCollectionsRequest {
    #[serde(rename = "collection_address", skip_serializing_if = "Option::is_none")]
    pub collection_addresses: Option<Vec<String>>,
    #[serde(rename = "owner_address", skip_serializing_if = "Option::is_none")]
    pub owner_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Query for `nft/items`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NftItemsRequest {
    #[serde(rename = "address", skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    #[serde(rename = "owner_address", skip_serializing_if = "Option::is_none")]
    pub owner_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_address: Option<String>,
    #[serde(rename = "index", skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Query for `nft/transfers`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NftTransfersRequest {
    #[serde(rename = "owner_address", skip_serializing_if = "Option::is_none")]
    pub owner_addresses: Option<Vec<String>>,
    #[serde(rename = "item_address", skip_serializing_if = "Option::is_none")]
    pub item_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<MessageDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_utime: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_lt: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

// ── Stats ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopAccount {
    pub account: String,
    pub balance: String,
}

// ── POST endpoints ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendMessageRequest {
    pub boc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SendMessageResponse {
    pub message_hash: String,
    pub message_hash_norm: Option<String>,
}

/// Body of `estimateFee`.
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    pub in_fwd_fee: i64,
    pub storage_fee: i64,
    pub gas_fee: i64,
    pub fwd_fee: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateFeeResponse {
    pub source_fees: Fees,
    pub destination_fees: Vec<Fees>,
}

/// A typed get-method stack entry, e.g. `{"type": "num", "value": "0x1"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl StackEntry {
    pub fn num(value: impl Into<String>) -> Self {
        Self {
            kind: "num".to_string(),
            value: value.into(),
        }
    }

    pub fn cell(boc: impl Into<String>) -> Self {
        Self {
            kind: "cell".to_string(),
            value: boc.into(),
        }
    }

    pub fn slice(boc: impl Into<String>) -> Self {
        Self {
            kind: "slice".to_string(),
            value: boc.into(),
        }
    }
}

/// Body of `runGetMethod`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunGetMethodRequest {
    pub address: String,
    pub method: String,
    pub stack: Vec<StackEntry>,
}

/// Result of `runGetMethod`. Stack items are left as raw JSON since their
/// shape depends on the entry type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunGetMethodResponse {
    pub gas_used: i64,
    pub exit_code: i64,
    pub stack: Vec<serde_json::Value>,
}
