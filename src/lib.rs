//! Typed async client for the TON Center HTTP APIs.
//!
//! TON Center exposes two API generations side by side: the node-backed
//! `/api/v2`, which wraps every result in an `{ok, result}` envelope, and the
//! indexer-backed `/api/v3`, which returns bare objects together with an
//! `address_book` side table. This crate offers one method per endpoint for
//! each of them.
//!
//! # Features
//!
//! - **`types` module** — Request and response types for both generations.
//!   Available with no additional features.
//! - **`client` module** (enabled by default) — An async client built on
//!   `reqwest`, exposing [`V2Api`] and [`V3Api`] through [`TonCenterClient`].
//!
//! # Quick start
//!
//! ```no_run
//! use toncenter_client::TonCenterClient;
//!
//! #[tokio::main]
//! async fn main() -> toncenter_client::client::Result<()> {
//!     let client = TonCenterClient::mainnet()?;
//!     let addresses = vec!["EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales".to_string()];
//!     let states = client.v3().get_account_states(&addresses, None).await?;
//!     for account in &states.accounts {
//!         let friendly = states
//!             .address_book
//!             .get(&account.address)
//!             .map(|entry| entry.user_friendly.as_str())
//!             .unwrap_or(&account.address);
//!         println!("{friendly}: {} nanotons", account.balance);
//!     }
//!     Ok(())
//! }
//! ```

pub mod params;
pub mod types;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod v2;
#[cfg(feature = "client")]
pub mod v3;

#[cfg(feature = "client")]
pub use client::{ApiError, ClientConfig, Error, TonCenterClient};
#[cfg(feature = "client")]
pub use v2::V2Api;
#[cfg(feature = "client")]
pub use v3::V3Api;

pub use params::{QueryError, flatten_query};
