//! Example: Query TON mainnet through both API generations.
//!
//! Run with: cargo run --example mainnet
//!
//! Set `TONCENTER_API_KEY` to lift the anonymous rate limit.

use toncenter_client::types::{v2, v3};
use toncenter_client::{ClientConfig, TonCenterClient, client::Result};

const WHALES_POOL: &str = "EQCkR1cGmnsE45N4K0otPl5EnxnRakmGqeJUNua5fkWhales";

#[tokio::main]
async fn main() -> Result<()> {
    let client = TonCenterClient::with_config(ClientConfig::from_env())?;

    println!("=== TON Center API Client ===\n");

    // 1. v2 address information
    println!("1. Fetching address information (v2)...");
    let info = client.v2().get_address_information(WHALES_POOL).await?;
    println!("   Balance: {} nanotons", info.result.balance);
    println!("   State: {}", info.result.state);
    println!(
        "   Last transaction lt: {}",
        info.result.last_transaction_id.lt
    );
    println!();

    // 2. v2 transactions
    println!("2. Fetching recent transactions (v2)...");
    let request = v2::TransactionsRequest {
        limit: Some(5),
        ..v2::TransactionsRequest::new(WHALES_POOL)
    };
    let transactions = client.v2().get_transactions(&request).await?;
    for tx in &transactions.result {
        let when = tx.time().map(|t| t.to_rfc3339()).unwrap_or_default();
        println!("   {} fee={} at {}", tx.transaction_id.lt, tx.fee, when);
    }
    println!();

    // 3. v3 account states
    println!("3. Fetching account states (v3)...");
    let states = client
        .v3()
        .get_account_states(&[WHALES_POOL.to_string()], None)
        .await?;
    for account in &states.accounts {
        let friendly = states
            .address_book
            .get(&account.address)
            .map(|entry| entry.user_friendly.as_str())
            .unwrap_or(&account.address);
        println!("   {} status={} balance={}", friendly, account.status, account.balance);
    }
    println!();

    // 4. v3 jetton masters
    println!("4. Fetching jetton masters (v3)...");
    let masters = client
        .v3()
        .get_jetton_masters(&v3::JettonMastersRequest {
            limit: Some(5),
            ..Default::default()
        })
        .await?;
    println!("   Jetton masters: {}", masters.jetton_masters.len());
    if let Some(first) = masters.jetton_masters.first() {
        println!("   First: {} (supply: {})", first.address, first.total_supply);
    }
    println!();

    // 5. Masterchain info
    println!("5. Fetching masterchain info (v3)...");
    let masterchain = client.v3().get_masterchain_info().await?;
    println!("   Last seqno: {}", masterchain.last.seqno);

    println!("\n=== Done! ===");
    Ok(())
}
