//! Example: Query the Helium mainnet explorer API.
//!
//! Run with: RUST_LOG=debug cargo run --example explorer [ACCOUNT_ADDRESS]

use helium_api_client::{HeliumClient, RichestParams, SearchParams, bones_to_hnt, client::Result};

const DEFAULT_ACCOUNT: &str = "13GCcF7oGb6waFBzYDMmydmXx4vNDUZGX4LE3QHZxVqA7mb3M";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string());
    let client = HeliumClient::mainnet()?;

    println!("=== Helium Explorer API ===\n");

    // 1. Chain height
    println!("1. Fetching current height...");
    match client.blocks().height().await {
        Ok(height) => println!("   Height: {}", height.data.height),
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // 2. Account
    println!("2. Fetching account {address}...");
    match client.accounts().get(&address).await {
        Ok(account) => {
            let account = account.data;
            println!("   Balance: {:.8} HNT", account.balance_hnt());
            println!("   Data credits: {}", account.dc_balance);
            println!("   Nonce: {}", account.nonce);
        }
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // 3. Oracle price
    println!("3. Fetching current oracle price...");
    match client.oracle().current().await {
        Ok(price) => println!(
            "   ${:.4} per HNT at block {}",
            price.data.usd(),
            price.data.block
        ),
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // 4. Network stats
    println!("4. Fetching network stats...");
    match client.stats().get().await {
        Ok(stats) => {
            let counts = stats.data.counts;
            println!("   Hotspots: {}", counts.hotspots);
            println!("   Validators: {}", counts.validators);
            println!("   Cities: {}", counts.cities);
            println!("   Token supply: {:.0} HNT", stats.data.token_supply);
        }
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // 5. Richest accounts
    println!("5. Fetching the five richest accounts...");
    match client
        .accounts()
        .richest(&RichestParams::with_limit(5))
        .await
    {
        Ok(page) => {
            for account in page {
                println!(
                    "   {} {:.2} HNT",
                    account.address,
                    bones_to_hnt(account.balance)
                );
            }
        }
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    // 6. Hotspot search
    println!("6. Searching hotspots named like \"lemon\"...");
    match client.hotspots().search(&SearchParams::new("lemon")).await {
        Ok(page) => {
            println!("   {} results (more: {})", page.len(), page.has_more());
            for hotspot in page.data.iter().take(3) {
                let city = hotspot.geocode.long_city.as_deref().unwrap_or("unknown");
                println!("   {} in {}", hotspot.name, city);
            }
        }
        Err(e) => println!("   Error: {e}"),
    }

    println!("\n=== Done! ===");
    Ok(())
}
