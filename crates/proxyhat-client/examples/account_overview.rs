/*
[INPUT]:  PROXYHAT_API_KEY (and optional PROXYHAT_BASE_URL) from the environment
[OUTPUT]: Account, sub-user and traffic summary on stdout
[POS]:    Examples - read-only account queries
[UPDATE]: When adding new read-only endpoints worth showcasing
*/

use proxyhat_client::*;
use tracing_subscriber::EnvFilter;

/// Example: Summarise the account behind an API key
///
/// Run with `RUST_LOG=proxyhat_client=debug` to see each dispatched request.
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    println!("=== ProxyHat Account Overview ===\n");

    let client = match ProxyhatClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.base_url());

    match client.auth().user().await {
        Ok(user) => {
            println!("✓ Logged in as {} <{}>", user.name, user.email);
            println!("  Traffic left: {}", user.traffic.total_human);
        }
        Err(e) if e.is_authentication_error() => {
            eprintln!("✗ API key rejected: {}", e);
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nListing sub-users...");
    match client.sub_users().list().await {
        Ok(users) => {
            for user in &users {
                let limit = if user.is_traffic_limited {
                    user.traffic_limit.to_string()
                } else {
                    "unlimited".to_string()
                };
                println!("  {} used {} / {}", user.proxy_username, user.used_traffic, limit);
            }
            println!("✓ {} sub-user(s)", users.len());
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying traffic for the last 24h...");
    match client.analytics().traffic_total(None).await {
        Ok(total) => println!("✓ Total bytes: {}", total.total),
        Err(e) if e.is_rate_limited() => {
            println!("✗ Rate limited, retry after {:?}", e.retry_after().unwrap_or_default());
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account overview complete");
}
