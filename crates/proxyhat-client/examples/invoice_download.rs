/*
[INPUT]:  PROXYHAT_API_KEY from the environment, payment id as first argument
[OUTPUT]: invoice-<id>.pdf written to the working directory
[POS]:    Examples - binary download with Ctrl-C cancellation
[UPDATE]: When invoice formats or cancellation helpers change
*/

use proxyhat_client::*;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Example: Download a payment invoice, abortable with Ctrl-C
#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let Some(payment_id) = std::env::args().nth(1) else {
        eprintln!("usage: invoice_download <payment-id>");
        return;
    };

    let client = match ProxyhatClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let shutdown = CancellationToken::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        trigger.cancel();
    });

    let download = async {
        let response = client.payments().invoice(&payment_id, None).await?;
        Ok::<_, ProxyhatError>(response.bytes().await?)
    };

    match cancellable(&shutdown, download).await {
        Ok(bytes) => {
            let file = format!("invoice-{payment_id}.pdf");
            match tokio::fs::write(&file, &bytes).await {
                Ok(()) => println!("✓ Wrote {} bytes to {}", bytes.len(), file),
                Err(e) => eprintln!("✗ Failed to write {}: {}", file, e),
            }
        }
        Err(e) if e.is_not_found() => eprintln!("✗ No invoice for payment {}", payment_id),
        Err(e) if e.is_cancellation() => eprintln!("✗ Download aborted"),
        Err(e) => eprintln!("✗ Error: {}", e),
    }
}
