/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public ProxyHat client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the ProxyHat proxy-management API.
//!
//! ```no_run
//! # async fn run() -> proxyhat_client::Result<()> {
//! let client = proxyhat_client::ProxyhatClient::new("your-api-key")?;
//! let user = client.auth().user().await?;
//! println!("{} has {} left", user.email, user.traffic.total_human);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiRequest,
    ClientConfig,
    ProxyhatClient,
    ProxyhatError,
    RateLimitError,
    Result,
    cancellable,
    with_deadline,
};

// Re-export all types
pub use types::*;
