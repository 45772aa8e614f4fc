/*
[INPUT]:  An in-flight API call plus a cancellation token or deadline
[OUTPUT]: The call's result, or a Cancelled/Timeout error
[POS]:    HTTP layer - caller-driven cancellation
[UPDATE]: When cancellation semantics change
*/

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::http::{ProxyhatError, Result};

/// Race `call` against `shutdown`. The in-flight request is dropped (and
/// its connection aborted) as soon as the token fires.
pub async fn cancellable<T, F>(shutdown: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = shutdown.cancelled() => Err(ProxyhatError::Cancelled),
        result = call => result,
    }
}

/// Bound `call` by a caller deadline, independent of the client timeout.
pub async fn with_deadline<T, F>(deadline: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(deadline, call)
        .await
        .unwrap_or(Err(ProxyhatError::Timeout { duration: deadline }))
}
