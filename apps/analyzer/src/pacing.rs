use std::time::Duration;

use async_trait::async_trait;

/// Wait before the single retry after a search 429.
pub const RATE_LIMIT_BACKOFF: Duration = Duration::from_secs(5);
/// Wait after every search call, whatever its outcome.
pub const SEARCH_DELAY: Duration = Duration::from_secs(1);
/// Wait after each organization is fully processed.
pub const ORGANIZATION_DELAY: Duration = Duration::from_secs(1);

/// The pacing seam. Production code sleeps on the tokio timer; tests record the
/// requested durations instead of waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
