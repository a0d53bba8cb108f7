use crate::api::ImageApi;
use crate::error::Result;
use data::ImagesPage;
use log::warn;
use std::time::Duration;

/// Exponential backoff for page fetches: `base_delay * 2^attempt`, capped at `max_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (zero based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Fetches one page, retrying failures according to `policy`.
///
/// `sleep` is the platform timer; the browser passes a `gloo-timers` future.
pub async fn fetch_with_retry<A, S, F>(
    api: &A,
    after: Option<&str>,
    policy: RetryPolicy,
    mut sleep: S,
) -> Result<ImagesPage>
where
    A: ImageApi,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut attempt = 0;
    loop {
        match api.list_images(after).await {
            Ok(page) => return Ok(page),
            Err(err) if attempt < policy.max_retries => {
                let delay = policy.delay_for(attempt);
                warn!(
                    "fetching images after {:?} failed ({}), retry {}/{} in {:?}",
                    after,
                    err,
                    attempt + 1,
                    policy.max_retries,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
