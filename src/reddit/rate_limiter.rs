// Request pacing for the Reddit OAuth API.
//
// Reddit allows 100 OAuth requests per minute per client. Rather than
// counting a window, we space requests evenly: each call waits until at
// least `interval` has passed since the previous one. This only paces
// requests; failed requests are never retried.

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Requests per minute Reddit grants an OAuth client.
pub const REDDIT_REQUESTS_PER_MINUTE: f64 = 100.0;

/// Enforces a minimum gap between consecutive requests.
pub struct RateLimiter {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter allowing `requests_per_minute` evenly spaced requests.
    pub fn per_minute(requests_per_minute: f64) -> Self {
        Self {
            interval: Duration::from_secs_f64(60.0 / requests_per_minute),
            last_request: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request is allowed, then claim the slot.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                // The scan is sequential, so holding the lock while
                // sleeping never blocks anyone else.
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}
