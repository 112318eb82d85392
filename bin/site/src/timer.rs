//! Browser timer for the chatbot typing delay and the contact form.

use async_trait::async_trait;
use magmist_conversation::Sleeper;
use std::time::Duration;

/// Sleeps on a `setTimeout` in the browser.
///
/// Server-rendered pages never await it; outside the client build it
/// returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = duration;
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use magmist_conversation::{DelayPolicy, TypingDelay};

    #[tokio::test]
    async fn server_side_sleep_returns_immediately() {
        let delay = TypingDelay::new(DelayPolicy::Fixed(Duration::from_secs(3600)), BrowserSleeper);
        let started = std::time::Instant::now();
        let waited = delay.wait().await;
        assert_eq!(waited, Duration::from_secs(3600));
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
