//! Simulated typing latency.
//!
//! The bot waits a short, slightly random time before replying. Picking the
//! duration ([`DelayPolicy`]) and waiting it out ([`Sleeper`]) are separate so
//! the browser, a test, or a server can each plug in their own timer.

use async_trait::async_trait;
use std::time::Duration;

/// Lower bound of the default typing delay.
pub const DEFAULT_TYPING_MIN: Duration = Duration::from_millis(600);
/// Exclusive upper bound of the default typing delay.
pub const DEFAULT_TYPING_MAX: Duration = Duration::from_millis(1000);

/// How long the bot "types" before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    /// Reply at once.
    Immediate,
    /// Always wait the same duration.
    Fixed(Duration),
    /// Wait a whole number of milliseconds in `[min, max)`.
    Jittered { min: Duration, max: Duration },
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::Jittered {
            min: DEFAULT_TYPING_MIN,
            max: DEFAULT_TYPING_MAX,
        }
    }
}

impl DelayPolicy {
    /// Picks a duration from caller-supplied entropy.
    #[must_use]
    pub fn pick_with(&self, entropy: u32) -> Duration {
        match *self {
            Self::Immediate => Duration::ZERO,
            Self::Fixed(duration) => duration,
            Self::Jittered { min, max } => {
                let span_ms = u64::try_from(max.saturating_sub(min).as_millis()).unwrap_or(u64::MAX);
                if span_ms == 0 {
                    return min;
                }
                min + Duration::from_millis(u64::from(entropy) % span_ms)
            }
        }
    }

    /// Picks a duration using the platform RNG.
    ///
    /// Falls back to the shortest delay if no randomness is available.
    #[must_use]
    pub fn pick(&self) -> Duration {
        match getrandom::u32() {
            Ok(entropy) => self.pick_with(entropy),
            Err(e) => {
                tracing::debug!(error = %e, "No entropy for typing delay, using minimum");
                self.pick_with(0)
            }
        }
    }
}

/// Suspends the current task without blocking the thread.
#[async_trait(?Send)]
pub trait Sleeper {
    /// Completes after roughly `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeper that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// A delay policy bound to a timer.
#[derive(Debug, Clone, Default)]
pub struct TypingDelay<S> {
    policy: DelayPolicy,
    sleeper: S,
}

impl<S: Sleeper> TypingDelay<S> {
    /// Binds a policy to a sleeper.
    #[must_use]
    pub fn new(policy: DelayPolicy, sleeper: S) -> Self {
        Self { policy, sleeper }
    }

    /// The policy in use.
    #[must_use]
    pub fn policy(&self) -> DelayPolicy {
        self.policy
    }

    /// Picks a duration and waits it out, returning what was waited.
    pub async fn wait(&self) -> Duration {
        let duration = self.policy.pick();
        self.sleeper.sleep(duration).await;
        duration
    }
}

impl TypingDelay<InstantSleeper> {
    /// A delay that never waits.
    #[must_use]
    pub fn none() -> Self {
        Self::new(DelayPolicy::Immediate, InstantSleeper)
    }
}
