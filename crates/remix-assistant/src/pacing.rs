//! Timing for the chat widget: how long the assistant "thinks" and how fast
//! replies are typed out.
//!
//! Both are UX pacing only. Production uses [`JitteredDelay`]; tests use
//! [`InstantDelay`] to run whole conversations without waiting.

use std::future::Future;
use std::ops::Range;
use std::time::Duration;

use rand::Rng;
use remix_core::config::AssistantConfig;

/// Source of pacing delays.
///
/// Implementations must be cheap to call; the engine asks for a fresh
/// interval for every revealed character.
pub trait DelayProvider: Send + Sync + 'static {
    /// Delay between a user turn and the assistant reply.
    fn response_delay(&self) -> Duration;

    /// Delay before revealing the next character of a reply.
    fn reveal_interval(&self) -> Duration;

    /// Wait for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Uniformly jittered delays driven by the tokio timer.
#[derive(Debug, Clone)]
pub struct JitteredDelay {
    response_ms: Range<u64>,
    reveal_ms: Range<u64>,
}

impl JitteredDelay {
    /// Half-open millisecond ranges. An empty range (`min == max`) always
    /// yields `min`.
    pub fn new(response_ms: Range<u64>, reveal_ms: Range<u64>) -> Self {
        Self {
            response_ms,
            reveal_ms,
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(
            config.response_delay_min_ms..config.response_delay_max_ms,
            config.reveal_min_ms..config.reveal_max_ms,
        )
    }
}

impl Default for JitteredDelay {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

fn sample_ms(range: &Range<u64>) -> Duration {
    if range.is_empty() {
        return Duration::from_millis(range.start);
    }
    Duration::from_millis(rand::rng().random_range(range.clone()))
}

impl DelayProvider for JitteredDelay {
    fn response_delay(&self) -> Duration {
        sample_ms(&self.response_ms)
    }

    fn reveal_interval(&self) -> Duration {
        sample_ms(&self.reveal_ms)
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Zero delays; every sleep completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

impl DelayProvider for InstantDelay {
    fn response_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn reveal_interval(&self) -> Duration {
        Duration::ZERO
    }

    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges_match_config() {
        let delay = JitteredDelay::default();
        assert_eq!(delay.response_ms, 800..1600);
        assert_eq!(delay.reveal_ms, 15..25);
    }

    #[test]
    fn test_response_delay_within_half_open_range() {
        let delay = JitteredDelay::default();
        for _ in 0..500 {
            let d = delay.response_delay();
            assert!(d >= Duration::from_millis(800));
            assert!(d < Duration::from_millis(1600));
        }
    }

    #[test]
    fn test_reveal_interval_within_half_open_range() {
        let delay = JitteredDelay::default();
        for _ in 0..500 {
            let d = delay.reveal_interval();
            assert!(d >= Duration::from_millis(15));
            assert!(d < Duration::from_millis(25));
        }
    }

    #[test]
    fn test_empty_range_yields_min() {
        let delay = JitteredDelay::new(5..5, 0..0);
        assert_eq!(delay.response_delay(), Duration::from_millis(5));
        assert_eq!(delay.reveal_interval(), Duration::ZERO);
    }

    #[test]
    fn test_from_config() {
        let config = AssistantConfig {
            response_delay_min_ms: 10,
            response_delay_max_ms: 11,
            ..AssistantConfig::default()
        };
        let delay = JitteredDelay::from_config(&config);
        assert_eq!(delay.response_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_instant_delay_is_zero() {
        assert_eq!(InstantDelay.response_delay(), Duration::ZERO);
        assert_eq!(InstantDelay.reveal_interval(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_instant_sleep_completes() {
        tokio::time::timeout(Duration::from_secs(1), InstantDelay.sleep(Duration::from_secs(60)))
            .await
            .expect("instant sleep should not wait");
    }

    #[tokio::test(start_paused = true)]
    async fn test_jittered_sleep_uses_tokio_timer() {
        let delay = JitteredDelay::default();
        let start = tokio::time::Instant::now();
        delay.sleep(Duration::from_millis(900)).await;
        assert!(start.elapsed() >= Duration::from_millis(900));
    }
}
