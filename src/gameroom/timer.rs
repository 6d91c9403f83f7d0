use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Configuration for game clocks.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig {
    /// Seconds each side starts with.
    pub budget: u32,
    /// Wall time between ticks.
    pub period: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            budget: crate::CLOCK_SECONDS,
            period: crate::TICK_PERIOD,
        }
    }
}

/// Cancellable periodic task driving one game's clock.
///
/// The task calls `beat` once per period, starting one period after spawn,
/// until `beat` returns false or the ticker is cancelled. Cancelling twice
/// is harmless, and dropping a ticker cancels it.
#[derive(Debug, Default)]
pub struct Ticker {
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick task onto the current tokio runtime.
    pub fn spawn<F>(period: Duration, beat: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if !beat() {
                    break;
                }
            }
        });
        Self { task: Some(task) }
    }
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;
    #[test]
    fn default_config() {
        let config = ClockConfig::default();
        assert_eq!(config.budget, 600);
        assert_eq!(config.period, Duration::from_secs(1));
    }
    #[test]
    fn idle_ticker_cancels_cleanly() {
        let mut ticker = Ticker::default();
        assert!(!ticker.is_running());
        ticker.cancel();
        ticker.cancel();
    }
    #[tokio::test(start_paused = true)]
    async fn beats_once_per_period() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let ticker = Ticker::spawn(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(ticker.is_running());
    }
    #[tokio::test(start_paused = true)]
    async fn no_beats_after_cancel() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let mut ticker = Ticker::spawn(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.cancel();
        ticker.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!ticker.is_running());
    }
    #[tokio::test(start_paused = true)]
    async fn stops_when_beat_declines() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let ticker = Ticker::spawn(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst) < 1
        });
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(!ticker.is_running());
    }
}
