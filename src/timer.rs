/// Interval counter - a stopwatch that ticks once per period
///
/// Independent of item resolution; nothing in the resolver touches it.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant};
use tracing::debug;

/// Default tick period
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Counts elapsed periods while running
pub struct IntervalCounter {
    duration: Arc<AtomicU64>,
    period: Duration,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl Default for IntervalCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalCounter {
    /// Create a counter ticking once per second
    pub fn new() -> Self {
        Self::with_period(DEFAULT_TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            duration: Arc::new(AtomicU64::new(0)),
            period,
            ticker: Mutex::new(None),
        }
    }

    /// Zero the counter and start ticking
    ///
    /// Must be called from within a tokio runtime. A running ticker is
    /// replaced.
    pub fn start(&self) {
        self.clear();
        self.set_time(0);

        let duration = Arc::clone(&self.duration);
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                duration.fetch_add(1, Ordering::Relaxed);
            }
        });

        debug!(period_ms = period.as_millis() as u64, "interval counter started");
        *self.lock_ticker() = Some(handle);
    }

    /// Stop ticking and zero the counter
    pub fn reset(&self) {
        self.clear();
        self.set_time(0);
    }

    /// Stop ticking, keeping the current count
    pub fn clear(&self) {
        if let Some(handle) = self.lock_ticker().take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_ticker().is_some()
    }

    pub fn get_time(&self) -> u64 {
        self.duration.load(Ordering::Relaxed)
    }

    pub fn set_time(&self, time: u64) {
        self.duration.store(time, Ordering::Relaxed);
    }

    fn lock_ticker(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // The guarded handle stays valid even if a holder panicked
        self.ticker.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for IntervalCounter {
    fn drop(&mut self) {
        self.clear();
    }
}
