//! Press-and-hold repeat scheduler.
//!
//! [`KeyRepeater::start`] fires the action once synchronously, then arms a
//! one-shot delay task.  When the delay elapses the delay task arms the tick
//! task and retires; the tick task fires the action on every tick until
//! [`KeyRepeater::stop`].  With the default [`RepeatConfig`] a press at t=0
//! fires at t=0, 400, 460, 520, … ms.
//!
//! Both task handles are owned exclusively by the repeater.  `start` is
//! reentrant — it replaces any running sequence instead of compounding
//! timers — and `stop` is an unconditional, immediate cancel that is safe to
//! call when nothing is running.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// RepeatConfig
// ---------------------------------------------------------------------------

/// Timing parameters for long-press repeat.
///
/// Immutable for the lifetime of a [`KeyRepeater`].  Zero durations are legal
/// and give effectively-immediate repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatConfig {
    /// Long-press delay before repeating starts.
    pub initial_delay: Duration,
    /// Repeat interval once the initial delay has elapsed.
    pub interval: Duration,
}

impl RepeatConfig {
    /// Construct a config from millisecond values.
    pub const fn from_millis(initial_delay_ms: u64, interval_ms: u64) -> Self {
        Self {
            initial_delay: Duration::from_millis(initial_delay_ms),
            interval: Duration::from_millis(interval_ms),
        }
    }
}

impl Default for RepeatConfig {
    /// 400 ms delay, 60 ms interval.
    fn default() -> Self {
        Self::from_millis(400, 60)
    }
}

// ---------------------------------------------------------------------------
// RepeatTimers
// ---------------------------------------------------------------------------

/// Timer handles for one press, owned behind the repeater's mutex.
///
/// At most one of each may be live at a time.  The delay task's sole job is
/// to arm the tick task exactly once, then clear its own handle.  `generation`
/// invalidates delay tasks that lost a race with `stop` or a newer `start`.
#[derive(Default)]
struct RepeatTimers {
    generation: u64,
    delay: Option<JoinHandle<()>>,
    tick: Option<JoinHandle<()>>,
}

// ---------------------------------------------------------------------------
// KeyRepeater
// ---------------------------------------------------------------------------

/// Long-press repeat scheduler for one key surface.
///
/// One repeater is shared by all keys of a panel: a press can only hold one
/// key at a time, and `start` replaces any previous sequence.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use inkboard::repeat::{KeyRepeater, RepeatConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let repeater = KeyRepeater::with_config(RepeatConfig {
///         initial_delay: Duration::from_millis(300),
///         interval: Duration::from_millis(40),
///     });
///     repeater.start(|| println!("tick"));
///     repeater.stop();
/// }
/// ```
pub struct KeyRepeater {
    config: RepeatConfig,
    timers: Arc<Mutex<RepeatTimers>>,
}

impl KeyRepeater {
    /// Create a repeater with the default 400 ms / 60 ms timing.
    pub fn new() -> Self {
        Self::with_config(RepeatConfig::default())
    }

    /// Create a repeater with explicit timing.
    pub fn with_config(config: RepeatConfig) -> Self {
        Self {
            config,
            timers: Arc::new(Mutex::new(RepeatTimers::default())),
        }
    }

    /// The timing this repeater was created with.
    pub fn config(&self) -> RepeatConfig {
        self.config
    }

    /// Fire `action` once now and begin the delay-then-repeat sequence.
    ///
    /// Any sequence already running is stopped first, so calling `start`
    /// twice never leaves two timer chains live.  Repetition is unbounded —
    /// the caller must [`stop`](Self::stop) on pointer up/leave/cancel.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime (timers are tokio tasks).
    /// A panic raised by the immediate `action()` call propagates to the
    /// caller and leaves the repeater idle; a panic on a later tick is caught
    /// and logged, and ticking continues.
    pub fn start<F>(&self, action: F)
    where
        F: Fn() + Send + 'static,
    {
        let my_gen = self.invalidate();

        // Press-and-act: the key fires on touch-down, not on timer expiry.
        action();

        let timers = Arc::clone(&self.timers);
        let delay = self.config.initial_delay;
        // A zero interval would tick without ever yielding; 1 ms is still
        // effectively-immediate repeat.
        let interval = self.config.interval.max(Duration::from_millis(1));

        let delay_handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let tick_handle = tokio::spawn(async move {
                loop {
                    if catch_unwind(AssertUnwindSafe(|| action())).is_err() {
                        log::warn!("repeat: key action panicked, tick skipped");
                    }
                    tokio::time::sleep(interval).await;
                }
            });

            let mut t = timers.lock().unwrap();
            if t.generation != my_gen {
                // stop() or a newer start() won the race while we slept.
                tick_handle.abort();
                return;
            }
            t.tick = Some(tick_handle);
            // The delay timer cannot fire twice; retire its handle.
            t.delay = None;
        });

        let mut t = self.timers.lock().unwrap();
        if t.generation != my_gen {
            delay_handle.abort();
        } else if t.tick.is_none() {
            // With a zero delay the task may already have armed the tick
            // timer and retired itself; only then is there nothing to store.
            t.delay = Some(delay_handle);
        }
    }

    /// Cancel the running sequence, if any.
    ///
    /// Unconditional and immediate: pending and active timers are aborted
    /// synchronously.  Calling `stop` when nothing is running is a no-op.
    pub fn stop(&self) {
        self.invalidate();
    }

    /// Abort both timer handles and bump the generation so that any delay
    /// task still in flight declines to arm a tick timer.
    fn invalidate(&self) -> u64 {
        let mut t = self.timers.lock().unwrap();
        t.generation = t.generation.wrapping_add(1);
        if let Some(handle) = t.delay.take() {
            handle.abort();
        }
        if let Some(handle) = t.tick.take() {
            handle.abort();
        }
        t.generation
    }
}

impl Default for KeyRepeater {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KeyRepeater {
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Let `ms` of paused tokio time pass and let spawned timer tasks run.
    ///
    /// A real sleep rather than `time::advance`: freshly spawned timer tasks
    /// register their deadlines while this task is parked, before the paused
    /// clock auto-advances, so a `start` immediately followed by `advance_ms`
    /// keeps the t=0 baseline.
    async fn advance_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        // The delay task arms the tick task in a second spawn; give the
        // scheduler a few turns so the whole chain settles.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn counting_action(count: &Arc<AtomicUsize>) -> impl Fn() + Send + 'static {
        let count = Arc::clone(count);
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    // ---- Immediate fire ----------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn start_fires_exactly_once_before_any_timer() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        repeater.start(counting_action(&count));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    // ---- Delay-then-repeat timing ------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn no_repeat_before_initial_delay() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        repeater.start(counting_action(&count));
        advance_ms(399).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn repeats_at_interval_after_delay() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        // Fires at t=0, then 400, 460, 520.
        repeater.start(counting_action(&count));
        advance_ms(400).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        advance_ms(60).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        advance_ms(60).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_mid_sequence_suppresses_next_tick() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        // Scenario from the timing contract: start at t=0, stop at t=430 —
        // fires at 0 and 400, nothing at 460 or later.
        repeater.start(counting_action(&count));
        advance_ms(400).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        advance_ms(30).await;
        repeater.stop();
        advance_ms(500).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_delay_cancels_everything() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        repeater.start(counting_action(&count));
        advance_ms(100).await;
        repeater.stop();
        advance_ms(2_000).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    // ---- Idempotent stop ---------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn stop_when_idle_is_a_noop() {
        let repeater = KeyRepeater::new();
        repeater.stop();
        repeater.stop();
    }

    // ---- Restart safety ----------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn restart_replaces_the_running_sequence() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        repeater.start(counting_action(&count));
        advance_ms(200).await;

        // Second press before the first delay elapsed: exactly one timer
        // chain must survive.  Fires now (t=200), then at t=600, 660, …
        repeater.start(counting_action(&count));
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // t=400: the first press's delay expiry must NOT fire.
        advance_ms(200).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        // t=600: the second press's delay expires.
        advance_ms(200).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        advance_ms(60).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    // ---- Zero durations ----------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn zero_delay_and_interval_repeat_immediately() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::with_config(RepeatConfig::from_millis(0, 0));

        repeater.start(counting_action(&count));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        advance_ms(5).await;
        let after_5ms = count.load(Ordering::SeqCst);
        assert!(after_5ms >= 2, "expected repeats within 5 ms, got {after_5ms}");

        repeater.stop();
        let stopped = count.load(Ordering::SeqCst);
        advance_ms(50).await;
        assert_eq!(count.load(Ordering::SeqCst), stopped);
    }

    // ---- Panic isolation ---------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn panicking_tick_does_not_kill_the_sequence() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        let counter = Arc::clone(&count);
        repeater.start(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            // The tick right after the delay (n == 1) blows up.
            if n == 1 {
                panic!("boom");
            }
        });

        advance_ms(400).await; // panicking tick
        advance_ms(60).await; // must still fire
        advance_ms(60).await;

        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    // ---- Drop --------------------------------------------------------------

    #[tokio::test(start_paused = true)]
    async fn dropping_the_repeater_stops_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let repeater = KeyRepeater::new();

        repeater.start(counting_action(&count));
        advance_ms(400).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        drop(repeater);
        advance_ms(1_000).await;

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
