#![cfg(feature = "std")]

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::scheduler::TickScheduler;

/// [`TickScheduler`] backed by a tokio interval task.
///
/// Each armed task sends its generation number over the channel returned by
/// [`IntervalScheduler::new`] once per period. Re-arming aborts the previous
/// task and bumps the generation, so ticks still queued from an older task
/// can be told apart with [`IntervalScheduler::is_current`] and dropped.
///
/// Must be armed from within a tokio runtime.
pub struct IntervalScheduler {
    period: Duration,
    tx: mpsc::UnboundedSender<u64>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalScheduler {
    /// One tick per second.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<u64>) {
        Self::with_period(Duration::from_secs(1))
    }

    pub fn with_period(period: Duration) -> (Self, mpsc::UnboundedReceiver<u64>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            period,
            tx,
            handle: None,
            generation: 0,
        };
        (scheduler, rx)
    }

    /// Generation of the most recently armed task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` if `generation` came from the task that is armed right now.
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }
}

impl TickScheduler for IntervalScheduler {
    fn arm(&mut self) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let period = self.period;
        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            timer.tick().await; // First tick completes immediately, skip it
            loop {
                timer.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        }));
        log::debug!("tick task armed (generation {})", generation);
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("tick task cancelled (generation {})", self.generation);
        }
    }

    fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
