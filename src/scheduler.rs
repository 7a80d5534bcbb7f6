/// Owner of the recurring one-second tick that drives elapsed time.
///
/// `arm` must replace any previously armed task so that at most one tick
/// source is live; `cancel` stops it. Both may be called when idle.
pub trait TickScheduler {
    fn arm(&mut self);

    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}

/// Scheduler without a clock: the caller drives ticks by hand. Counts arm
/// and cancel calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManualScheduler {
    armed: bool,
    pub arms: usize,
    pub cancels: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickScheduler for ManualScheduler {
    fn arm(&mut self) {
        self.armed = true;
        self.arms += 1;
    }

    fn cancel(&mut self) {
        if self.armed {
            self.cancels += 1;
        }
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
