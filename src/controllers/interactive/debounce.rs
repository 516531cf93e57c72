use std::time::Duration;

/// Trailing-edge debounce.
///
/// Every `schedule` pushes the deadline to `now + quiet_period`; `poll` fires
/// at most once per burst. Time is supplied by the caller so the task never
/// reads a clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebouncedTask {
    quiet_period: Duration,
    deadline: Option<Duration>,
}

impl DebouncedTask {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Cancels any pending deadline and schedules a new one.
    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.quiet_period));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns `true` exactly once when `now` reaches the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
