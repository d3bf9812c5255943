//! Structural-change debouncing.
//!
//! Host re-renders arrive as bursts of structural-change notifications. Each
//! notification reschedules the deadline; work runs once, after the burst has
//! been quiet for the configured interval. Rescheduling is the only form of
//! cancellation.

/// Debounce state machine over a monotonic host tick clock.
#[derive(Clone, Copy, Debug)]
pub struct StructuralWatcher {
    debounce: u64,
    deadline: Option<u64>,
}

impl StructuralWatcher {
    pub fn new(debounce: u64) -> Self {
        Self {
            debounce,
            deadline: None,
        }
    }

    /// A structural change happened at `now`; (re)schedule the rebind.
    pub fn notify(&mut self, now: u64) {
        self.deadline = Some(now + self.debounce);
    }

    /// True once per scheduled burst, as soon as the deadline has passed.
    pub fn due(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}
