//! Trailing-edge debounce.

/// Holds at most one pending payload; each call replaces the payload and
/// re-arms the deadline. Only the last call within a quiet window fires.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait_ms: f64,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    deadline: f64,
    payload: T,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: f64) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Record a call at `now_ms`. Any previously pending payload is
    /// discarded and the deadline moves to `now_ms + wait`.
    pub fn call(&mut self, now_ms: f64, payload: T) {
        self.pending = Some(Pending {
            deadline: now_ms + self.wait_ms,
            payload,
        });
    }

    /// Deadline of the pending payload, if any. Hosts schedule a wakeup at
    /// this time and then `poll`.
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire if the quiet window has elapsed. Wakeups armed before a newer
    /// call land early and return `None`; the pending payload stays armed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.deadline);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
