//! Rate-limiting wrappers for high-frequency browser events.
//!
//! The timing rules live in two small state machines: [`Debounce`] keeps the
//! one pending timer handle and [`Throttle`] gates on caller-supplied
//! timestamps. [`debounce`] and [`throttle`] bind them to browser timers.

use crate::dom::now_ms;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Trailing-edge debounce: holds the single pending call.
///
/// `H` is a timer handle that cancels itself on drop, like
/// `gloo_timers::callback::Timeout`. Scheduling a new handle hands back the
/// one it supersedes so the caller drops it, cancelling that call.
#[derive(Debug)]
pub struct Debounce<H> {
    pending: Option<H>,
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> Debounce<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handle` the pending call; returns the superseded one.
    #[must_use = "dropping the returned handle is what cancels it"]
    pub fn schedule(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    pub fn pending(&self) -> Option<&H> {
        self.pending.as_ref()
    }
}

/// Leading-edge throttle. Calls inside the window after an admitted call are
/// dropped, not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_admitted_ms: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_admitted_ms: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        let open = self
            .last_admitted_ms
            .map_or(true, |last| now_ms - last >= self.limit_ms);
        if open {
            self.last_admitted_ms = Some(now_ms);
        }
        open
    }
}

/// Wrap `f` so it runs `wait_ms` after the last call of the returned closure.
pub fn debounce<F>(f: F, wait_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let f = Rc::new(RefCell::new(f));
    let mut state = Debounce::new();
    move || {
        let f = f.clone();
        let timeout = Timeout::new(wait_ms, move || (*f.borrow_mut())());
        // Dropping the superseded Timeout clears it.
        drop(state.schedule(timeout));
    }
}

/// Wrap `f` so it runs at most once per `limit_ms`, starting immediately.
pub fn throttle<F>(mut f: F, limit_ms: u32) -> impl FnMut()
where
    F: FnMut() + 'static,
{
    let mut gate = Throttle::new(limit_ms as f64);
    move || {
        if gate.admit(now_ms()) {
            f();
        }
    }
}
