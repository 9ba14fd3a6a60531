//! Browser timer wrappers with explicit cancellation.
//!
//! DESIGN
//! ======
//! Every scheduling call returns a handle exposing `cancel`, so an owning
//! component can pair it with `on_cleanup` on its teardown path. Handles are
//! `Send + Sync` (via `SendWrapper` on the browser, where everything runs on
//! one thread) so they can live inside cleanup closures and stored values.
//! Native builds return inert handles that still track cancellation, which
//! is what the lifecycle unit tests assert against.

#[cfg(test)]
#[path = "interval_test.rs"]
mod interval_test;

#[cfg(feature = "csr")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "csr")]
use send_wrapper::SendWrapper;

/// A recurring timer. Dropping the handle without calling [`cancel`] also
/// stops the timer (the underlying interval cancels on drop).
///
/// [`cancel`]: TickHandle::cancel
pub struct TickHandle {
    #[cfg(feature = "csr")]
    interval: Option<SendWrapper<Interval>>,
    #[cfg(not(feature = "csr"))]
    active: bool,
}

/// Schedule `tick` to run every `period_ms` milliseconds.
pub fn start_interval(period_ms: u32, tick: impl FnMut() + 'static) -> TickHandle {
    #[cfg(feature = "csr")]
    {
        TickHandle {
            interval: Some(SendWrapper::new(Interval::new(period_ms, tick))),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = period_ms;
        let _ = tick;
        TickHandle { active: true }
    }
}

impl TickHandle {
    /// Stop the recurring timer. Safe to call more than once; only the
    /// first call does anything.
    pub fn cancel(&mut self) {
        #[cfg(feature = "csr")]
        if let Some(interval) = self.interval.take() {
            interval.take().cancel();
        }
        #[cfg(not(feature = "csr"))]
        {
            self.active = false;
        }
    }

    /// Whether the timer is still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.interval.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            self.active
        }
    }
}

/// A one-shot timer. Dropping the handle cancels the pending callback
/// unless [`forget`] was called.
///
/// [`forget`]: DelayHandle::forget
pub struct DelayHandle {
    #[cfg(feature = "csr")]
    timeout: Option<SendWrapper<Timeout>>,
    #[cfg(not(feature = "csr"))]
    active: bool,
}

/// Schedule `run` to fire once after `delay_ms` milliseconds.
pub fn start_delay(delay_ms: u32, run: impl FnOnce() + 'static) -> DelayHandle {
    #[cfg(feature = "csr")]
    {
        DelayHandle {
            timeout: Some(SendWrapper::new(Timeout::new(delay_ms, run))),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = delay_ms;
        let _ = run;
        DelayHandle { active: true }
    }
}

impl DelayHandle {
    /// Drop the pending callback. Safe to call more than once.
    pub fn cancel(&mut self) {
        #[cfg(feature = "csr")]
        if let Some(timeout) = self.timeout.take() {
            timeout.take().cancel();
        }
        #[cfg(not(feature = "csr"))]
        {
            self.active = false;
        }
    }

    /// Let the callback fire without retaining the handle (fire-and-forget).
    pub fn forget(mut self) {
        #[cfg(feature = "csr")]
        if let Some(timeout) = self.timeout.take() {
            timeout.take().forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            self.active = false;
        }
    }

    /// Whether the callback is still pending and owned by this handle.
    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.timeout.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            self.active
        }
    }
}
