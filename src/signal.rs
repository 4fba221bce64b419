//! Stop request latch for `no_std` environments.
//!
//! Raised from an interrupt or a signal handler, polled by the animation
//! loop. Thread/interrupt safe via critical sections.

use core::cell::Cell;

use critical_section::Mutex;

/// Why the animation loop was asked to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Interrupt or termination signal from outside the process
    Interrupted,
    /// Stop asked for by the application itself
    Requested,
}

/// A single-slot stop request.
///
/// The first raised reason wins until it is taken.
pub struct StopSignal {
    inner: Mutex<Cell<Option<StopReason>>>,
}

impl StopSignal {
    /// Create a signal with no pending request.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Request a stop.
    ///
    /// Returns `false` if a request was already pending.
    pub fn raise(&self, reason: StopReason) -> bool {
        critical_section::with(|cs| {
            let slot = self.inner.borrow(cs);
            if slot.get().is_some() {
                return false;
            }
            slot.set(Some(reason));
            true
        })
    }

    /// Check for a pending request without consuming it.
    pub fn peek(&self) -> Option<StopReason> {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Take the pending request, if any.
    pub fn take(&self) -> Option<StopReason> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
