//! Outbound repaint requests from the canvas to the host.

use std::cell::Cell;
use std::rc::Rc;

/// Receives fire-and-forget repaint hints.
///
/// Hosts may coalesce requests; the canvas only guarantees that at least one
/// request is issued per pointer move.
pub trait RepaintSink {
    fn request_repaint(&mut self);
}

impl<F: FnMut()> RepaintSink for F {
    fn request_repaint(&mut self) {
        self()
    }
}

/// Counting sink for hosts that poll instead of taking a callback.
///
/// Clones share the same counter, so one handle can be given to the canvas
/// while the host keeps another.
#[derive(Debug, Clone, Default)]
pub struct RepaintFlag {
    pending: Rc<Cell<u64>>,
}

impl RepaintFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests received since the last [`take`](Self::take).
    pub fn pending(&self) -> u64 {
        self.pending.get()
    }

    /// Returns true if at least one repaint is outstanding.
    pub fn needs_redraw(&self) -> bool {
        self.pending.get() > 0
    }

    /// Drains the outstanding request count.
    pub fn take(&self) -> u64 {
        self.pending.replace(0)
    }
}

impl RepaintSink for RepaintFlag {
    fn request_repaint(&mut self) {
        self.pending.set(self.pending.get().saturating_add(1));
    }
}
