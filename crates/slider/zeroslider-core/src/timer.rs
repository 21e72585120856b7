//! Timer bookkeeping.
//!
//! The slider never owns a real timer. It records the one timer it wants
//! armed and the host (browser adapter or [`crate::timeline::Timeline`])
//! reconciles that record against its live handle after every call.

/// Opaque id of a scheduled one-shot timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(pub u32);

/// Which wait a timer represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TimerPhase {
    /// Waiting for the new slide's CSS transition to settle.
    Transition,
    /// Showing the settled slide before the next automatic advance.
    Idle,
}

/// The single timer the slider wants armed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub phase: TimerPhase,
    pub delay_ms: u32,
}

/// Monotonic allocator for timer ids.
#[derive(Default, Debug)]
pub struct TimerIdAllocator {
    next: u32,
}

impl TimerIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Convert a fractional millisecond delay into a timer delay.
#[inline]
pub(crate) fn delay_from_ms(ms: f64) -> u32 {
    if ms.is_finite() && ms > 0.0 {
        // float-to-int `as` saturates
        ms.round() as u32
    } else {
        0
    }
}
