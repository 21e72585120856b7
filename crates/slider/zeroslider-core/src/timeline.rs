//! Virtual-time host.
//!
//! `Timeline` plays the role the browser event loop plays for the wasm
//! adapter: it arms the slider's pending timer against a clock it owns and
//! fires it when virtual time reaches the deadline. Time only moves through
//! [`Timeline::advance`], so tests can step through a rotation precisely.

use log::warn;

use crate::slider::Slider;
use crate::stage::Stage;
use crate::timer::TimerId;

/// Upper bound on timer firings within one `advance` call. A zero slide
/// duration combined with zero-length transitions never lets time move.
const MAX_FIRES_PER_ADVANCE: usize = 100_000;

#[derive(Debug)]
pub struct Timeline<S: Stage> {
    slider: Slider<S>,
    now_ms: u64,
    armed: Option<(TimerId, u64)>,
    fired: usize,
}

impl<S: Stage> Timeline<S> {
    /// Start the clock at 0 with whatever the slider scheduled on construction.
    pub fn new(slider: Slider<S>) -> Self {
        let mut timeline = Self {
            slider,
            now_ms: 0,
            armed: None,
            fired: 0,
        };
        timeline.sync();
        timeline
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn slider(&self) -> &Slider<S> {
        &self.slider
    }

    /// Mutable access for host-side calls (clicks, pointer events, API).
    /// The timer is re-armed from the current time on the next clock query.
    pub fn slider_mut(&mut self) -> &mut Slider<S> {
        &mut self.slider
    }

    /// Run `f` against the slider and re-arm immediately.
    pub fn with_slider<R>(&mut self, f: impl FnOnce(&mut Slider<S>) -> R) -> R {
        let out = f(&mut self.slider);
        self.sync();
        out
    }

    /// Number of timers fired so far (stale ones never fire).
    pub fn fired(&self) -> usize {
        self.fired
    }

    /// Absolute time at which the pending timer fires.
    pub fn deadline(&self) -> Option<u64> {
        let pending = self.slider.pending()?;
        match self.armed {
            Some((id, at)) if id == pending.id => Some(at),
            _ => Some(self.now_ms + u64::from(pending.delay_ms)),
        }
    }

    /// Move the clock forward by `ms`, firing every timer that comes due.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms.saturating_add(ms);
        let mut fires = 0;
        loop {
            self.sync();
            let Some((id, at)) = self.armed else { break };
            if at > target {
                break;
            }
            if fires == MAX_FIRES_PER_ADVANCE {
                warn!("timeline: timer storm at {}ms, stopping early", self.now_ms);
                break;
            }
            self.now_ms = self.now_ms.max(at);
            self.armed = None;
            self.fired += 1;
            fires += 1;
            self.slider.fire(id);
        }
        self.now_ms = target;
        self.sync();
    }

    /// Keep the armed timer in step with the slider's pending record.
    fn sync(&mut self) {
        self.armed = match self.slider.pending() {
            None => None,
            Some(p) => match self.armed {
                Some((id, at)) if id == p.id => Some((id, at)),
                _ => Some((p.id, self.now_ms + u64::from(p.delay_ms))),
            },
        };
    }
}
