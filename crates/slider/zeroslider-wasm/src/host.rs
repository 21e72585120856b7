//! Browser-side driver: keeps one `setTimeout` in step with the slider's
//! pending timer and flushes notifications after each call.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use log::warn;

use zeroslider_core::{Slider, TimerId};

use crate::stage::{js_error_message, DomStage};

pub(crate) struct Inner {
    pub slider: Slider<DomStage>,
    /// Core id and browser handle of the live timeout.
    armed: Option<(TimerId, i32)>,
    /// Callback handed to `setTimeout`; `None` until wired and after teardown.
    tick: Option<Function>,
}

impl Inner {
    pub fn new(slider: Slider<DomStage>) -> Self {
        Self {
            slider,
            armed: None,
            tick: None,
        }
    }

    pub fn set_tick(&mut self, tick: Option<Function>) {
        self.tick = tick;
    }

    /// Run the timer that just elapsed. The browser handle is spent.
    pub fn fire_armed(&mut self) {
        if let Some((id, _)) = self.armed.take() {
            self.slider.fire(id);
        }
    }

    /// Cancel the live browser timeout, if any.
    pub fn disarm(&mut self) {
        if let Some((_, handle)) = self.armed.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }

    /// Reschedule = cancel, then arm the slider's pending timer.
    fn sync(&mut self) {
        let wanted = self.slider.pending();
        if let (Some((id, _)), Some(p)) = (self.armed, wanted) {
            if id == p.id {
                return;
            }
        }
        self.disarm();

        let (Some(pending), Some(tick)) = (wanted, self.tick.as_ref()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let delay = i32::try_from(pending.delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(tick, delay) {
            Ok(handle) => self.armed = Some((pending.id, handle)),
            Err(e) => warn!("setTimeout failed: {}", js_error_message(&e)),
        }
    }
}

/// Apply `f`, re-arm the timer, then dispatch queued events with the slider
/// released so listeners can call back in.
pub(crate) fn drive<R>(inner: &Rc<RefCell<Inner>>, f: impl FnOnce(&mut Inner) -> R) -> R {
    let (out, container, events) = {
        let mut guard = inner.borrow_mut();
        let out = f(&mut guard);
        guard.sync();
        let container = guard.slider.stage().container().clone();
        let events = guard.slider.stage_mut().take_outbox();
        (out, container, events)
    };
    for event in events {
        if let Err(e) = container.dispatch_event(&event) {
            warn!("dispatch slideswitch: {}", js_error_message(&e));
        }
    }
    out
}
