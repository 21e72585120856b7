//! Slider: the slide rotation state machine.
//!
//! Cycle: idle wait -> advance -> transition wait -> idle wait -> ...
//!
//! The slider owns its [`Stage`] and at most one [`PendingTimer`]. Hosts call
//! [`Slider::fire`] when that timer elapses and re-read [`Slider::pending`]
//! after every call to keep their real timer in step.

use log::{debug, trace};

use crate::config::Config;
use crate::error::SliderError;
use crate::events::{SlideSwitch, SwitchCause};
use crate::index::wrap_index;
use crate::stage::Stage;
use crate::style::transition_delay_ms;
use crate::timer::{delay_from_ms, PendingTimer, TimerId, TimerIdAllocator, TimerPhase};

/// Coarse state derived from the pending timer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RotationPhase {
    /// Showing a settled slide, waiting out the slide duration.
    Idle,
    /// Waiting for the CSS transition of a fresh switch.
    Transitioning,
    /// No timer armed: focus held, autorun off, paused, or too few slides.
    Paused,
}

/// Mutable rotation state. Only the slider writes it.
#[derive(Clone, Debug, Default)]
pub struct RotationState {
    pub current_index: usize,
    pub is_running: bool,
    pub is_focused: bool,
    pub pending: Option<PendingTimer>,
}

#[derive(Debug)]
pub struct Slider<S: Stage> {
    cfg: Config,
    stage: S,
    count: usize,
    state: RotationState,
    timer_ids: TimerIdAllocator,
}

impl<S: Stage> Slider<S> {
    /// Bootstrap a slider over `stage`.
    ///
    /// With fewer than two slides the navigation is removed, a lone slide is
    /// activated, and the slider stays inert for its whole lifetime.
    pub fn new(mut stage: S, cfg: Config) -> Result<Self, SliderError> {
        cfg.validate()?;
        let count = stage.slide_count();

        let mut slider = Self {
            cfg,
            stage,
            count,
            state: RotationState::default(),
            timer_ids: TimerIdAllocator::new(),
        };

        if count < 2 {
            slider.stage.remove_navigation();
            if count == 1 {
                let active = slider.cfg.active_class_name.clone();
                slider.stage.add_class(0, &active);
            }
            debug!("slider: {count} slide(s), rotation disabled");
            return Ok(slider);
        }

        slider.stage.reflow();
        let active = slider.cfg.active_class_name.clone();
        slider.stage.add_class(0, &active);

        if slider.cfg.autorun {
            // First cycle has no transition to wait on.
            slider.state.is_running = true;
            slider.schedule(TimerPhase::Idle, slider.cfg.slide_duration_ms);
        }
        debug!(
            "slider: {count} slides, autorun={}, pause_on_focus={}",
            slider.cfg.autorun, slider.cfg.pause_on_focus
        );
        Ok(slider)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused
    }

    /// The timer the host should have armed, if any.
    pub fn pending(&self) -> Option<PendingTimer> {
        self.state.pending
    }

    pub fn phase(&self) -> RotationPhase {
        match self.state.pending.map(|p| p.phase) {
            Some(TimerPhase::Idle) => RotationPhase::Idle,
            Some(TimerPhase::Transition) => RotationPhase::Transitioning,
            None => RotationPhase::Paused,
        }
    }

    fn rotates(&self) -> bool {
        self.count >= 2
    }

    /// Slide `offset` positions from the current one.
    pub fn slide_at(&self, offset: isize) -> Option<usize> {
        wrap_index(self.state.current_index, offset, self.count)
    }

    /// Switch to the following slide.
    pub fn advance(&mut self, user_initiated: bool) {
        self.step(1, user_initiated);
    }

    /// Switch to the preceding slide.
    pub fn retreat(&mut self, user_initiated: bool) {
        self.step(-1, user_initiated);
    }

    fn step(&mut self, offset: isize, user_initiated: bool) {
        if !self.rotates() {
            return;
        }
        let (Some(old), Some(new)) = (self.slide_at(0), self.slide_at(offset)) else {
            return;
        };
        self.switch(old, new, cause_of(user_initiated));
    }

    /// Jump straight to `index` as a user-initiated switch.
    pub fn show(&mut self, index: usize) -> Result<(), SliderError> {
        if index >= self.count {
            return Err(SliderError::SlideOutOfRange {
                index,
                count: self.count,
            });
        }
        if !self.rotates() || index == self.state.current_index {
            return Ok(());
        }
        self.switch(self.state.current_index, index, SwitchCause::User);
        Ok(())
    }

    /// Stop the rotation. The visible slide stays as it is.
    pub fn pause(&mut self) {
        self.cancel();
        self.state.is_running = false;
        trace!("slider: paused at {}", self.state.current_index);
    }

    /// Restart the cycle with an immediate automatic advance, unless autorun is
    /// off or the pointer holds focus.
    pub fn resume(&mut self) {
        if !self.rotates() {
            return;
        }
        if !self.cfg.autorun || (self.cfg.pause_on_focus && self.state.is_focused) {
            self.state.is_running = false;
            return;
        }
        self.state.is_running = true;
        self.advance(false);
    }

    /// Pointer entered the container.
    pub fn pointer_enter(&mut self) {
        if self.cfg.pause_on_focus {
            self.state.is_focused = true;
        }
    }

    /// Pointer left the container; a stopped rotation picks up again.
    pub fn pointer_leave(&mut self) {
        if !self.cfg.pause_on_focus {
            return;
        }
        self.state.is_focused = false;
        if !self.state.is_running {
            self.resume();
        }
    }

    /// Timer callback. Ids other than the pending one are stale and ignored.
    pub fn fire(&mut self, id: TimerId) {
        let Some(pending) = self.state.pending.filter(|p| p.id == id) else {
            trace!("slider: ignoring stale timer {:?}", id);
            return;
        };
        self.state.pending = None;

        match pending.phase {
            TimerPhase::Transition => {
                self.schedule(TimerPhase::Idle, self.cfg.slide_duration_ms);
            }
            TimerPhase::Idle => self.resume(),
        }
    }

    fn switch(&mut self, old: usize, new: usize, cause: SwitchCause) {
        let active = self.cfg.active_class_name.clone();
        let toggled = self.cfg.toggled_class_name.clone();

        match cause {
            SwitchCause::User => {
                // Preempt the automatic cycle before touching any class.
                self.cancel();
                for slide in 0..self.count {
                    self.stage.add_class(slide, &toggled);
                }
                self.stage.add_class(new, &active);
                self.stage.remove_class(old, &active);
            }
            SwitchCause::Auto => {
                self.stage.remove_class(new, &toggled);
                self.stage.add_class(new, &active);
                self.stage.remove_class(old, &active);
                self.stage.remove_class(old, &toggled);
            }
        }
        self.state.current_index = new;

        let event = SlideSwitch {
            old_index: old,
            new_index: new,
            cause,
        };
        debug!("slider: switch {old} -> {new} ({cause:?})");
        self.stage.dispatch_switch(&event);

        // Set before the wait so a pointer leave does not restart the cycle.
        self.state.is_running = true;
        let wait = transition_delay_ms(&self.stage.transition_timing(new));
        self.schedule(TimerPhase::Transition, delay_from_ms(wait));
    }

    fn schedule(&mut self, phase: TimerPhase, delay_ms: u32) {
        let timer = PendingTimer {
            id: self.timer_ids.alloc(),
            phase,
            delay_ms,
        };
        trace!("slider: schedule {:?} in {delay_ms}ms ({:?})", phase, timer.id);
        self.state.pending = Some(timer);
    }

    fn cancel(&mut self) {
        if let Some(p) = self.state.pending.take() {
            trace!("slider: cancel {:?}", p.id);
        }
    }
}

fn cause_of(user_initiated: bool) -> SwitchCause {
    if user_initiated {
        SwitchCause::User
    } else {
        SwitchCause::Auto
    }
}
