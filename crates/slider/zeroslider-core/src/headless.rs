//! In-memory stage for hosts without a DOM and for tests.

use std::collections::BTreeSet;

use crate::events::SlideSwitch;
use crate::stage::Stage;
use crate::style::TransitionTiming;

#[derive(Clone, Debug, Default)]
pub struct HeadlessSlide {
    pub classes: BTreeSet<String>,
    pub timing: TransitionTiming,
}

/// A container with `n` slides and a pair of navigation controls.
#[derive(Clone, Debug, Default)]
pub struct HeadlessStage {
    slides: Vec<HeadlessSlide>,
    navigation: bool,
    reflows: usize,
    events: Vec<SlideSwitch>,
}

impl HeadlessStage {
    /// `count` slides without transitions, navigation present.
    pub fn new(count: usize) -> Self {
        Self {
            slides: (0..count)
                .map(|_| HeadlessSlide {
                    classes: BTreeSet::new(),
                    timing: TransitionTiming::none(),
                })
                .collect(),
            navigation: true,
            reflows: 0,
            events: Vec::new(),
        }
    }

    /// Give every slide the same computed transition timing.
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        for slide in &mut self.slides {
            slide.timing = timing.clone();
        }
        self
    }

    /// Override the timing of one slide.
    pub fn with_slide_timing(mut self, slide: usize, timing: TransitionTiming) -> Self {
        if let Some(s) = self.slides.get_mut(slide) {
            s.timing = timing;
        }
        self
    }

    /// A stage whose container has no next/prev controls.
    pub fn without_navigation(mut self) -> Self {
        self.navigation = false;
        self
    }

    pub fn slides(&self) -> &[HeadlessSlide] {
        &self.slides
    }

    /// Indices of slides carrying `class`, ascending.
    pub fn slides_with_class(&self, class: &str) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.classes.contains(class))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_navigation(&self) -> bool {
        self.navigation
    }

    pub fn reflows(&self) -> usize {
        self.reflows
    }

    /// Every notification dispatched so far, oldest first.
    pub fn events(&self) -> &[SlideSwitch] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<SlideSwitch> {
        std::mem::take(&mut self.events)
    }
}

impl Stage for HeadlessStage {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn add_class(&mut self, slide: usize, class: &str) {
        if let Some(s) = self.slides.get_mut(slide) {
            s.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, slide: usize, class: &str) {
        if let Some(s) = self.slides.get_mut(slide) {
            s.classes.remove(class);
        }
    }

    fn has_class(&self, slide: usize, class: &str) -> bool {
        self.slides
            .get(slide)
            .is_some_and(|s| s.classes.contains(class))
    }

    fn transition_timing(&self, slide: usize) -> TransitionTiming {
        self.slides
            .get(slide)
            .map(|s| s.timing.clone())
            .unwrap_or_default()
    }

    fn dispatch_switch(&mut self, event: &SlideSwitch) {
        self.events.push(*event);
    }

    fn remove_navigation(&mut self) {
        self.navigation = false;
    }

    fn reflow(&mut self) {
        self.reflows += 1;
    }
}
