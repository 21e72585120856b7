//! The DOM surface the slider drives.
//!
//! Slides are addressed by their position in the list discovered at
//! construction. Implementations map positions to real elements; the
//! headless stage keeps everything in memory.

use crate::events::SlideSwitch;
use crate::style::TransitionTiming;

/// Host capabilities the rotation state machine needs.
pub trait Stage {
    /// Number of slides discovered at construction. Must not change.
    fn slide_count(&self) -> usize;

    fn add_class(&mut self, slide: usize, class: &str);

    fn remove_class(&mut self, slide: usize, class: &str);

    fn has_class(&self, slide: usize, class: &str) -> bool;

    /// Computed transition timing of a slide.
    fn transition_timing(&self, slide: usize) -> TransitionTiming;

    /// Deliver the "slide switched" notification.
    fn dispatch_switch(&mut self, event: &SlideSwitch);

    /// Remove the next/prev controls from the document.
    fn remove_navigation(&mut self);

    /// Force a synchronous layout so the next class change animates.
    fn reflow(&mut self);
}
