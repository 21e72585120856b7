//! Notifications emitted by the slider.

/// What triggered a slide switch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwitchCause {
    /// The rotation timer.
    Auto,
    /// A control click or an explicit call from the host.
    User,
}

impl SwitchCause {
    #[inline]
    pub fn is_user(self) -> bool {
        matches!(self, Self::User)
    }
}

/// "Slide switched" payload, dispatched on the container.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SlideSwitch {
    pub old_index: usize,
    pub new_index: usize,
    pub cause: SwitchCause,
}

impl SlideSwitch {
    /// DOM event type used for the notification.
    pub const EVENT_TYPE: &'static str = "slideswitch";
}
