//! ZeroSlider core (DOM-agnostic)
//!
//! Slide rotation state machine for a timer-driven carousel. The slider
//! toggles "active"/"toggled" classes on a fixed list of slides through the
//! [`Stage`] trait, waits for CSS transitions via [`style`], and records the
//! single timer it wants armed. Hosts (the wasm adapter, [`Timeline`]) own the
//! real clock and call [`Slider::fire`] back.

pub mod config;
pub mod error;
pub mod events;
pub mod headless;
pub mod index;
pub mod slider;
pub mod stage;
pub mod style;
pub mod timeline;
pub mod timer;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use error::SliderError;
pub use events::{SlideSwitch, SwitchCause};
pub use headless::HeadlessStage;
pub use index::wrap_index;
pub use slider::{RotationPhase, RotationState, Slider};
pub use stage::Stage;
pub use style::{transition_delay_ms, TransitionTiming};
pub use timeline::Timeline;
pub use timer::{PendingTimer, TimerId, TimerPhase};
