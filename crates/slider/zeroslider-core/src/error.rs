//! Error types for slider construction and control.

use thiserror::Error;

/// Failures surfaced by the slider. Missing controls and short slide lists are
/// not errors; the slider degrades instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SliderError {
    /// The container selector matched nothing.
    #[error("container not found for selector '{selector}'")]
    ContainerNotFound { selector: String },

    /// A selector the DOM refused to evaluate.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Options that parsed but cannot be applied.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Options that did not deserialize.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A jump target outside the slide list.
    #[error("slide index {index} out of range for {count} slides")]
    SlideOutOfRange { index: usize, count: usize },

    /// A jump target element that is not one of the slides.
    #[error("element is not a slide of this slider")]
    UnknownSlide,
}
