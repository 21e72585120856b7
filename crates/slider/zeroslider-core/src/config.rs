//! Slider configuration.
//!
//! Options arrive from the host as a partial JSON object. Every field is
//! optional on input and falls back to its default; the merge happens once,
//! when the object is deserialized.

use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Immutable widget configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Idle wait before an automatic advance, in milliseconds.
    pub slide_duration_ms: u32,
    /// Selector identifying slide elements inside the container.
    pub slide_selector: String,
    /// Selector of the "next" control.
    pub next_selector: String,
    /// Selector of the "previous" control.
    pub prev_selector: String,
    /// Class marking the visible slide.
    pub active_class_name: String,
    /// Class used as a styling hook for user-initiated switches.
    pub toggled_class_name: String,
    /// Whether the slider rotates on its own.
    pub autorun: bool,
    /// Whether hovering the container holds the rotation.
    pub pause_on_focus: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slide_duration_ms: 2000,
            slide_selector: "div.slide".to_string(),
            next_selector: ".next".to_string(),
            prev_selector: ".prev".to_string(),
            active_class_name: "on".to_string(),
            toggled_class_name: "toggled".to_string(),
            autorun: true,
            pause_on_focus: true,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON options object and validate the result.
    pub fn from_json(json: &str) -> Result<Self, SliderError> {
        let cfg: Config =
            serde_json::from_str(json).map_err(|e| SliderError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the DOM would refuse later on.
    pub fn validate(&self) -> Result<(), SliderError> {
        for (name, selector) in [
            ("slideSelector", &self.slide_selector),
            ("nextSelector", &self.next_selector),
            ("prevSelector", &self.prev_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(SliderError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        for (name, class) in [
            ("activeClassName", &self.active_class_name),
            ("toggledClassName", &self.toggled_class_name),
        ] {
            if class.is_empty() {
                return Err(SliderError::InvalidConfig(format!("{name} must not be empty")));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(SliderError::InvalidConfig(format!(
                    "{name} '{class}' must be a single class token"
                )));
            }
        }
        if self.active_class_name == self.toggled_class_name {
            return Err(SliderError::InvalidConfig(
                "activeClassName and toggledClassName must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Selector matching both navigation controls.
    pub fn navigation_selector(&self) -> String {
        format!("{}, {}", self.prev_selector, self.next_selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_fall_back_to_defaults() {
        let cfg = Config::from_json(r#"{ "slideDurationMs": 500, "autorun": false }"#).unwrap();
        assert_eq!(cfg.slide_duration_ms, 500);
        assert!(!cfg.autorun);
        assert_eq!(cfg.slide_selector, "div.slide");
        assert_eq!(cfg.active_class_name, "on");
        assert!(cfg.pause_on_focus);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn rejects_multi_token_class_names() {
        let err = Config::from_json(r#"{ "activeClassName": "is active" }"#).unwrap_err();
        assert!(matches!(err, SliderError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_selector() {
        let err = Config::from_json(r#"{ "nextSelector": "  " }"#).unwrap_err();
        assert!(matches!(err, SliderError::InvalidConfig(_)));
    }

    #[test]
    fn wrong_types_are_parse_errors() {
        let err = Config::from_json(r#"{ "slideDurationMs": "fast" }"#).unwrap_err();
        assert!(matches!(err, SliderError::ConfigParse(_)));
    }

    #[test]
    fn navigation_selector_joins_both_controls() {
        assert_eq!(Config::default().navigation_selector(), ".prev, .next");
    }
}
