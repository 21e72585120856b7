//! `Stage` over real DOM elements.

use js_sys::{Object, Reflect};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, HtmlElement};

use zeroslider_core::{Config, SlideSwitch, SliderError, Stage, TransitionTiming};

/// Slides and controls discovered once inside a container element.
pub struct DomStage {
    container: Element,
    slides: Vec<Element>,
    navigation_selector: String,
    // Built during a slider call, dispatched once the slider is released so
    // listeners may call back into it.
    outbox: Vec<CustomEvent>,
}

impl DomStage {
    pub fn discover(container: Element, cfg: &Config) -> Result<Self, SliderError> {
        let list = container
            .query_selector_all(&cfg.slide_selector)
            .map_err(|e| SliderError::InvalidSelector {
                selector: cfg.slide_selector.clone(),
                reason: js_error_message(&e),
            })?;
        let slides = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        Ok(Self {
            container,
            slides,
            navigation_selector: cfg.navigation_selector(),
            outbox: Vec::new(),
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn slides(&self) -> &[Element] {
        &self.slides
    }

    pub fn index_of(&self, slide: &Element) -> Option<usize> {
        self.slides.iter().position(|s| s == slide)
    }

    pub fn take_outbox(&mut self) -> Vec<CustomEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn build_switch_event(&self, event: &SlideSwitch) -> Result<CustomEvent, JsValue> {
        let detail = Object::new();
        let old = self.slides.get(event.old_index).map(|el| JsValue::from(el.clone()));
        let new = self.slides.get(event.new_index).map(|el| JsValue::from(el.clone()));
        Reflect::set(&detail, &"oldSlide".into(), &old.unwrap_or(JsValue::NULL))?;
        Reflect::set(&detail, &"newSlide".into(), &new.unwrap_or(JsValue::NULL))?;
        Reflect::set(&detail, &"oldIndex".into(), &(event.old_index as u32).into())?;
        Reflect::set(&detail, &"newIndex".into(), &(event.new_index as u32).into())?;
        Reflect::set(
            &detail,
            &"userInitiated".into(),
            &event.cause.is_user().into(),
        )?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        CustomEvent::new_with_event_init_dict(SlideSwitch::EVENT_TYPE, &init)
    }
}

impl Stage for DomStage {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn add_class(&mut self, slide: usize, class: &str) {
        if let Some(el) = self.slides.get(slide) {
            if let Err(e) = el.class_list().add_1(class) {
                warn!("add class '{class}': {}", js_error_message(&e));
            }
        }
    }

    fn remove_class(&mut self, slide: usize, class: &str) {
        if let Some(el) = self.slides.get(slide) {
            if let Err(e) = el.class_list().remove_1(class) {
                warn!("remove class '{class}': {}", js_error_message(&e));
            }
        }
    }

    fn has_class(&self, slide: usize, class: &str) -> bool {
        self.slides
            .get(slide)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn transition_timing(&self, slide: usize) -> TransitionTiming {
        let style = self
            .slides
            .get(slide)
            .zip(web_sys::window())
            .and_then(|(el, window)| window.get_computed_style(el).ok().flatten());
        let Some(style) = style else {
            return TransitionTiming::default();
        };
        TransitionTiming::new(
            style
                .get_property_value("transition-duration")
                .unwrap_or_default(),
            style
                .get_property_value("transition-delay")
                .unwrap_or_default(),
        )
    }

    fn dispatch_switch(&mut self, event: &SlideSwitch) {
        match self.build_switch_event(event) {
            Ok(ev) => self.outbox.push(ev),
            Err(e) => warn!("build slideswitch event: {}", js_error_message(&e)),
        }
    }

    fn remove_navigation(&mut self) {
        let controls = match self.container.query_selector_all(&self.navigation_selector) {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    "navigation selector '{}': {}",
                    self.navigation_selector,
                    js_error_message(&e)
                );
                return;
            }
        };
        let nodes: Vec<Element> = (0..controls.length())
            .filter_map(|i| controls.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        for el in nodes {
            el.remove();
        }
    }

    fn reflow(&mut self) {
        if let Some(el) = self.container.dyn_ref::<HtmlElement>() {
            // Reading layout forces it to be computed.
            let _ = el.offset_height();
        }
    }
}

/// Best-effort message out of a thrown JS value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
