//! wasm-bindgen interface for ZeroSlider.
//!
//! ```javascript
//! import init, { ZeroSlider } from "zeroslider-wasm";
//! await init();
//! const slider = new ZeroSlider("#stage", { slideDurationMs: 3000 });
//! document
//!   .querySelector("#stage")
//!   .addEventListener("slideswitch", (e) => console.log(e.detail.newIndex));
//! ```

mod host;
mod logging;
pub mod stage;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Function;
use log::debug;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use zeroslider_core::{Config, Slider, SliderError};

use crate::host::{drive, Inner};
pub use crate::logging::init_logging;
pub use crate::stage::DomStage;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn js_err(e: SliderError) -> JsError {
    JsError::new(&e.to_string())
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum NavDirection {
    Next,
    Prev,
}

/// A slider bound to one container element.
#[wasm_bindgen]
pub struct ZeroSlider {
    inner: Rc<RefCell<Inner>>,
    tick: Option<Closure<dyn FnMut()>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ZeroSlider {
    /// Build a slider over `container` (an Element or a selector string).
    /// `options` is a partial config object or undefined/null for defaults.
    /// Example:
    ///   new ZeroSlider("#stage", { slideDurationMs: 3000, autorun: true })
    #[wasm_bindgen(constructor)]
    pub fn new(container: JsValue, options: JsValue) -> Result<ZeroSlider, JsError> {
        let cfg = parse_options(options)?;
        let container = resolve_container(container)?;
        Self::mount(container, cfg)
    }

    /// Mount one independent slider on every element matching `selector`.
    /// An empty match yields an empty array.
    #[wasm_bindgen(js_name = mountAll)]
    pub fn mount_all(selector: &str, options: JsValue) -> Result<Vec<ZeroSlider>, JsError> {
        let cfg = parse_options(options)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document available"))?;
        let list = document.query_selector_all(selector).map_err(|e| {
            js_err(SliderError::InvalidSelector {
                selector: selector.to_string(),
                reason: stage::js_error_message(&e),
            })
        })?;
        let containers: Vec<Element> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        debug!("zeroslider: mounting {} container(s) for '{selector}'", containers.len());
        containers
            .into_iter()
            .map(|container| Self::mount(container, cfg.clone()))
            .collect()
    }

    /// Advance to the next slide (user-initiated).
    pub fn next(&self) {
        drive(&self.inner, |inner| inner.slider.advance(true));
    }

    /// Go back to the previous slide (user-initiated).
    pub fn prev(&self) {
        drive(&self.inner, |inner| inner.slider.retreat(true));
    }

    /// Stop the rotation, leaving the current slide visible.
    pub fn pause(&self) {
        drive(&self.inner, |inner| inner.slider.pause());
    }

    /// Restart the rotation with an immediate advance.
    pub fn resume(&self) {
        drive(&self.inner, |inner| inner.slider.resume());
    }

    /// Jump to `slide`, which must be one of this slider's slides.
    pub fn show(&self, slide: Element) -> Result<(), JsError> {
        drive(&self.inner, |inner| {
            let index = inner
                .slider
                .stage()
                .index_of(&slide)
                .ok_or(SliderError::UnknownSlide)?;
            inner.slider.show(index)
        })
        .map_err(js_err)
    }

    /// Jump to the slide at `index`.
    #[wasm_bindgen(js_name = showIndex)]
    pub fn show_index(&self, index: u32) -> Result<(), JsError> {
        drive(&self.inner, |inner| inner.slider.show(index as usize)).map_err(js_err)
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> u32 {
        self.inner.borrow().slider.current_index() as u32
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.inner.borrow().slider.slide_count() as u32
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().slider.is_running()
    }

    /// Effective configuration (defaults merged with the given options).
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.inner.borrow().slider.config())
            .map_err(|e| JsError::new(&format!("config error: {e}")))
    }

    /// Cancel the pending timer and detach every listener. Class names stay
    /// as they are.
    pub fn destroy(&mut self) {
        self.teardown();
    }
}

impl ZeroSlider {
    fn mount(container: Element, cfg: Config) -> Result<ZeroSlider, JsError> {
        let stage = DomStage::discover(container.clone(), &cfg).map_err(js_err)?;
        let slider = Slider::new(stage, cfg.clone()).map_err(js_err)?;
        let rotates = slider.slide_count() >= 2;

        let mut widget = ZeroSlider {
            inner: Rc::new(RefCell::new(Inner::new(slider))),
            tick: None,
            listeners: Vec::new(),
        };
        if rotates {
            widget.wire(&container, &cfg);
        }
        drive(&widget.inner, |_| ());
        Ok(widget)
    }

    fn wire(&mut self, container: &Element, cfg: &Config) {
        let weak = Rc::downgrade(&self.inner);

        let tick_target = weak.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            if let Some(inner) = tick_target.upgrade() {
                drive(&inner, Inner::fire_armed);
            }
        });
        self.inner
            .borrow_mut()
            .set_tick(Some(tick.as_ref().unchecked_ref::<Function>().clone()));
        self.tick = Some(tick);

        self.listeners.push(click_listener(container, cfg, weak.clone()));

        if cfg.pause_on_focus {
            let enter = weak.clone();
            self.listeners.push(EventListener::new(container, "mouseenter", move |_| {
                if let Some(inner) = enter.upgrade() {
                    drive(&inner, |inner| inner.slider.pointer_enter());
                }
            }));
            let leave = weak;
            self.listeners.push(EventListener::new(container, "mouseleave", move |_| {
                if let Some(inner) = leave.upgrade() {
                    drive(&inner, |inner| inner.slider.pointer_leave());
                }
            }));
        }
        debug!("zeroslider: wired {} listener(s)", self.listeners.len());
    }

    fn teardown(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.disarm();
            inner.set_tick(None);
        }
        self.listeners.clear();
        self.tick = None;
    }
}

impl Drop for ZeroSlider {
    fn drop(&mut self) {
        // A timeout firing into a freed closure would throw.
        self.teardown();
    }
}

/// Delegated click handling for the next/prev controls.
fn click_listener(container: &Element, cfg: &Config, weak: Weak<RefCell<Inner>>) -> EventListener {
    let scope = container.clone();
    let next_selector = cfg.next_selector.clone();
    let prev_selector = cfg.prev_selector.clone();

    EventListener::new_with_options(
        container,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let Some(direction) = nav_direction(&target, &scope, &next_selector, &prev_selector)
            else {
                return;
            };
            let Some(inner) = weak.upgrade() else {
                return;
            };
            event.prevent_default();
            match direction {
                NavDirection::Next => drive(&inner, |inner| inner.slider.advance(true)),
                NavDirection::Prev => drive(&inner, |inner| inner.slider.retreat(true)),
            }
        },
    )
}

/// Which control, if any, a click inside `scope` landed on.
fn nav_direction(
    target: &Element,
    scope: &Element,
    next_selector: &str,
    prev_selector: &str,
) -> Option<NavDirection> {
    let within = |selector: &str| {
        target
            .closest(selector)
            .ok()
            .flatten()
            .is_some_and(|control| scope.contains(Some(&*control)))
    };
    if within(next_selector) {
        Some(NavDirection::Next)
    } else if within(prev_selector) {
        Some(NavDirection::Prev)
    } else {
        None
    }
}

fn parse_options(options: JsValue) -> Result<Config, JsError> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let cfg: Config = if jsvalue_is_undefined_or_null(&options) {
        Config::default()
    } else {
        swb::from_value(options).map_err(|e| js_err(SliderError::ConfigParse(e.to_string())))?
    };
    cfg.validate().map_err(js_err)?;
    Ok(cfg)
}

fn resolve_container(container: JsValue) -> Result<Element, JsError> {
    if let Some(selector) = container.as_string() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("no document available"))?;
        return document
            .query_selector(&selector)
            .map_err(|e| {
                js_err(SliderError::InvalidSelector {
                    selector: selector.clone(),
                    reason: stage::js_error_message(&e),
                })
            })?
            .ok_or_else(|| js_err(SliderError::ContainerNotFound { selector }));
    }
    container
        .dyn_into::<Element>()
        .map_err(|_| JsError::new("container must be an Element or a selector string"))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
