use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollToOptions, Window,
};
use yew::Callback;

use crate::config;
use crate::error::DomError;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_scroll_height() -> f64 {
    document()
        .ok()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}

pub fn set_body_overflow(value: &str) -> Result<(), DomError> {
    body()?.style().set_property("overflow", value)?;
    Ok(())
}

/// Smooth-scrolls so the element with `id` lands just below the navbar.
pub fn scroll_to_anchor(id: &str, navbar_height: f64) -> Result<(), DomError> {
    let target = document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::Missing(format!("#{}", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongType("scroll target"))?;
    let top = crate::effects::nav::anchor_scroll_top(target.offset_top() as f64, navbar_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Click handler for in-page links: smooth scroll instead of jumping.
pub fn anchor_click(anchor: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = scroll_to_anchor(anchor, config::NAVBAR_HEIGHT) {
            log::warn!("Could not scroll to #{}: {}", anchor, err);
        }
    })
}

/// Appends a throwaway `div` with the given inline style to `<body>`.
pub fn append_to_body(style: &str) -> Result<Element, DomError> {
    let element = document()?.create_element("div")?;
    element.set_attribute("style", style)?;
    body()?.append_child(&element)?;
    Ok(element)
}

/// An event listener that unregisters itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Watches one element's intersection with the viewport. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(
        element: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_change: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut(bool) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct FrameLoopInner {
    handle: Option<i32>,
    cancelled: bool,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// Calls `tick` once per display frame until it returns false or the loop is
/// dropped.
pub struct AnimationLoop {
    window: Window,
    inner: Rc<RefCell<FrameLoopInner>>,
}

impl AnimationLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let inner = Rc::new(RefCell::new(FrameLoopInner {
            handle: None,
            cancelled: false,
            callback: None,
        }));

        let weak: Weak<RefCell<FrameLoopInner>> = Rc::downgrade(&inner);
        let frame_window = window.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !tick(timestamp) {
                inner.borrow_mut().handle = None;
                return;
            }
            let mut state = inner.borrow_mut();
            // tick may have caused the owner to drop the loop
            if state.cancelled {
                return;
            }
            let next = state.callback.as_ref().and_then(|cb| {
                frame_window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok()
            });
            state.handle = next;
        }) as Box<dyn FnMut(f64)>);

        let first = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        {
            let mut state = inner.borrow_mut();
            state.handle = Some(first);
            state.callback = Some(callback);
        }
        Ok(Self { window, inner })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.cancelled = true;
        if let Some(handle) = state.handle.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}
