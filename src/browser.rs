//! Browser Backend
//!
//! [`Dom`] and [`TimerDriver`] over `web-sys`. Bootstrap widgets are reached
//! through the global `bootstrap` object at call time, so a page without the
//! Bootstrap bundle still gets every other behaviour.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use tracing::{debug, trace};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, MutationObserver, MutationObserverInit,
    PageTransitionEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::dom::{Dom, DomEvent, Listener, Widget};
use crate::error::{Result, StorefrontError};
use crate::timers::{TimerDriver, TimerId};

pub struct Browser {
    window: Window,
    document: Document,
    timeouts: Rc<RefCell<HashMap<TimerId, Timeout>>>,
    next_timer: Cell<u64>,
}

impl Browser {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StorefrontError::ElementNotFound("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| StorefrontError::ElementNotFound("document".into()))?;
        Ok(Self {
            window,
            document,
            timeouts: Rc::new(RefCell::new(HashMap::new())),
            next_timer: Cell::new(1),
        })
    }

    /// Run `f` once the document is parsed
    pub fn when_ready(&self, f: impl FnOnce() + 'static) {
        if self.document.ready_state() != "loading" {
            f();
            return;
        }
        let callback = Closure::once_into_js(f);
        if let Err(err) = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            debug!(error = ?err, "could not wait for DOMContentLoaded");
        }
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| StorefrontError::ElementNotFound("body".into()))
    }

    /// `new bootstrap[name](node)`
    fn bootstrap_instance(&self, name: &str, node: &Element) -> Result<JsValue> {
        let bootstrap = Reflect::get(&self.window, &JsValue::from_str("bootstrap"))?;
        if bootstrap.is_undefined() {
            return Err(StorefrontError::Js("bootstrap is not loaded".into()));
        }
        let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str(name))?.dyn_into()?;
        Ok(Reflect::construct(&constructor, &Array::of1(node))?)
    }
}

fn wrap_listener(listener: Listener) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let kind = event.type_();
        let dom_event = match event.dyn_ref::<PageTransitionEvent>() {
            Some(transition) => DomEvent::page_transition(&kind, transition.persisted()),
            None => DomEvent::new(&kind),
        };
        listener(&dom_event);
        if dom_event.default_prevented() {
            event.prevent_default();
        }
    })
}

impl Dom for Browser {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_in(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).ok().flatten()
    }

    fn create_element(&self, tag: &str) -> Result<Element> {
        Ok(self.document.create_element(tag)?)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn append_to_body(&self, node: &Element) -> Result<()> {
        self.body()?.append_child(node)?;
        Ok(())
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<()> {
        Ok(node.set_attribute(name, value)?)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            trace!(error = ?err, class, "add_class failed");
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            trace!(error = ?err, class, "remove_class failed");
        }
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn set_class_name(&self, node: &Element, class_name: &str) {
        node.set_class_name(class_name);
    }

    fn inner_html(&self, node: &Element) -> String {
        node.inner_html()
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            node.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            if let Err(err) = el.style().set_property(property, value) {
                trace!(error = ?err, property, "set_style failed");
            }
        }
    }

    fn set_style_text(&self, node: &Element, css: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            el.style().set_css_text(css);
        }
    }

    fn listen(&self, node: &Element, event: &str, listener: Listener) {
        let callback = wrap_listener(listener);
        match node.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => callback.forget(),
            Err(err) => debug!(error = ?err, event, "could not add listener"),
        }
    }

    fn listen_window(&self, event: &str, listener: Listener) {
        let callback = wrap_listener(listener);
        match self
            .window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            Ok(()) => callback.forget(),
            Err(err) => debug!(error = ?err, event, "could not add window listener"),
        }
    }

    fn observe_visible(&self, node: &Element, on_visible: Box<dyn FnOnce()>) -> Result<()> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if !visible {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(node);
        callback.forget();
        Ok(())
    }

    fn observe_changes(&self, node: &Element, on_change: Rc<dyn Fn()>) -> Result<()> {
        let callback = Closure::<dyn FnMut(Array, MutationObserver)>::new(
            move |_records: Array, _observer: MutationObserver| on_change(),
        );
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_character_data(true);
        init.set_subtree(true);
        observer.observe_with_options(node, &init)?;
        callback.forget();
        Ok(())
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn submit(&self, form: &Element) -> Result<()> {
        let form = form
            .dyn_ref::<HtmlFormElement>()
            .ok_or_else(|| StorefrontError::ElementNotFound("form".into()))?;
        Ok(form.submit()?)
    }

    fn init_widget(&self, node: &Element, widget: Widget) -> Result<()> {
        self.bootstrap_instance(widget.class_name(), node)?;
        Ok(())
    }

    fn close_alert(&self, node: &Element) -> Result<()> {
        let alert = self.bootstrap_instance("Alert", node)?;
        let close: Function = Reflect::get(&alert, &JsValue::from_str("close"))?.dyn_into()?;
        close.call0(&alert)?;
        Ok(())
    }
}

impl TimerDriver for Browser {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId::new(self.next_timer.get());
        self.next_timer.set(id.raw() + 1);

        let timeouts = Rc::clone(&self.timeouts);
        let timeout = Timeout::new(delay_ms, move || {
            // The handle must outlive this call: dropping it here would free
            // the running closure. Forgetting it leaks one small closure per
            // fired timer for the life of the page.
            let handle = timeouts.borrow_mut().remove(&id);
            if let Some(handle) = handle {
                let _ = handle.forget();
            }
            callback();
        });
        self.timeouts.borrow_mut().insert(id, timeout);
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        let handle = self.timeouts.borrow_mut().remove(&id);
        // Dropping a gloo Timeout cancels it
        drop(handle);
    }
}
