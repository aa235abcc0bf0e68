//! Page bindings for server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here runs only in the browser (`hydrate`). Each submodule wires
//! one page concern (navigation, alerts, forms, animations, widgets) to the
//! DOM and delegates behaviour to the matching `state`/`util` module, so the
//! code in this tree is limited to element lookup, listeners, and styling.
//!
//! TRADE-OFFS
//! ==========
//! Page-lifetime listeners are leaked with [`EventListener::forget`], the
//! same way `setTimeout` callbacks outlive their caller in script. Widgets
//! constructed from script keep their listeners and remove them on dispose.

pub mod alerts;
pub mod animations;
pub mod autosave;
pub mod exports;
pub mod form_fields;
pub mod forms;
pub mod nav;
pub mod star_rating;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Collect a `NodeList` into elements, skipping non-element nodes.
pub(crate) fn elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// All elements under `document` matching `selector`.
pub(crate) fn query_all(selector: &str) -> Vec<web_sys::Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// All elements under `root` matching `selector`.
pub(crate) fn query_all_in(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Set an inline style property, logging failures.
pub(crate) fn set_style(element: &web_sys::Element, property: &str, value: &str) {
    let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    if html.style().set_property(property, value).is_err() {
        leptos::logging::warn!("could not set style {property} on element");
    }
}

/// A registered DOM event listener. Dropping it removes the listener.
pub(crate) struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub(crate) fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("could not register {event} listener");
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Register `handler` for the lifetime of the page.
    pub(crate) fn attach_forever(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) {
        if let Some(listener) = Self::new(target, event, handler) {
            listener.forget();
        }
    }

    /// Keep the listener registered after this value goes away.
    pub(crate) fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
