//! Flash alerts: close buttons, auto-dismiss, and script-triggered alerts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::{EventListener, document, query_all, set_style};
use crate::state::alerts::{
    AUTO_DISMISS_MS, AlertKind, AlertLifecycle, FADE_OUT_MS, LEAVING_OPACITY, LEAVING_TRANSFORM,
};
use crate::util::timer::{SharedScheduler, TimerHandle, browser_scheduler};

struct AlertBinding {
    element: web_sys::Element,
    lifecycle: Cell<AlertLifecycle>,
    timer: RefCell<Option<TimerHandle>>,
    scheduler: SharedScheduler,
}

impl AlertBinding {
    fn dismiss(self: &Rc<Self>) {
        let mut lifecycle = self.lifecycle.get();
        if !lifecycle.dismiss() {
            return;
        }
        self.lifecycle.set(lifecycle);
        set_style(&self.element, "opacity", LEAVING_OPACITY);
        set_style(&self.element, "transform", LEAVING_TRANSFORM);

        let this = Rc::clone(self);
        let handle = self.scheduler.schedule(FADE_OUT_MS, Box::new(move || this.finish()));
        let previous = self.timer.replace(Some(handle));
        drop(previous);
    }

    fn finish(&self) {
        let mut lifecycle = self.lifecycle.get();
        if lifecycle.finish() {
            self.element.remove();
        }
        self.lifecycle.set(lifecycle);
        let fired = self.timer.borrow_mut().take();
        drop(fired);
    }

    fn auto_dismiss(self: &Rc<Self>) {
        if self.element.parent_node().is_none() {
            let mut lifecycle = self.lifecycle.get();
            lifecycle.detach();
            self.lifecycle.set(lifecycle);
            let fired = self.timer.borrow_mut().take();
            drop(fired);
            return;
        }
        self.dismiss();
    }
}

/// Attach dismissal behaviour to every server-rendered `.alert`.
pub fn initialize_alerts() {
    let scheduler = browser_scheduler();
    for element in query_all(".alert") {
        bind(element, &scheduler);
    }
}

/// Show a transient alert at the top of `.flash-container` (or `<body>`).
///
/// Unknown kinds are shown as info. `message` is inserted as text.
pub fn show_alert(kind: &str, message: &str) {
    let kind = AlertKind::parse(kind).unwrap_or_else(|| {
        leptos::logging::warn!("unknown alert type `{kind}`; showing as info");
        AlertKind::Info
    });
    match build_alert(kind, message) {
        Ok(Some(element)) => bind(element, &browser_scheduler()),
        Ok(None) => leptos::logging::warn!("no flash container or body to show alert in"),
        Err(err) => leptos::logging::warn!("could not show alert: {err:?}"),
    }
}

fn build_alert(kind: AlertKind, message: &str) -> Result<Option<web_sys::Element>, JsValue> {
    let Some(doc) = document() else {
        return Ok(None);
    };
    let container = match doc.query_selector(".flash-container")? {
        Some(container) => container,
        None => match doc.body() {
            Some(body) => body.into(),
            None => return Ok(None),
        },
    };

    let alert = doc.create_element("div")?;
    alert.set_class_name(&kind.class_list());
    let text = doc.create_element("span")?;
    text.set_text_content(Some(message));
    let close = doc.create_element("button")?;
    close.set_class_name("alert-close");
    close.set_text_content(Some("\u{d7}"));
    alert.append_child(&text)?;
    alert.append_child(&close)?;

    container.insert_before(&alert, container.first_child().as_ref())?;
    Ok(Some(alert))
}

fn bind(element: web_sys::Element, scheduler: &SharedScheduler) {
    let binding = Rc::new(AlertBinding {
        element,
        lifecycle: Cell::new(AlertLifecycle::new()),
        timer: RefCell::new(None),
        scheduler: Rc::clone(scheduler),
    });

    if let Ok(Some(close)) = binding.element.query_selector(".alert-close") {
        let binding = Rc::clone(&binding);
        EventListener::attach_forever(&close, "click", move |_| binding.dismiss());
    }

    let this = Rc::clone(&binding);
    let handle = scheduler.schedule(AUTO_DISMISS_MS, Box::new(move || this.auto_dismiss()));
    *binding.timer.borrow_mut() = Some(handle);
}
