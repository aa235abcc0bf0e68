//! Scroll-triggered fade-in and smooth in-page anchor scrolling.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

use super::{EventListener, document, query_all};

const ANIMATED: &str = ".feature-card, .stat-card, .event-card, .review-card";
const FADE_IN_CLASS: &str = "fade-in";
const THRESHOLD: f64 = 0.2;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn initialize_animations() {
    if let Err(err) = observe_fade_ins() {
        leptos::logging::warn!("fade-in animations unavailable: {err:?}");
    }
    initialize_smooth_scroll();
}

fn observe_fade_ins() -> Result<(), JsValue> {
    let targets = query_all(ANIMATED);
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(FADE_IN_CLASS);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

fn initialize_smooth_scroll() {
    for link in query_all("a[href^=\"#\"]") {
        let anchor = link.clone();
        EventListener::attach_forever(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
                return;
            };
            let Some(target) = document().and_then(|doc| doc.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
