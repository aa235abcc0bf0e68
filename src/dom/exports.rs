//! Script-facing API.
//!
//! Page scripts reach the widgets and helpers through these `wasm_bindgen`
//! exports: `showAlert`, `copyToClipboard`, `formatDate`, `formatTime`,
//! `debounce`, `throttle`, `toggleDarkMode`, and the `StarRating` and
//! `FormAutoSave` classes.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::autosave::AutoSaveBinding;
use super::star_rating::{RatingCallback, StarRatingWidget};
use crate::state::autosave::AutoSaveOptions;
use crate::state::rating::RatingOptions;
use crate::util::clipboard::copy_to_clipboard;
use crate::util::dark_mode;
use crate::util::debounce::{debounce, throttle};
use crate::util::format::{format_date, format_time};
use crate::util::storage::LocalStorage;
use crate::util::timer::browser_scheduler;

#[wasm_bindgen(js_name = showAlert)]
pub fn show_alert(kind: &str, message: &str) {
    super::alerts::show_alert(kind, message);
}

/// Resolves once the text is on the clipboard; rejects with the reason.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard_js(text: String) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        copy_to_clipboard(&text)
            .await
            .map(|()| JsValue::UNDEFINED)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    })
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date_js(iso: &str) -> Result<String, JsError> {
    format_date(iso).map_err(JsError::from)
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time_js(hh_mm: &str) -> Result<String, JsError> {
    format_time(hh_mm).map_err(JsError::from)
}

/// Debounced wrapper around `func`. The last call's `this` and arguments
/// are forwarded.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce_js(func: js_sys::Function, wait_ms: u32) -> js_sys::Function {
    let debounced = debounce(move |call: JsCall| call.apply(&func), wait_ms, browser_scheduler());
    into_function(move |call| debounced.call(call))
}

/// Throttled wrapper around `func`. Each accepted call's `this` and
/// arguments are forwarded.
#[wasm_bindgen(js_name = throttle)]
pub fn throttle_js(func: js_sys::Function, limit_ms: u32) -> js_sys::Function {
    let throttled = throttle(move |call: JsCall| call.apply(&func), limit_ms, browser_scheduler());
    into_function(move |call| {
        throttled.call(call);
    })
}

/// Flip dark mode and persist the choice. Returns the new state.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() -> bool {
    let current = super::document()
        .and_then(|doc| doc.body())
        .is_some_and(|body| body.class_list().contains(dark_mode::DARK_MODE_CLASS));
    dark_mode::toggle(&LocalStorage, current)
}

#[wasm_bindgen(inline_js = "export function forwardCall(f) { return function (...args) { return f(this, args); }; }")]
extern "C" {
    /// Wrap `handler` in a plain function that passes its `this` and its
    /// argument list through as two values.
    #[wasm_bindgen(js_name = forwardCall)]
    fn forward_call(handler: &js_sys::Function) -> js_sys::Function;
}

/// One invocation of a wrapped function.
struct JsCall {
    this: JsValue,
    args: js_sys::Array,
}

impl JsCall {
    fn apply(&self, func: &js_sys::Function) {
        if let Err(err) = func.apply(&self.this, &self.args) {
            leptos::logging::warn!("wrapped callback threw: {err:?}");
        }
    }
}

fn call_js(func: &js_sys::Function, arg: &JsValue) {
    if let Err(err) = func.call1(&JsValue::NULL, arg) {
        leptos::logging::warn!("wrapped callback threw: {err:?}");
    }
}

fn into_function(mut handler: impl FnMut(JsCall) + 'static) -> js_sys::Function {
    let closure = Closure::wrap(
        Box::new(move |this: JsValue, args: js_sys::Array| handler(JsCall { this, args }))
            as Box<dyn FnMut(JsValue, js_sys::Array)>,
    );
    forward_call(&closure.into_js_value().unchecked_into())
}

/// Decode an options object through JSON. `undefined`, `null` and anything
/// that does not encode as an object mean defaults; function-valued members
/// are dropped by the encoding.
fn parse_options<T: DeserializeOwned + Default>(options: &JsValue) -> T {
    if options.is_undefined() || options.is_null() {
        return T::default();
    }
    let Some(json) = js_sys::JSON::stringify(options).ok().and_then(|json| json.as_string()) else {
        leptos::logging::warn!("options could not be encoded; using defaults");
        return T::default();
    };
    serde_json::from_str(&json).unwrap_or_else(|err| {
        leptos::logging::warn!("invalid options `{json}`: {err}; using defaults");
        T::default()
    })
}

fn option_callback(options: &JsValue) -> Option<RatingCallback> {
    if !options.is_object() {
        return None;
    }
    let func = js_sys::Reflect::get(options, &JsValue::from_str("callback"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some(Rc::new(move |rating: u32| call_js(&func, &JsValue::from(rating))))
}

#[wasm_bindgen(js_name = StarRating)]
pub struct JsStarRating {
    widget: StarRatingWidget,
}

#[wasm_bindgen(js_class = StarRating)]
impl JsStarRating {
    /// `new StarRating(container, {maxStars, initialRating, readonly, size, input, callback})`
    #[wasm_bindgen(constructor)]
    pub fn new(container: web_sys::HtmlElement, options: JsValue) -> JsStarRating {
        let parsed: RatingOptions = parse_options(&options);
        let widget = StarRatingWidget::mount(container, &parsed, option_callback(&options));
        Self { widget }
    }

    #[wasm_bindgen(js_name = getRating)]
    pub fn get_rating(&self) -> u32 {
        self.widget.rating()
    }

    #[wasm_bindgen(js_name = setRating)]
    pub fn set_rating(&self, rating: u32) {
        self.widget.set_rating(rating);
    }

    #[wasm_bindgen(js_name = highlightStars)]
    pub fn highlight_stars(&self, count: u32) {
        self.widget.highlight(count);
    }

    pub fn dispose(self) {
        self.widget.dispose();
    }
}

#[wasm_bindgen(js_name = FormAutoSave)]
pub struct JsFormAutoSave {
    binding: AutoSaveBinding,
}

#[wasm_bindgen(js_class = FormAutoSave)]
impl JsFormAutoSave {
    /// `new FormAutoSave(form, {storageKey, saveInterval, excludeFields})`
    #[wasm_bindgen(constructor)]
    pub fn new(form: web_sys::HtmlFormElement, options: JsValue) -> JsFormAutoSave {
        let parsed: AutoSaveOptions = parse_options(&options);
        Self {
            binding: AutoSaveBinding::attach(form, parsed),
        }
    }

    #[wasm_bindgen(js_name = saveData)]
    pub fn save_data(&self) -> bool {
        self.binding.save()
    }

    #[wasm_bindgen(js_name = loadSavedData)]
    pub fn load_saved_data(&self) -> u32 {
        u32::try_from(self.binding.restore()).unwrap_or(u32::MAX)
    }

    #[wasm_bindgen(js_name = clearSavedData)]
    pub fn clear_saved_data(&self) -> bool {
        self.binding.clear()
    }

    #[wasm_bindgen(getter, js_name = storageKey)]
    pub fn storage_key(&self) -> String {
        self.binding.storage_key().to_owned()
    }

    pub fn dispose(self) {
        self.binding.dispose();
    }
}
