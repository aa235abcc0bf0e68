//! Auto-save bound to a live `<form>`.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use super::form_fields::{DomForm, form_identity};
use super::{EventListener, query_all};
use crate::state::autosave::{AutoSaveConfig, AutoSaveOptions, FormAutoSave};
use crate::util::storage::LocalStorage;
use crate::util::timer::browser_scheduler;

/// Form auto-save with its DOM listeners. Dropping it detaches the listeners
/// and cancels any pending save.
pub struct AutoSaveBinding {
    autosave: Rc<FormAutoSave<DomForm, LocalStorage>>,
    _listeners: Vec<EventListener>,
}

impl AutoSaveBinding {
    /// Restore the stored draft into `form` and start saving edits.
    pub fn attach(form: web_sys::HtmlFormElement, options: AutoSaveOptions) -> Self {
        let config = AutoSaveConfig::resolve(form_identity(&form).as_deref(), options);
        let target: web_sys::EventTarget = form.clone().into();
        let autosave = Rc::new(FormAutoSave::attach(
            DomForm::new(form),
            config,
            LocalStorage,
            browser_scheduler(),
        ));

        let mut listeners = Vec::with_capacity(2);
        let on_input = Rc::clone(&autosave);
        listeners.extend(EventListener::new(&target, "input", move |event| {
            if let Some(name) = event_field_name(&event) {
                on_input.on_input(&name);
            }
        }));
        let on_submit = Rc::clone(&autosave);
        listeners.extend(EventListener::new(&target, "submit", move |_| on_submit.on_submit()));

        Self {
            autosave,
            _listeners: listeners,
        }
    }

    pub fn save(&self) -> bool {
        self.autosave.save_now()
    }

    /// Write the stored draft back into the form. Returns fields restored.
    pub fn restore(&self) -> usize {
        self.autosave.with_form_mut(|form| self.autosave.autosave().restore(form))
    }

    pub fn clear(&self) -> bool {
        self.autosave.autosave().clear()
    }

    pub fn storage_key(&self) -> &str {
        self.autosave.autosave().storage_key()
    }

    /// Detach listeners and cancel any pending save. The stored draft is kept.
    pub fn dispose(self) {
        drop(self);
    }

    /// Keep the binding attached for the rest of the page's life.
    pub fn keep_for_page(self) {
        std::mem::forget(self);
    }
}

fn event_field_name(event: &web_sys::Event) -> Option<String> {
    let target = event.target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    element.get_attribute("name").filter(|name| !name.is_empty())
}

/// Attach auto-save to every `form[data-autosave]`. A non-empty attribute
/// value is read as [`AutoSaveOptions`] JSON.
pub fn attach_declared_forms() {
    for element in query_all("form[data-autosave]") {
        let Ok(form) = element.dyn_into::<web_sys::HtmlFormElement>() else {
            continue;
        };
        let raw = form.get_attribute("data-autosave").unwrap_or_default();
        let options = if raw.trim().is_empty() {
            AutoSaveOptions::default()
        } else {
            serde_json::from_str(&raw).unwrap_or_else(|err| {
                leptos::logging::warn!("invalid auto-save options `{raw}`: {err}");
                AutoSaveOptions::default()
            })
        };
        AutoSaveBinding::attach(form, options).keep_for_page();
    }
}
