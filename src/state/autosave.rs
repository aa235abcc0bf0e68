//! Form draft auto-save.
//!
//! DESIGN
//! ======
//! A form's entered values are mirrored into browser-local storage under a
//! per-form key so a reload or crash does not lose a half-written event or
//! review. The flow is:
//!
//! 1. On attach, the stored record (if any) is written back into the form.
//! 2. Every input event on a watched field re-arms a trailing debounce; when
//!    the form goes quiet for `save_interval_ms` the whole form is snapshotted
//!    and the record overwritten.
//! 3. Submitting the form deletes the record and drops any pending save.
//!
//! Excluded fields (passwords by default) are never written and never
//! restored. The record is deliberately kept when the user navigates away
//! without submitting.
//!
//! The form itself sits behind [`FormFields`] so this module has no DOM
//! dependency; the page binding implements it for `HtmlFormElement`.

#[cfg(test)]
#[path = "autosave_test.rs"]
mod autosave_test;

use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::debounce::{Debounced, debounce};
use crate::util::lenient::{self, Rounding};
use crate::util::storage::{KeyValueStore, load_json, remove, save_json};
use crate::util::timer::SharedScheduler;

pub const DEFAULT_SAVE_INTERVAL_MS: u32 = 2_000;
pub const STORAGE_KEY_PREFIX: &str = "autosave_";

/// Identity used when a form has neither an `id` nor a `name`.
///
/// Every such form on a page shares one record, so a warning is logged when
/// it is used.
pub const FALLBACK_FORM_IDENTITY: &str = "form";

/// Persisted draft: field name to entered value.
pub type FormRecord = BTreeMap<String, String>;

/// Construction options, deserializable from a page script's options object.
///
/// `saveIntervalMs` is accepted as a spelling of `saveInterval`. Mistyped or
/// `null` members take their default rather than failing the whole object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAutoSaveOptions", rename_all = "camelCase")]
pub struct AutoSaveOptions {
    pub storage_key: Option<String>,
    pub save_interval: u32,
    pub exclude_fields: Vec<String>,
}

impl Default for AutoSaveOptions {
    fn default() -> Self {
        Self {
            storage_key: None,
            save_interval: DEFAULT_SAVE_INTERVAL_MS,
            exclude_fields: vec!["password".to_owned(), "password2".to_owned()],
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawAutoSaveOptions {
    storage_key: Value,
    save_interval: Value,
    save_interval_ms: Value,
    exclude_fields: Value,
}

impl From<RawAutoSaveOptions> for AutoSaveOptions {
    fn from(raw: RawAutoSaveOptions) -> Self {
        let defaults = Self::default();
        let interval = if raw.save_interval.is_null() {
            &raw.save_interval_ms
        } else {
            &raw.save_interval
        };
        Self {
            storage_key: lenient::string(&raw.storage_key),
            save_interval: lenient::count_or(interval, defaults.save_interval, Rounding::Nearest),
            exclude_fields: lenient::strings(&raw.exclude_fields).unwrap_or(defaults.exclude_fields),
        }
    }
}

/// Resolved, immutable auto-save settings for one form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoSaveConfig {
    pub storage_key: String,
    pub save_interval_ms: u32,
    pub exclude_fields: BTreeSet<String>,
}

impl AutoSaveConfig {
    /// Resolve `options` against the form's identity (its `id`, else `name`).
    ///
    /// An explicit non-empty `storage_key` wins; a zero interval falls back to
    /// the default.
    #[must_use]
    pub fn resolve(identity: Option<&str>, options: AutoSaveOptions) -> Self {
        let storage_key = options
            .storage_key
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| storage_key_for(identity));
        let save_interval_ms = if options.save_interval == 0 {
            DEFAULT_SAVE_INTERVAL_MS
        } else {
            options.save_interval
        };
        Self {
            storage_key,
            save_interval_ms,
            exclude_fields: options.exclude_fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, field_name: &str) -> bool {
        self.exclude_fields.contains(field_name)
    }
}

/// Storage key for a form identity, e.g. `autosave_create-event`.
#[must_use]
pub fn storage_key_for(identity: Option<&str>) -> String {
    match identity.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{STORAGE_KEY_PREFIX}{id}"),
        None => {
            leptos::logging::warn!(
                "auto-save form has no id or name; drafts share `{STORAGE_KEY_PREFIX}{FALLBACK_FORM_IDENTITY}` with other unnamed forms"
            );
            format!("{STORAGE_KEY_PREFIX}{FALLBACK_FORM_IDENTITY}")
        }
    }
}

/// Kind of form control, as far as restore cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select,
    Email,
    Password,
    Checkbox,
    Radio,
    Hidden,
    File,
    Other,
}

impl FieldKind {
    /// Classify an `<input>` by its `type` attribute.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "" | "text" | "search" | "tel" | "url" | "number" | "date" | "time" | "datetime-local" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "hidden" => Self::Hidden,
            "file" => Self::File,
            _ => Self::Other,
        }
    }

    /// File inputs cannot be assigned a value from script.
    #[must_use]
    pub fn is_restorable(self) -> bool {
        self != Self::File
    }
}

/// The slice of a form that auto-save reads and writes.
pub trait FormFields {
    /// Current entries in document order, as form submission would encode
    /// them. File entries are omitted.
    fn entries(&self) -> Vec<(String, String)>;

    /// Kind of the control named `name`, or `None` when the form has none.
    fn field_kind(&self, name: &str) -> Option<FieldKind>;

    /// Assign `value` to the control named `name`.
    fn set_value(&mut self, name: &str, value: &str);
}

/// Storage-side operations for one form's draft record.
#[derive(Debug)]
pub struct AutoSave<S> {
    config: AutoSaveConfig,
    store: S,
}

impl<S: KeyValueStore> AutoSave<S> {
    pub fn new(config: AutoSaveConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &AutoSaveConfig {
        &self.config
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// The stored draft, if one exists and decodes.
    ///
    /// Entries whose value is not a string are dropped; the rest survive.
    pub fn saved(&self) -> Option<FormRecord> {
        let record: BTreeMap<String, Value> = load_json(&self.store, &self.config.storage_key)?;
        Some(
            record
                .into_iter()
                .filter_map(|(name, value)| match value {
                    Value::String(value) => Some((name, value)),
                    _ => None,
                })
                .collect(),
        )
    }

    /// Write the stored draft back into `form`.
    ///
    /// Only keys the form actually has are applied; file inputs and excluded
    /// fields are skipped. Returns the number of fields written.
    pub fn restore(&self, form: &mut impl FormFields) -> usize {
        let Some(record) = self.saved() else {
            return 0;
        };
        let mut restored = 0;
        for (name, value) in &record {
            if self.config.is_excluded(name) {
                continue;
            }
            match form.field_kind(name) {
                Some(kind) if kind.is_restorable() => {
                    form.set_value(name, value);
                    restored += 1;
                }
                _ => {}
            }
        }
        restored
    }

    /// Current form values minus excluded fields. Repeated names keep the last
    /// value.
    pub fn snapshot(&self, form: &impl FormFields) -> FormRecord {
        form.entries()
            .into_iter()
            .filter(|(name, _)| !self.config.is_excluded(name))
            .collect()
    }

    /// Overwrite the stored draft with the current form values.
    pub fn save(&self, form: &impl FormFields) -> bool {
        let record = self.snapshot(form);
        save_json(&self.store, &self.config.storage_key, &record)
    }

    /// Delete the stored draft.
    pub fn clear(&self) -> bool {
        remove(&self.store, &self.config.storage_key)
    }
}

/// A form with auto-save attached: restore on attach, debounced save on
/// input, clear on submit.
pub struct FormAutoSave<F, S> {
    shared: Rc<Attached<F, S>>,
    pending_save: Debounced<()>,
}

struct Attached<F, S> {
    autosave: AutoSave<S>,
    form: RefCell<F>,
}

impl<F, S> FormAutoSave<F, S>
where
    F: FormFields + 'static,
    S: KeyValueStore + 'static,
{
    /// Restore any stored draft into `form` and start watching it.
    pub fn attach(mut form: F, config: AutoSaveConfig, store: S, scheduler: SharedScheduler) -> Self {
        let interval = config.save_interval_ms;
        let autosave = AutoSave::new(config, store);
        autosave.restore(&mut form);

        let shared = Rc::new(Attached {
            autosave,
            form: RefCell::new(form),
        });
        let weak = Rc::downgrade(&shared);
        let pending_save = debounce(
            move |()| {
                if let Some(attached) = weak.upgrade() {
                    attached.autosave.save(&*attached.form.borrow());
                }
            },
            interval,
            scheduler,
        );

        Self { shared, pending_save }
    }

    /// An input event arrived from the field named `field_name`.
    ///
    /// Returns `false` for excluded fields, which never schedule a save.
    pub fn on_input(&self, field_name: &str) -> bool {
        if self.shared.autosave.config().is_excluded(field_name) {
            return false;
        }
        self.pending_save.call(());
        true
    }

    /// The form is being submitted: drop the draft and any pending save.
    pub fn on_submit(&self) {
        self.pending_save.cancel();
        self.shared.autosave.clear();
    }

    /// Save immediately, bypassing the debounce.
    pub fn save_now(&self) -> bool {
        self.pending_save.cancel();
        self.shared.autosave.save(&*self.shared.form.borrow())
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_pending()
    }

    pub fn autosave(&self) -> &AutoSave<S> {
        &self.shared.autosave
    }

    pub fn form(&self) -> Ref<'_, F> {
        self.shared.form.borrow()
    }

    /// Mutate the watched form, e.g. to apply user edits in tests.
    pub fn with_form_mut<R>(&self, edit: impl FnOnce(&mut F) -> R) -> R {
        edit(&mut self.shared.form.borrow_mut())
    }

    /// Stop watching. The stored draft is kept.
    pub fn dispose(self) {
        self.pending_save.cancel();
    }
}
