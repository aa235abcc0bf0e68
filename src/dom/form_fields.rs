//! `HtmlFormElement` access for validation and auto-save.

use wasm_bindgen::JsCast;

use crate::state::autosave::{FieldKind, FormFields};

/// A form control reduced to what the page bindings read.
pub(crate) struct Control {
    pub name: String,
    pub input_type: String,
    pub value: String,
    pub kind: FieldKind,
}

/// Read an `<input>`, `<textarea>`, or `<select>`. Other elements yield `None`.
pub(crate) fn read_control(element: &web_sys::Element) -> Option<Control> {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        let input_type = input.type_().to_ascii_lowercase();
        return Some(Control {
            name: input.name(),
            kind: FieldKind::from_input_type(&input_type),
            input_type,
            value: input.value(),
        });
    }
    if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(Control {
            name: textarea.name(),
            input_type: "textarea".to_owned(),
            value: textarea.value(),
            kind: FieldKind::TextArea,
        });
    }
    if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(Control {
            name: select.name(),
            input_type: "select".to_owned(),
            value: select.value(),
            kind: FieldKind::Select,
        });
    }
    None
}

/// Assign `value` to a control. Returns `false` for unsupported elements.
pub(crate) fn write_control(element: &web_sys::Element, value: &str) -> bool {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        textarea.set_value(value);
    } else if let Some(select) = element.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else {
        return false;
    }
    true
}

/// CSS attribute selector for a control name, e.g. `[name="title"]`.
pub(crate) fn name_selector(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[name=\"{escaped}\"]")
}

/// `id`, else `name`, of a form.
pub(crate) fn form_identity(form: &web_sys::HtmlFormElement) -> Option<String> {
    let id = form.id();
    if !id.is_empty() {
        return Some(id);
    }
    let name = form.name();
    (!name.is_empty()).then_some(name)
}

/// Live form element behind [`FormFields`].
pub struct DomForm {
    form: web_sys::HtmlFormElement,
}

impl DomForm {
    pub fn new(form: web_sys::HtmlFormElement) -> Self {
        Self { form }
    }

    fn find(&self, name: &str) -> Option<web_sys::Element> {
        self.form.query_selector(&name_selector(name)).ok().flatten()
    }
}

impl FormFields for DomForm {
    fn entries(&self) -> Vec<(String, String)> {
        let Ok(data) = web_sys::FormData::new_with_form(&self.form) else {
            leptos::logging::warn!("could not read form data");
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        iter.filter_map(Result::ok)
            .filter_map(|pair| {
                let pair = js_sys::Array::from(&pair);
                let name = pair.get(0).as_string()?;
                // File entries are not strings.
                let value = pair.get(1).as_string()?;
                Some((name, value))
            })
            .collect()
    }

    fn field_kind(&self, name: &str) -> Option<FieldKind> {
        let element = self.find(name)?;
        read_control(&element).map(|control| control.kind)
    }

    fn set_value(&mut self, name: &str, value: &str) {
        if let Some(element) = self.find(name) {
            write_control(&element, value);
        }
    }
}
