//! Inline field validation, submit button busy state, password strength meter.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};

use super::form_fields::read_control;
use super::{EventListener, document, query_all, query_all_in, set_style};
use crate::state::submit::{PROCESSING_LABEL_HTML, SUBMIT_FAILSAFE_MS, SubmitGuard};
use crate::util::password_strength::evaluate;
use crate::util::timer::{SharedScheduler, TimerHandle, browser_scheduler};
use crate::util::validation::{FieldError, FieldInput, PASSWORD_FIELD, validate_field};

const ERROR_CLASS: &str = "error";
const FIELD_CONTROLS: &str = "input, textarea, select";
const SUBMIT_CONTROLS: &str = "input[type=\"submit\"], button[type=\"submit\"]";

/// Wire validation and submit handling for every form, plus the strength
/// meter on `password` inputs.
pub fn initialize_form_validation() {
    let scheduler = browser_scheduler();
    for form in query_all("form") {
        for control in query_all_in(&form, FIELD_CONTROLS) {
            let field = control.clone();
            EventListener::attach_forever(&control, "blur", move |_| {
                validate_element(&field);
            });
            let field = control.clone();
            EventListener::attach_forever(&control, "input", move |_| clear_field_error(&field));
        }
        bind_submit(&form, &scheduler);
    }

    for field in query_all("input[type=\"password\"]") {
        let is_primary = field
            .dyn_ref::<web_sys::HtmlInputElement>()
            .is_some_and(|input| input.name() == PASSWORD_FIELD);
        if !is_primary {
            continue;
        }
        let target = field.clone();
        EventListener::attach_forever(&field, "input", move |_| show_password_strength(&target));
    }
}

/// Validate one control and show or clear its inline error.
pub fn validate_element(element: &web_sys::Element) -> bool {
    let Some(control) = read_control(element) else {
        return true;
    };
    let password = document()
        .and_then(|doc| doc.query_selector("input[name=\"password\"]").ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value());
    let input = FieldInput {
        name: &control.name,
        input_type: &control.input_type,
        value: &control.value,
        required: element.has_attribute("required"),
    };
    match validate_field(&input, password.as_deref()) {
        Ok(()) => {
            clear_field_error(element);
            true
        }
        Err(err) => {
            show_field_error(element, err);
            false
        }
    }
}

fn show_field_error(element: &web_sys::Element, err: FieldError) {
    clear_field_error(element);
    if element.class_list().add_1(ERROR_CLASS).is_err() {
        leptos::logging::warn!("could not mark field as invalid");
    }
    let (Some(doc), Some(parent)) = (document(), element.parent_node()) else {
        return;
    };
    let appended = doc.create_element("div").and_then(|message| {
        message.set_class_name("form-error");
        message.set_text_content(Some(&err.to_string()));
        parent.append_child(&message)
    });
    if appended.is_err() {
        leptos::logging::warn!("could not show field error: {err}");
    }
}

fn clear_field_error(element: &web_sys::Element) {
    let _ = element.class_list().remove_1(ERROR_CLASS);
    let existing = element
        .parent_element()
        .and_then(|parent| parent.query_selector(".form-error").ok().flatten());
    if let Some(existing) = existing {
        existing.remove();
    }
}

fn bind_submit(form: &web_sys::Element, scheduler: &SharedScheduler) {
    let guard = Rc::new(RefCell::new(SubmitGuard::default()));
    let failsafe: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));
    let form_el = form.clone();
    let scheduler = Rc::clone(scheduler);
    EventListener::attach_forever(form, "submit", move |_| {
        let Ok(Some(button)) = form_el.query_selector(SUBMIT_CONTROLS) else {
            return;
        };
        let Some(html) = button.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        if !guard.borrow_mut().begin(&html.inner_html(), is_disabled(&button)) {
            return;
        }
        html.set_inner_html(PROCESSING_LABEL_HTML);
        set_disabled(&button, true);

        let guard = Rc::clone(&guard);
        let slot = Rc::clone(&failsafe);
        let task = Box::new(move || {
            let label = guard.borrow_mut().release();
            if let Some(label) = label.filter(|_| is_disabled(&button)) {
                if let Some(html) = button.dyn_ref::<web_sys::HtmlElement>() {
                    html.set_inner_html(&label);
                }
                set_disabled(&button, false);
            }
            let fired = slot.borrow_mut().take();
            drop(fired);
        });
        *failsafe.borrow_mut() = Some(scheduler.schedule(SUBMIT_FAILSAFE_MS, task));
    });
}

fn is_disabled(element: &web_sys::Element) -> bool {
    if let Some(button) = element.dyn_ref::<web_sys::HtmlButtonElement>() {
        return button.disabled();
    }
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.disabled();
    }
    element.has_attribute("disabled")
}

fn set_disabled(element: &web_sys::Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_disabled(disabled);
    }
}

/// Render the strength meter next to a password field.
pub fn show_password_strength(field: &web_sys::Element) {
    let Some(value) = field.dyn_ref::<web_sys::HtmlInputElement>().map(web_sys::HtmlInputElement::value) else {
        return;
    };
    if let Err(err) = render_strength(field, &value) {
        leptos::logging::warn!("could not render password strength: {err:?}");
    }
}

fn render_strength(field: &web_sys::Element, value: &str) -> Result<(), JsValue> {
    let (Some(doc), Some(parent)) = (document(), field.parent_element()) else {
        return Ok(());
    };
    let meter = match parent.query_selector(".password-strength")? {
        Some(meter) => meter,
        None => {
            let meter = doc.create_element("div")?;
            meter.set_class_name("password-strength");
            parent.append_child(&meter)?;
            meter
        }
    };

    let Some(strength) = evaluate(value) else {
        set_style(&meter, "display", "none");
        return Ok(());
    };
    let color = strength.level.color();
    meter.set_inner_html(&format!(
        r#"<div class="strength-bar"><div class="strength-fill" style="width: {}%; background-color: {color};"></div></div><span class="strength-text" style="color: {color};">{}</span>"#,
        strength.fill_percent(),
        strength.level.label(),
    ));
    set_style(&meter, "display", "block");
    Ok(())
}
