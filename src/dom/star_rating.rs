//! Star rating widget mounted into a page container.
//!
//! SYSTEM CONTEXT
//! ==============
//! Styles an existing element as the rating container, mounts the star spans
//! into it, and turns commits into page-visible effects: the optional script callback, the
//! bound hidden form field, and a `ratingChanged` event on the container.

use std::any::Any;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use super::form_fields::{name_selector, write_control};
use super::{EventListener, query_all};
use crate::components::star_rating::{StarUnits, commit_rating};
use crate::state::rating::{RATING_CHANGED_EVENT, RatingChanged, RatingOptions, RatingState};

/// Script callback invoked with each committed rating.
pub type RatingCallback = Rc<dyn Fn(u32)>;

struct Notifier {
    container: web_sys::HtmlElement,
    input: Option<String>,
    callback: Option<RatingCallback>,
}

impl Notifier {
    fn publish(&self, changed: RatingChanged) {
        if let Some(callback) = &self.callback {
            callback(changed.rating);
        }
        if let Some(name) = &self.input {
            self.write_input(name, changed.rating);
        }
        if let Err(err) = self.dispatch(changed) {
            leptos::logging::warn!("could not dispatch {RATING_CHANGED_EVENT}: {err:?}");
        }
    }

    fn write_input(&self, name: &str, rating: u32) {
        let selector = name_selector(name);
        let field = self
            .container
            .closest("form")
            .ok()
            .flatten()
            .and_then(|form| form.query_selector(&selector).ok().flatten())
            .or_else(|| super::document().and_then(|doc| doc.query_selector(&selector).ok().flatten()));
        match field {
            Some(field) => {
                write_control(&field, &rating.to_string());
            }
            None => leptos::logging::warn!("rating input `{name}` not found"),
        }
    }

    fn dispatch(&self, changed: RatingChanged) -> Result<(), JsValue> {
        let detail = js_sys::Object::new();
        js_sys::Reflect::set(&detail, &JsValue::from_str("rating"), &JsValue::from(changed.rating))?;
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        let event = web_sys::CustomEvent::new_with_event_init_dict(RATING_CHANGED_EVENT, &init)?;
        self.container.dispatch_event(&event)?;
        Ok(())
    }
}

/// A mounted rating widget. Dropping it without [`StarRatingWidget::dispose`]
/// also unmounts.
pub struct StarRatingWidget {
    state: RwSignal<RatingState>,
    notifier: Rc<Notifier>,
    owner: Owner,
    mounted: Option<Box<dyn Any>>,
    mouseleave: Option<EventListener>,
    previous_class: String,
}

impl StarRatingWidget {
    /// Turn `container` into a rating widget, replacing its content.
    ///
    /// The container itself carries the `star-rating <size>` classes; its
    /// previous class list comes back on dispose.
    pub fn mount(container: web_sys::HtmlElement, options: &RatingOptions, callback: Option<RatingCallback>) -> Self {
        let notifier = Rc::new(Notifier {
            container: container.clone(),
            input: options.input.clone(),
            callback,
        });
        let previous_class = container.class_name();
        let owner = Owner::new();
        let (state, mounted) = owner.with(|| {
            let state = RwSignal::new(RatingState::new(options));
            let publish = {
                let notifier = Rc::clone(&notifier);
                move |changed: RatingChanged| notifier.publish(changed)
            };
            container.set_class_name(&state.with_untracked(RatingState::container_class));
            for (name, value) in [("role", "radiogroup"), ("aria-label", "Rating")] {
                if container.set_attribute(name, value).is_err() {
                    leptos::logging::warn!("could not set {name} on star rating container");
                }
            }
            container.set_inner_html("");
            let handle = leptos::mount::mount_to(container.clone(), move || {
                view! { <StarUnits state=state on_change=publish /> }
            });
            (state, Box::new(handle) as Box<dyn Any>)
        });
        let mouseleave = EventListener::new(&container, "mouseleave", move |_| state.update(RatingState::leave));
        Self {
            state,
            notifier,
            owner,
            mounted: Some(mounted),
            mouseleave,
            previous_class,
        }
    }

    pub fn rating(&self) -> u32 {
        self.state.with_untracked(RatingState::rating)
    }

    /// Commit `n` as if it had been clicked. Ignored when readonly.
    pub fn set_rating(&self, n: u32) {
        if let Some(changed) = commit_rating(self.state, n) {
            self.notifier.publish(changed);
        }
    }

    /// Light the first `n` stars without committing.
    pub fn highlight(&self, n: u32) {
        self.state.update(|s| s.highlight(n));
    }

    /// Unmount and release the widget's reactive state.
    pub fn dispose(mut self) {
        self.unmount();
    }

    /// Keep the widget mounted for the rest of the page's life.
    pub fn keep_for_page(self) {
        std::mem::forget(self);
    }

    fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            drop(self.mouseleave.take());
            drop(mounted);
            let container = &self.notifier.container;
            container.set_inner_html("");
            container.set_class_name(&self.previous_class);
            self.owner.cleanup();
        }
    }
}

impl Drop for StarRatingWidget {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a widget into every `.star-rating[data-options]` container, reading
/// [`RatingOptions`] from the attribute's JSON.
pub fn mount_declared_ratings() {
    for element in query_all(".star-rating[data-options]") {
        let Ok(container) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let raw = container.get_attribute("data-options").unwrap_or_default();
        let options = serde_json::from_str::<RatingOptions>(&raw).unwrap_or_else(|err| {
            leptos::logging::warn!("invalid star rating options `{raw}`: {err}");
            RatingOptions::default()
        });
        StarRatingWidget::mount(container, &options, None).keep_for_page();
    }
}
