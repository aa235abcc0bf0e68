//! Mobile navigation toggle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use super::{EventListener, document, query_all_in, set_style};
use crate::state::ui::UiState;

const ACTIVE_CLASS: &str = "active";

/// Wire `.nav-toggle` to open and close `.nav-menu`.
pub fn initialize_navigation() {
    let Some(doc) = document() else {
        return;
    };
    let (Ok(Some(toggle)), Ok(Some(menu))) = (doc.query_selector(".nav-toggle"), doc.query_selector(".nav-menu"))
    else {
        return;
    };
    let ui = Rc::new(RefCell::new(UiState::default()));

    {
        let ui = Rc::clone(&ui);
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        EventListener::attach_forever(&toggle, "click", move |_| {
            let open = ui.borrow_mut().toggle_nav();
            render(&toggle_el, &menu_el, &ui.borrow(), open);
        });
    }

    for link in query_all_in(&menu, ".nav-link") {
        let ui = Rc::clone(&ui);
        let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
        EventListener::attach_forever(&link, "click", move |_| close(&ui, &toggle_el, &menu_el));
    }

    let (toggle_el, menu_el) = (toggle.clone(), menu.clone());
    EventListener::attach_forever(&doc, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = |el: &web_sys::Element| target.as_ref().is_some_and(|node| el.contains(Some(node)));
        if !inside(&toggle_el) && !inside(&menu_el) {
            close(&ui, &toggle_el, &menu_el);
        }
    });
}

fn close(ui: &RefCell<UiState>, toggle: &web_sys::Element, menu: &web_sys::Element) {
    if !ui.borrow().nav_open {
        return;
    }
    ui.borrow_mut().close_nav();
    render(toggle, menu, &ui.borrow(), false);
}

fn render(toggle: &web_sys::Element, menu: &web_sys::Element, ui: &UiState, open: bool) {
    let class_list = menu.class_list();
    let result = if open {
        class_list.add_1(ACTIVE_CLASS)
    } else {
        class_list.remove_1(ACTIVE_CLASS)
    };
    if result.is_err() {
        leptos::logging::warn!("could not update nav menu class");
    }
    for (index, bar) in query_all_in(toggle, ".bar").iter().enumerate() {
        let style = ui.bar_style(index);
        set_style(bar, "transform", &style.transform);
        set_style(bar, "opacity", style.opacity);
    }
}
