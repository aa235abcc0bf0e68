//! Interactive star rating component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a `RatingState` signal as a row of star spans. Hover previews,
//! leaving the widget restores the committed rating, and a click commits and
//! reports the new value through `on_change`.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

use crate::state::rating::{RatingChanged, RatingState, STAR_GLYPH};

/// Star rating row bound to `state`, wrapped in its own container.
#[component]
pub fn StarRating<F>(state: RwSignal<RatingState>, on_change: F) -> impl IntoView
where
    F: Fn(RatingChanged) + Clone + 'static,
{
    let container_class = move || state.with(RatingState::container_class);

    view! {
        <div
            class=container_class
            role="radiogroup"
            aria-label="Rating"
            on:mouseleave=move |_| state.update(RatingState::leave)
        >
            <StarUnits state=state on_change=on_change />
        </div>
    }
}

/// The star spans alone, for mounting into a container the page already
/// styles as `.star-rating`. The container must call [`RatingState::leave`]
/// when the pointer leaves it.
#[component]
pub fn StarUnits<F>(state: RwSignal<RatingState>, on_change: F) -> impl IntoView
where
    F: Fn(RatingChanged) + Clone + 'static,
{
    let max_stars = state.with_untracked(RatingState::max_stars);

    (1..=max_stars)
        .map(|position| {
            let on_change = on_change.clone();
            view! {
                <span
                    class="star"
                    class:active=move || state.with(|s| s.is_active(position - 1))
                    data-rating=position.to_string()
                    on:mouseover=move |_| preview_rating(state, position)
                    on:click=move |_| {
                        if let Some(changed) = commit_rating(state, position) {
                            on_change(changed);
                        }
                    }
                >
                    {STAR_GLYPH}
                </span>
            }
        })
        .collect_view()
}

fn preview_rating(state: RwSignal<RatingState>, position: u32) {
    if state.with_untracked(RatingState::is_readonly) {
        return;
    }
    state.update(|s| s.preview(position));
}

/// Commit `position` and return the notification, if the state accepted it.
pub fn commit_rating(state: RwSignal<RatingState>, position: u32) -> Option<RatingChanged> {
    state.try_update(|s| s.set_rating(position)).flatten()
}
