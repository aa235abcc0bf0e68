use super::*;

fn interactive(max_stars: u32, initial_rating: u32) -> RatingState {
    RatingState::new(&RatingOptions {
        max_stars,
        initial_rating,
        ..RatingOptions::default()
    })
}

fn readonly(initial_rating: u32) -> RatingState {
    RatingState::new(&RatingOptions {
        initial_rating,
        readonly: true,
        ..RatingOptions::default()
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn defaults_match_five_star_medium_widget() {
    let state = RatingState::default();
    assert_eq!(state.max_stars(), 5);
    assert_eq!(state.rating(), 0);
    assert!(!state.is_readonly());
    assert_eq!(state.size(), StarSize::Medium);
    assert_eq!(state.container_class(), "star-rating medium");
    assert_eq!(state.active_count(), 0);
}

#[test]
fn container_class_names_size_and_readonly() {
    let options = RatingOptions {
        size: StarSize::Large,
        readonly: true,
        ..RatingOptions::default()
    };
    assert_eq!(RatingState::new(&options).container_class(), "star-rating large readonly");
    let small = RatingOptions {
        size: StarSize::Small,
        ..RatingOptions::default()
    };
    assert_eq!(RatingState::new(&small).container_class(), "star-rating small");
}

#[test]
fn initial_rating_is_rendered_immediately() {
    let state = interactive(5, 3);
    assert_eq!(state.rating(), 3);
    assert_eq!(state.active_count(), 3);
    let lit: Vec<bool> = state.units().map(|unit| unit.active).collect();
    assert_eq!(lit, vec![true, true, true, false, false]);
}

#[test]
fn out_of_range_initial_rating_is_clamped() {
    let state = interactive(5, 9);
    assert_eq!(state.rating(), 5);
    assert_eq!(state.active_count(), 5);
}

#[test]
fn zero_max_stars_is_raised_to_one() {
    let state = interactive(0, 0);
    assert_eq!(state.max_stars(), 1);
    assert_eq!(state.units().count(), 1);
}

#[test]
fn units_carry_one_based_positions() {
    let state = interactive(4, 0);
    let positions: Vec<u32> = state.units().map(|unit| unit.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

// =============================================================
// set_rating
// =============================================================

#[test]
fn set_rating_lights_exactly_n_units_for_every_n() {
    for max_stars in 1..=10 {
        for n in 0..=max_stars {
            let mut state = interactive(max_stars, 0);
            let changed = state.set_rating(n);
            assert_eq!(changed, Some(RatingChanged { rating: n }));
            assert_eq!(state.rating(), n);
            assert_eq!(state.active_count(), n as usize);
        }
    }
}

#[test]
fn set_rating_above_max_is_clamped() {
    let mut state = interactive(5, 0);
    assert_eq!(state.set_rating(8), Some(RatingChanged { rating: 5 }));
    assert_eq!(state.rating(), 5);
}

#[test]
fn readonly_ignores_set_rating() {
    let mut state = readonly(2);
    for n in 0..=5 {
        assert_eq!(state.set_rating(n), None);
        assert_eq!(state.rating(), 2);
    }
    assert_eq!(state.active_count(), 2);
}

// =============================================================
// Hover preview
// =============================================================

#[test]
fn preview_changes_highlight_not_rating() {
    let mut state = interactive(5, 2);
    state.preview(4);
    assert_eq!(state.active_count(), 4);
    assert_eq!(state.rating(), 2);
}

#[test]
fn leave_restores_committed_rating() {
    let mut state = interactive(5, 2);
    state.preview(5);
    state.leave();
    assert_eq!(state.active_count(), 2);

    state.preview(1);
    state.set_rating(1);
    state.preview(3);
    state.leave();
    assert_eq!(state.active_count(), 1);
}

#[test]
fn readonly_ignores_preview_and_leave() {
    let mut state = readonly(3);
    state.preview(5);
    assert_eq!(state.active_count(), 3);
    state.leave();
    assert_eq!(state.active_count(), 3);
}

#[test]
fn highlight_is_presentation_only() {
    let mut state = readonly(1);
    state.highlight(4);
    assert_eq!(state.active_count(), 4);
    assert_eq!(state.rating(), 1);
    state.highlight(50);
    assert_eq!(state.highlighted(), 5);
}

// =============================================================
// Options
// =============================================================

#[test]
fn options_deserialize_from_camel_case_with_defaults() {
    let options: RatingOptions =
        serde_json::from_str(r#"{"maxStars": 10, "initialRating": 4, "size": "large"}"#).expect("valid options");
    assert_eq!(options.max_stars, 10);
    assert_eq!(options.initial_rating, 4);
    assert!(!options.readonly);
    assert_eq!(options.size, StarSize::Large);
    assert_eq!(options.input, None);
}

#[test]
fn empty_options_object_uses_defaults() {
    let options: RatingOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(options, RatingOptions::default());
}

#[test]
fn fractional_initial_rating_lights_the_partial_unit() {
    let options: RatingOptions =
        serde_json::from_str(r#"{"readonly": true, "initialRating": 4.3}"#).expect("lenient options");
    assert!(options.readonly);
    assert_eq!(options.initial_rating, 5);
    let state = RatingState::new(&options);
    assert_eq!(state.active_count(), 5);
}

#[test]
fn fractional_max_stars_rounds_down() {
    let options: RatingOptions = serde_json::from_str(r#"{"maxStars": 7.9}"#).expect("lenient options");
    assert_eq!(options.max_stars, 7);
}

#[test]
fn null_members_take_their_defaults() {
    let options: RatingOptions = serde_json::from_str(
        r#"{"maxStars": null, "initialRating": null, "readonly": null, "size": null, "input": null}"#,
    )
    .expect("lenient options");
    assert_eq!(options, RatingOptions::default());
}

#[test]
fn negative_and_mistyped_members_take_their_defaults() {
    let options: RatingOptions = serde_json::from_str(
        r#"{"maxStars": -2, "initialRating": -1, "size": "huge", "input": 12}"#,
    )
    .expect("lenient options");
    assert_eq!(options.max_stars, DEFAULT_MAX_STARS);
    assert_eq!(options.initial_rating, 0);
    assert_eq!(options.size, StarSize::Medium);
    assert_eq!(options.input, None);
}

#[test]
fn numeric_strings_and_truthy_flags_are_accepted() {
    let options: RatingOptions =
        serde_json::from_str(r#"{"maxStars": "10", "readonly": 1, "size": "Small", "input": "rating"}"#)
            .expect("lenient options");
    assert_eq!(options.max_stars, 10);
    assert!(options.readonly);
    assert_eq!(options.size, StarSize::Small);
    assert_eq!(options.input.as_deref(), Some("rating"));
}

#[test]
fn rating_changed_serializes_as_event_detail() {
    let detail = serde_json::to_value(RatingChanged { rating: 4 }).expect("serializable");
    assert_eq!(detail, serde_json::json!({ "rating": 4 }));
}
