use super::*;

use crate::state::rating::RatingOptions;

fn with_state<R>(options: &RatingOptions, run: impl FnOnce(RwSignal<RatingState>) -> R) -> R {
    let owner = Owner::new();
    owner.with(|| run(RwSignal::new(RatingState::new(options))))
}

#[test]
fn commit_rating_updates_signal_and_reports_value() {
    with_state(&RatingOptions::default(), |state| {
        assert_eq!(commit_rating(state, 4), Some(RatingChanged { rating: 4 }));
        assert_eq!(state.with_untracked(RatingState::rating), 4);
        assert_eq!(state.with_untracked(RatingState::active_count), 4);
    });
}

#[test]
fn commit_rating_is_ignored_when_readonly() {
    let options = RatingOptions {
        initial_rating: 2,
        readonly: true,
        ..RatingOptions::default()
    };
    with_state(&options, |state| {
        assert_eq!(commit_rating(state, 5), None);
        assert_eq!(state.with_untracked(RatingState::rating), 2);
    });
}

#[test]
fn preview_then_leave_restores_committed_rating() {
    with_state(&RatingOptions::default(), |state| {
        commit_rating(state, 2);
        preview_rating(state, 5);
        assert_eq!(state.with_untracked(RatingState::highlighted), 5);
        state.update(RatingState::leave);
        assert_eq!(state.with_untracked(RatingState::active_count), 2);
    });
}
