use super::*;

// =============================================================
// AlertKind
// =============================================================

#[test]
fn parse_accepts_flash_categories() {
    assert_eq!(AlertKind::parse("success"), Some(AlertKind::Success));
    assert_eq!(AlertKind::parse("error"), Some(AlertKind::Error));
    assert_eq!(AlertKind::parse(" Warning "), Some(AlertKind::Warning));
    assert_eq!(AlertKind::parse("info"), Some(AlertKind::Info));
}

#[test]
fn parse_maps_aliases_and_rejects_unknown() {
    assert_eq!(AlertKind::parse("danger"), Some(AlertKind::Error));
    assert_eq!(AlertKind::parse("message"), Some(AlertKind::Info));
    assert_eq!(AlertKind::parse("sparkle"), None);
}

#[test]
fn class_list_matches_stylesheet_names() {
    assert_eq!(AlertKind::Success.class_list(), "alert alert-success");
    assert_eq!(AlertKind::Error.class_list(), "alert alert-error");
}

// =============================================================
// AlertLifecycle
// =============================================================

#[test]
fn lifecycle_runs_visible_leaving_removed() {
    let mut alert = AlertLifecycle::new();
    assert_eq!(alert.phase(), AlertPhase::Visible);
    assert!(alert.dismiss());
    assert_eq!(alert.phase(), AlertPhase::Leaving);
    assert!(alert.finish());
    assert_eq!(alert.phase(), AlertPhase::Removed);
}

#[test]
fn second_dismiss_is_ignored() {
    let mut alert = AlertLifecycle::new();
    assert!(alert.dismiss());
    assert!(!alert.dismiss(), "close click racing the auto-dismiss timer");
}

#[test]
fn finish_requires_leaving() {
    let mut alert = AlertLifecycle::new();
    assert!(!alert.finish());
    alert.dismiss();
    alert.finish();
    assert!(!alert.finish());
}

#[test]
fn detached_alert_ignores_timers() {
    let mut alert = AlertLifecycle::new();
    alert.detach();
    assert!(!alert.dismiss());
    assert!(!alert.finish());
}

#[test]
fn timings_match_page_behaviour() {
    assert_eq!(AUTO_DISMISS_MS, 5_000);
    assert_eq!(FADE_OUT_MS, 300);
}
