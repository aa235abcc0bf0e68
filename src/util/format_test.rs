use super::*;

// =============================================================
// format_date
// =============================================================

#[test]
fn formats_plain_iso_date() {
    assert_eq!(format_date("2024-03-15").expect("valid date"), "March 15, 2024");
}

#[test]
fn day_is_not_zero_padded() {
    assert_eq!(format_date("2025-01-05").expect("valid date"), "January 5, 2025");
}

#[test]
fn accepts_datetime_strings() {
    assert_eq!(format_date("2024-12-31T23:59:00").expect("valid date"), "December 31, 2024");
    assert_eq!(format_date("2024-07-04 10:00:00").expect("valid date"), "July 4, 2024");
}

#[test]
fn rejects_invalid_dates() {
    assert!(matches!(format_date("2024-02-30"), Err(FormatError::InvalidDate(_))));
    assert!(matches!(format_date("15/03/2024"), Err(FormatError::InvalidDate(_))));
    assert!(matches!(format_date("2024-03-155"), Err(FormatError::InvalidDate(_))));
    assert!(matches!(format_date(""), Err(FormatError::InvalidDate(_))));
}

// =============================================================
// format_time
// =============================================================

#[test]
fn formats_afternoon_time() {
    assert_eq!(format_time("14:30").expect("valid time"), "2:30 PM");
}

#[test]
fn midnight_and_noon_use_twelve() {
    assert_eq!(format_time("00:05").expect("valid time"), "12:05 AM");
    assert_eq!(format_time("12:00").expect("valid time"), "12:00 PM");
}

#[test]
fn accepts_single_digit_hour_and_seconds() {
    assert_eq!(format_time("9:07").expect("valid time"), "9:07 AM");
    assert_eq!(format_time("18:45:30").expect("valid time"), "6:45 PM");
}

#[test]
fn rejects_invalid_times() {
    for raw in ["24:00", "12:60", "noon", "12", "1:2:3:4", "-1:00", "12:5a"] {
        assert!(
            matches!(format_time(raw), Err(FormatError::InvalidTime(_))),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn error_message_names_input() {
    let err = format_time("noon").unwrap_err();
    assert_eq!(err.to_string(), "invalid time `noon`");
}
