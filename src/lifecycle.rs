//! Status and validity-window rules.
//!
//! This module implements the lifecycle rules shared by definitions and
//! assignments: the two-state active/inactive toggle (re-exported from the
//! models as [`ComponentStatus::toggled`]) and the date-window predicates the
//! resolver uses. A record whose `end_date` has passed is treated as expired
//! for resolution purposes even while its status still reads active.

use chrono::NaiveDate;

use crate::models::ComponentStatus;

/// Checks whether an evaluation date falls inside an optional validity
/// window. Both bounds are inclusive; a `None` bound is open.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use component_engine::lifecycle::window_contains;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1);
/// let end = NaiveDate::from_ymd_opt(2024, 6, 30);
/// let inside = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let after = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
///
/// assert!(window_contains(start, end, inside));
/// assert!(!window_contains(start, end, after));
/// assert!(window_contains(None, None, after));
/// ```
pub fn window_contains(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    on: NaiveDate,
) -> bool {
    if let Some(start) = start {
        if on < start {
            return false;
        }
    }
    !is_expired(end, on)
}

/// Returns true when an optional end date lies strictly before the
/// evaluation date. An absent end date never expires.
pub fn is_expired(end: Option<NaiveDate>, on: NaiveDate) -> bool {
    matches!(end, Some(end) if end < on)
}

/// Returns true when a record should participate in resolution at the given
/// date: its status is active and its window contains the date.
///
/// This is the stale-status rule: an active record past its end date is
/// excluded, and an inactive record is excluded regardless of its window.
pub fn is_in_effect(
    status: ComponentStatus,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    on: NaiveDate,
) -> bool {
    status.is_active() && window_contains(start, end, on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_window_contains_is_inclusive_on_both_bounds() {
        let start = Some(date("2024-01-01"));
        let end = Some(date("2024-06-30"));
        assert!(window_contains(start, end, date("2024-01-01")));
        assert!(window_contains(start, end, date("2024-06-30")));
        assert!(!window_contains(start, end, date("2023-12-31")));
        assert!(!window_contains(start, end, date("2024-07-01")));
    }

    #[test]
    fn test_open_bounds() {
        assert!(window_contains(None, None, date("1999-01-01")));
        assert!(window_contains(None, Some(date("2024-06-30")), date("2024-06-30")));
        assert!(window_contains(Some(date("2024-01-01")), None, date("2099-01-01")));
    }

    #[test]
    fn test_is_expired() {
        assert!(is_expired(Some(date("2024-06-30")), date("2024-07-01")));
        assert!(!is_expired(Some(date("2024-06-30")), date("2024-06-30")));
        assert!(!is_expired(None, date("2099-01-01")));
    }

    #[test]
    fn test_inactive_record_never_in_effect() {
        assert!(!is_in_effect(
            ComponentStatus::Inactive,
            None,
            None,
            date("2024-03-01")
        ));
    }

    #[test]
    fn test_active_record_past_end_date_not_in_effect() {
        // Stale status: the record still reads active but its window is over.
        assert!(!is_in_effect(
            ComponentStatus::Active,
            Some(date("2024-01-01")),
            Some(date("2024-06-30")),
            date("2024-09-01")
        ));
    }

    #[test]
    fn test_active_record_in_window_is_in_effect() {
        assert!(is_in_effect(
            ComponentStatus::Active,
            Some(date("2024-01-01")),
            Some(date("2024-06-30")),
            date("2024-03-01")
        ));
    }
}
