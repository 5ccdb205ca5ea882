//! Emitted recurrence rules must be valid input for a real RFC 5545
//! expander, anchored the way the remote provider anchors them (DTSTART
//! lives on the event, not in the rule).

use chrono::{Datelike, Weekday};
use rrule::RRuleSet;

use guildcal_sync::{OrdinalWeekday, RecurrencePattern};

fn pattern(frequency: &str) -> RecurrencePattern {
    RecurrencePattern {
        frequency: Some(frequency.to_string()),
        ..Default::default()
    }
}

fn expand(anchor: &str, rule: &str, limit: u16) -> Vec<chrono::DateTime<rrule::Tz>> {
    let set: RRuleSet = format!("DTSTART:{anchor}\nRRULE:{rule}")
        .parse()
        .unwrap_or_else(|e| panic!("rule {rule} did not parse: {e}"));
    set.all(limit).dates
}

#[test]
fn test_monthly_second_friday_lands_on_second_fridays() {
    let mut descriptor = pattern("monthly");
    descriptor.ordinal_weekdays = Some(vec![OrdinalWeekday {
        n: 2,
        weekday: "friday".to_string(),
    }]);

    let rule = descriptor.to_rrule().unwrap();
    assert_eq!(rule, "FREQ=MONTHLY;BYDAY=2FR");

    let dates = expand("20250110T170000Z", &rule, 6);
    assert_eq!(dates.len(), 6);
    for date in dates {
        assert_eq!(date.weekday(), Weekday::Fri);
        assert!((8..=14).contains(&date.day()));
    }
}

#[test]
fn test_monthly_last_friday_lands_in_the_final_week() {
    let mut descriptor = pattern("monthly");
    descriptor.ordinal_weekdays = Some(vec![OrdinalWeekday {
        n: -1,
        weekday: "friday".to_string(),
    }]);

    let rule = descriptor.to_rrule().unwrap();
    assert_eq!(rule, "FREQ=MONTHLY;BYDAY=-1FR");

    for date in expand("20250131T170000Z", &rule, 6) {
        assert_eq!(date.weekday(), Weekday::Fri);
        assert!(date.day() >= 22);
    }
}

#[test]
fn test_weekly_weekday_set_expands_to_those_weekdays() {
    let mut descriptor = pattern("weekly");
    descriptor.weekdays = Some(vec!["monday".to_string(), "wednesday".to_string()]);

    let rule = descriptor.to_rrule().unwrap();
    for date in expand("20250106T170000Z", &rule, 8) {
        assert!(matches!(date.weekday(), Weekday::Mon | Weekday::Wed));
    }
}

#[test]
fn test_daily_count_bounds_the_series() {
    let mut descriptor = pattern("daily");
    descriptor.count = Some(5);

    let rule = descriptor.to_rrule().unwrap();
    let dates = expand("20250106T170000Z", &rule, 20);
    assert_eq!(dates.len(), 5);
}

#[test]
fn test_yearly_month_and_month_day() {
    let mut descriptor = pattern("yearly");
    descriptor.months = Some(vec![6]);
    descriptor.month_days = Some(vec![1]);

    let rule = descriptor.to_rrule().unwrap();
    for date in expand("20250601T120000Z", &rule, 3) {
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 1);
    }
}

#[test]
fn test_weekly_interval_spaces_occurrences_two_weeks_apart() {
    let mut descriptor = pattern("weekly");
    descriptor.interval = Some(2);

    let rule = descriptor.to_rrule().unwrap();
    let dates = expand("20250106T170000Z", &rule, 4);
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 14);
    }
}
