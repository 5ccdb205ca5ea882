//! Recurrence descriptor translation.
//!
//! The admin API describes recurrence with a loosely typed descriptor
//! (frequency words, weekday names, optional ordinals). The remote provider
//! wants an RFC 5545 recurrence rule. [`RecurrencePattern::to_rrule`] maps
//! one to the other deterministically; the anchor start lives on the event
//! record itself and never appears in the emitted term.

use serde::{Deserialize, Serialize};

/// A weekday with an occurrence ordinal, e.g. "2nd Friday" or "last Friday"
/// (`n` = -1 counts from the end of the period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalWeekday {
    pub n: i32,
    pub weekday: String,
}

/// Platform-neutral recurrence descriptor as received from the admin API.
///
/// Every field is optional; an empty descriptor simply yields no rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    /// One of `daily`, `weekly`, `monthly`, `yearly` (case-insensitive).
    pub frequency: Option<String>,
    /// Gap between occurrences; 1 is the implicit default.
    pub interval: Option<u32>,
    /// Total number of occurrences.
    pub count: Option<u32>,
    /// Weekday names for plain weekly-style repetition.
    pub weekdays: Option<Vec<String>>,
    /// Ordinal weekday entries; take precedence over `weekdays` when present.
    pub ordinal_weekdays: Option<Vec<OrdinalWeekday>>,
    /// Month numbers (1-12).
    pub months: Option<Vec<u32>>,
    /// Days of the month; negative counts from the end.
    pub month_days: Option<Vec<i32>>,
}

impl RecurrencePattern {
    /// Translate the descriptor into a bare recurrence-rule term, e.g.
    /// `FREQ=MONTHLY;BYDAY=2FR`.
    ///
    /// Returns `None` when no frequency is given or the frequency is not
    /// recognized; an event without a usable rule is simply non-recurring,
    /// never an error. Entries that fail to map (unknown weekday names) are
    /// dropped individually, leaving the rest of the rule intact. Calling
    /// this twice on the same descriptor yields identical strings.
    pub fn to_rrule(&self) -> Option<String> {
        let freq = frequency_term(self.frequency.as_deref()?)?;

        let mut terms = vec![format!("FREQ={freq}")];

        if let Some(interval) = self.interval {
            if interval > 1 {
                terms.push(format!("INTERVAL={interval}"));
            }
        }

        if let Some(count) = self.count.filter(|&c| c > 0) {
            terms.push(format!("COUNT={count}"));
        }

        if let Some(byday) = self.ordinal_byday().or_else(|| self.plain_byday()) {
            terms.push(format!("BYDAY={byday}"));
        }

        if let Some(months) = self.months.as_deref().filter(|m| !m.is_empty()) {
            terms.push(format!("BYMONTH={}", join_numbers(months)));
        }

        if let Some(days) = self.month_days.as_deref().filter(|d| !d.is_empty()) {
            terms.push(format!("BYMONTHDAY={}", join_numbers(days)));
        }

        Some(terms.join(";"))
    }

    /// BYDAY value from ordinal entries. Positive ordinals are emitted
    /// unsigned (`2FR`, never `+2FR`); negative ordinals keep their sign.
    fn ordinal_byday(&self) -> Option<String> {
        let entries: Vec<String> = self
            .ordinal_weekdays
            .as_deref()?
            .iter()
            .filter_map(|ow| weekday_code(&ow.weekday).map(|code| format!("{}{}", ow.n, code)))
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(entries.join(","))
        }
    }

    /// BYDAY value from plain weekday names.
    fn plain_byday(&self) -> Option<String> {
        let codes: Vec<&str> = self
            .weekdays
            .as_deref()?
            .iter()
            .filter_map(|day| weekday_code(day))
            .collect();

        if codes.is_empty() {
            None
        } else {
            Some(codes.join(","))
        }
    }
}

fn frequency_term(frequency: &str) -> Option<&'static str> {
    match frequency.trim().to_ascii_lowercase().as_str() {
        "daily" => Some("DAILY"),
        "weekly" => Some("WEEKLY"),
        "monthly" => Some("MONTHLY"),
        "yearly" => Some("YEARLY"),
        _ => None,
    }
}

/// Map a weekday name (or two-letter code) to its RFC 5545 code.
fn weekday_code(weekday: &str) -> Option<&'static str> {
    match weekday.trim().to_ascii_lowercase().as_str() {
        "monday" | "mo" => Some("MO"),
        "tuesday" | "tu" => Some("TU"),
        "wednesday" | "we" => Some("WE"),
        "thursday" | "th" => Some("TH"),
        "friday" | "fr" => Some("FR"),
        "saturday" | "sa" => Some("SA"),
        "sunday" | "su" => Some("SU"),
        _ => None,
    }
}

fn join_numbers<N: std::fmt::Display>(numbers: &[N]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
