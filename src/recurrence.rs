//! Recurrence expansion: one authored event becomes its dated occurrences.
//!
//! Every occurrence is a full copy of the template with id `<baseId>_<n>`
//! and its own date. Only occurrence 0 keeps the repeat rule; later
//! occurrences carry none, which marks them as already expanded.

use jiff::{Span, civil::Date};
use log::{debug, warn};

use crate::model::{CalendarEvent, Frequency, RepeatRule};

/// Upper bound when the rule sets neither `count` nor `endDate`
/// (two years of a weekly cadence).
const OPEN_ENDED_CAP: usize = 104;

/// Upper bound when only `endDate` limits the series.
const END_DATE_CAP: usize = 1000;

/// Expand an event into its occurrences, in increasing date order.
///
/// Events without a repeat rule, or with `never`, come back as a single
/// unchanged element. So do events whose `date` or `endDate` does not
/// parse: expansion never fails.
pub fn expand_recurrence(event: &CalendarEvent) -> Vec<CalendarEvent> {
    let Some(rule) = event.repeat.as_ref() else {
        return vec![event.clone()];
    };
    if rule.frequency == Frequency::Never {
        return vec![event.clone()];
    }

    let Ok(start) = event.date.parse::<Date>() else {
        warn!("event {} has unparseable date '{}'", event.id, event.date);
        return vec![event.clone()];
    };
    let end = match rule.end_date.as_deref().filter(|s| !s.trim().is_empty()) {
        None => None,
        Some(s) => match s.parse::<Date>() {
            Ok(d) => Some(d),
            Err(_) => {
                warn!("event {} has unparseable repeat end date '{s}'", event.id);
                return vec![event.clone()];
            }
        },
    };

    let cap = occurrence_cap(rule, end.is_some());
    let mut occurrences = Vec::new();
    for n in 0..cap {
        let Some(date) = nth_occurrence(start, rule, n) else {
            break;
        };
        if end.is_some_and(|end| date > end) {
            break;
        }
        occurrences.push(CalendarEvent {
            id: format!("{}_{n}", event.id),
            date: date.to_string(),
            repeat: if n == 0 { event.repeat.clone() } else { None },
            ..event.clone()
        });
    }

    debug!(
        "expanded event {} into {} occurrence(s)",
        event.id,
        occurrences.len()
    );
    occurrences
}

/// How many occurrences to emit at most.
fn occurrence_cap(rule: &RepeatRule, has_end: bool) -> usize {
    match rule.count {
        Some(count) if count > 0 => usize::try_from(count).unwrap_or(usize::MAX),
        _ if has_end => END_DATE_CAP,
        _ => OPEN_ENDED_CAP,
    }
}

/// Date of occurrence `n`, measured from the start so month ends don't drift.
///
/// `None` once the date leaves the supported range.
fn nth_occurrence(start: Date, rule: &RepeatRule, n: usize) -> Option<Date> {
    let steps = i64::try_from(n)
        .ok()?
        .checked_mul(i64::from(rule.interval.max(1)))?;
    let span = match rule.frequency {
        Frequency::Never => return (n == 0).then_some(start),
        Frequency::Daily | Frequency::Custom => Span::new().try_days(steps),
        Frequency::Weekly => Span::new().try_weeks(steps),
        Frequency::Monthly => Span::new().try_months(steps),
        Frequency::Yearly => Span::new().try_years(steps),
    }
    .ok()?;
    start.checked_add(span).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::model::EventType;

    fn event(date: &str, repeat: Option<RepeatRule>) -> CalendarEvent {
        CalendarEvent {
            id: "evt".into(),
            title: "Standup".into(),
            kind: EventType::Meeting,
            date: date.into(),
            time: Some("9:00 AM".into()),
            repeat,
        }
    }

    fn rule(frequency: Frequency, interval: u32) -> RepeatRule {
        RepeatRule {
            frequency,
            interval,
            end_date: None,
            count: None,
        }
    }

    #[test]
    fn no_rule_returns_input() {
        let base = event("2025-01-01", None);
        assert_eq!(expand_recurrence(&base), vec![base]);
    }

    #[test]
    fn never_returns_input() {
        let base = event("2025-01-01", Some(rule(Frequency::Never, 1)));
        assert_eq!(expand_recurrence(&base), vec![base]);
    }

    #[test]
    fn open_ended_weekly_caps_at_104() {
        let base = event("2025-01-01", Some(rule(Frequency::Weekly, 1)));
        let out = expand_recurrence(&base);

        assert_eq!(out.len(), 104);
        for pair in out.windows(2) {
            let a: Date = pair[0].date.parse().unwrap();
            let b: Date = pair[1].date.parse().unwrap();
            assert_eq!(a.until(b).unwrap().get_days(), 7);
        }
        assert!(out[0].repeat.is_some());
        assert!(out[1..].iter().all(|e| e.repeat.is_none()));
        assert_eq!(out[0].id, "evt_0");
        assert_eq!(out[103].id, "evt_103");
    }

    #[test]
    fn count_wins_over_end_date() {
        let mut r = rule(Frequency::Daily, 1);
        r.count = Some(5);
        r.end_date = Some("2025-12-31".into());
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out.len(), 5);
        assert_eq!(out[4].date, "2025-01-05");
    }

    #[test]
    fn count_stops_early_at_end_date() {
        let mut r = rule(Frequency::Daily, 1);
        r.count = Some(10);
        r.end_date = Some("2025-01-03".into());
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out.len(), 3);
    }

    #[test]
    fn end_date_is_inclusive() {
        let mut r = rule(Frequency::Weekly, 2);
        r.end_date = Some("2025-01-29".into());
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        let dates: Vec<&str> = out.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2025-01-01", "2025-01-15", "2025-01-29"]);
    }

    #[test]
    fn end_date_alone_caps_at_1000() {
        let mut r = rule(Frequency::Daily, 1);
        r.end_date = Some("2030-01-01".into());
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out.len(), 1000);
    }

    #[test]
    fn end_date_before_start_emits_nothing() {
        let mut r = rule(Frequency::Daily, 1);
        r.end_date = Some("2024-12-31".into());
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert!(out.is_empty());
    }

    #[test]
    fn monthly_clamps_without_drift() {
        let mut r = rule(Frequency::Monthly, 1);
        r.count = Some(4);
        let out = expand_recurrence(&event("2025-01-31", Some(r)));

        let dates: Vec<&str> = out.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30"]);
    }

    #[test]
    fn yearly_and_custom_intervals() {
        let mut r = rule(Frequency::Yearly, 2);
        r.count = Some(3);
        let out = expand_recurrence(&event("2024-02-29", Some(r)));
        let dates: Vec<&str> = out.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-02-29", "2026-02-28", "2028-02-29"]);

        let mut r = rule(Frequency::Custom, 3);
        r.count = Some(3);
        let out = expand_recurrence(&event("2025-01-01", Some(r)));
        let dates: Vec<&str> = out.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2025-01-01", "2025-01-04", "2025-01-07"]);
    }

    #[test]
    fn zero_interval_acts_as_one() {
        let mut r = rule(Frequency::Daily, 0);
        r.count = Some(2);
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out[1].date, "2025-01-02");
    }

    #[test]
    fn malformed_dates_fail_soft() {
        let base = event("not-a-date", Some(rule(Frequency::Daily, 1)));
        assert_eq!(expand_recurrence(&base), vec![base]);

        let mut r = rule(Frequency::Daily, 1);
        r.end_date = Some("someday".into());
        let base = event("2025-01-01", Some(r));
        assert_eq!(expand_recurrence(&base), vec![base]);
    }

    #[test]
    fn stops_at_calendar_limit() {
        let mut r = rule(Frequency::Yearly, 1);
        r.count = Some(10);
        let out = expand_recurrence(&event("9997-06-01", Some(r)));

        assert_eq!(out.len(), 3);
        assert_eq!(out[2].date, "9999-06-01");
    }

    #[test]
    fn daily_series_stops_past_span_range() {
        let mut r = rule(Frequency::Daily, u32::MAX);
        r.count = Some(3);
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, "2025-01-01");
    }

    #[test]
    fn copies_every_other_field() {
        let mut r = rule(Frequency::Daily, 1);
        r.count = Some(2);
        let out = expand_recurrence(&event("2025-01-01", Some(r)));

        assert_eq!(out[1].title, "Standup");
        assert_eq!(out[1].kind, EventType::Meeting);
        assert_eq!(out[1].time.as_deref(), Some("9:00 AM"));
    }
}
