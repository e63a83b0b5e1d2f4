//! Rule input in, dates out.

use cadence_test::component::types::{Frequency, RepeatType};
use cadence_test::component::{
    CalendarDate, RecurError, RecurrenceRule, RuleInput, ShortMonth, generate, generate_strings,
};
use cadence_test::fixtures::date;
use chrono::Days;

fn dates(anchor: &str, repeat_type: RepeatType, interval: u32, end: &str) -> Vec<String> {
    generate_strings(&RuleInput::new(anchor, repeat_type, interval, end))
        .expect("rule should be valid")
}

/// ## Summary
/// Every valid rule yields strictly increasing dates inside `[anchor, end]`,
/// starting at the anchor.
#[test_log::test]
fn output_is_ordered_and_bounded() {
    let anchors = ["2024-01-31", "2024-02-29", "2025-03-15", "2025-12-31"];
    for anchor in anchors.map(date) {
        let end = CalendarDate::from(
            anchor
                .as_naive()
                .checked_add_days(Days::new(800))
                .expect("end date in range"),
        );
        for frequency in Frequency::ALL {
            for interval in 1..=3 {
                let rule = RecurrenceRule::new(anchor, frequency, interval, end)
                    .expect("rule should be valid");
                let out = rule.expand();

                assert_eq!(out.first(), Some(&anchor), "{frequency} x{interval} from {anchor}");
                assert!(out.windows(2).all(|w| w[0] < w[1]));
                assert!(out.iter().all(|d| anchor <= *d && *d <= end));
            }
        }
    }
}

#[test_log::test]
fn fixed_steps_for_daily_and_weekly() {
    let anchor = date("2025-01-01");
    let end = date("2025-12-31");
    for (frequency, unit) in [(Frequency::Daily, 1), (Frequency::Weekly, 7)] {
        for interval in [1, 2, 5] {
            let rule = RecurrenceRule::new(anchor, frequency, interval, end)
                .expect("rule should be valid");
            let step = i64::from(interval) * unit;
            let out = rule.expand();
            assert!(
                out.windows(2)
                    .all(|w| (w[1].as_naive() - w[0].as_naive()).num_days() == step)
            );
        }
    }
}

#[test]
fn anchor_after_end_is_empty_for_every_type() {
    for repeat_type in RepeatType::ALL.into_iter().filter(|t| t.is_recurring()) {
        assert!(dates("2025-02-01", repeat_type, 1, "2025-01-31").is_empty());
    }
}

#[test]
fn anchor_equal_to_end_yields_one_date() {
    for repeat_type in RepeatType::ALL.into_iter().filter(|t| t.is_recurring()) {
        assert_eq!(dates("2025-05-05", repeat_type, 3, "2025-05-05"), ["2025-05-05"]);
    }
}

#[test_log::test]
fn monthly_day_31_skips_short_months() {
    assert_eq!(
        dates("2025-01-31", RepeatType::Monthly, 1, "2025-08-31"),
        ["2025-01-31", "2025-03-31", "2025-05-31", "2025-07-31", "2025-08-31"]
    );
}

#[test]
fn monthly_end_before_next_31st_is_not_extrapolated() {
    assert_eq!(
        dates("2025-01-31", RepeatType::Monthly, 1, "2025-10-30"),
        ["2025-01-31", "2025-03-31", "2025-05-31", "2025-07-31", "2025-08-31"]
    );
}

#[test]
fn monthly_day_30_clamps_without_drifting() {
    assert_eq!(
        dates("2025-01-30", RepeatType::Monthly, 1, "2025-06-30"),
        [
            "2025-01-30",
            "2025-02-28",
            "2025-03-30",
            "2025-04-30",
            "2025-05-30",
            "2025-06-30"
        ]
    );
}

#[test]
fn monthly_interval_carries_into_next_year() {
    assert_eq!(
        dates("2025-11-15", RepeatType::Monthly, 5, "2027-01-01"),
        ["2025-11-15", "2026-04-15", "2026-09-15"]
    );
}

#[test]
fn yearly_leap_day_only_in_leap_years() {
    assert_eq!(
        dates("2024-02-29", RepeatType::Yearly, 1, "2028-02-29"),
        ["2024-02-29", "2028-02-29"]
    );
}

#[test]
fn yearly_leap_day_clamped_on_request() {
    let rule = RuleInput::new("2024-02-29", RepeatType::Yearly, 1, "2026-12-31")
        .to_rule()
        .expect("rule should be valid")
        .with_short_month(ShortMonth::Clamp);
    let out: Vec<String> = rule.occurrences().map(String::from).collect();
    assert_eq!(out, ["2024-02-29", "2025-02-28", "2026-02-28"]);
}

#[test]
fn weekly_every_other_week() {
    assert_eq!(
        dates("2025-01-01", RepeatType::Weekly, 2, "2025-02-26"),
        ["2025-01-01", "2025-01-15", "2025-01-29", "2025-02-12", "2025-02-26"]
    );
}

#[test]
fn daily_across_a_leap_february() {
    assert_eq!(
        dates("2024-02-27", RepeatType::Daily, 1, "2024-03-01"),
        ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]
    );
}

#[test]
fn malformed_dates_are_rejected() {
    for (anchor, end) in [
        ("invalid-date", "2025-01-05"),
        ("2025-01-01", "2025-02-30"),
        ("2025-1-01", "2025-01-05"),
        ("2025-01-01", ""),
    ] {
        let result = generate(&RuleInput::new(anchor, RepeatType::Daily, 1, end));
        assert!(
            matches!(result, Err(RecurError::InvalidDateFormat(_))),
            "{anchor}..{end} should be rejected"
        );
    }
}

#[test]
fn standalone_and_zero_interval_rules_are_rejected() {
    assert_eq!(
        generate(&RuleInput::new("2025-01-01", RepeatType::None, 1, "2025-01-05")),
        Err(RecurError::NotRecurring)
    );
    assert_eq!(
        generate(&RuleInput::new("2025-01-01", RepeatType::Daily, 0, "2025-01-05")),
        Err(RecurError::InvalidInterval(0))
    );
}
