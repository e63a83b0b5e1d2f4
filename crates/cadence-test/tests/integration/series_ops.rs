//! Expanding, detaching and deleting occurrences of a series.

use cadence_test::component::display::{RepeatDisplay, describe_repeat};
use cadence_test::component::event::EventRecord;
use cadence_test::component::series::{
    convert_to_repeating, convert_to_single, delete_occurrence, detach_occurrence, expand_event,
    filter_recurring, group_by_type, is_recurring, series_id_for, series_members, update_repeat,
};
use cadence_test::component::types::RepeatType;
use cadence_test::fixtures::{date, dates_of, recurring_event, single_event};

fn weekly_series() -> Vec<EventRecord> {
    let base = recurring_event("1", "2025-01-06", RepeatType::Weekly, 1, "2025-02-03");
    expand_event(&base).expect("base should expand")
}

#[test_log::test]
fn edit_one_occurrence_of_a_weekly_series() {
    let series = weekly_series();
    assert_eq!(
        dates_of(&series),
        ["2025-01-06", "2025-01-13", "2025-01-20", "2025-01-27", "2025-02-03"]
    );

    let target = &series[2];
    let mut detached = detach_occurrence(target, target.date);
    detached.title = "수정된 회의".to_string();

    let mut edited = delete_occurrence(&series, &target.id);
    edited.push(detached.clone());

    assert_eq!(edited.len(), series.len());
    assert_eq!(filter_recurring(&edited).len(), 4);
    assert_eq!(series_members(&edited, series_id_for("1")).len(), 4);
    assert!(!is_recurring(&detached));
    assert!(detached.id.contains(&target.id));
    assert_eq!(describe_repeat(&detached), RepeatDisplay::standalone());
    assert_eq!(series[2].title, "반복 일정");
}

#[test_log::test]
fn delete_one_occurrence_keeps_the_rest() {
    let series = weekly_series();
    let remaining = delete_occurrence(&series, "1-3");

    assert_eq!(
        dates_of(&remaining),
        ["2025-01-06", "2025-01-13", "2025-01-27", "2025-02-03"]
    );
    assert!(remaining.iter().all(is_recurring));

    let unchanged = delete_occurrence(&remaining, "1-3");
    assert_eq!(unchanged, remaining);
}

#[test]
fn monthly_series_detach_on_a_31st() {
    let base = recurring_event("monthly-1", "2025-01-31", RepeatType::Monthly, 1, "2025-08-31");
    let series = expand_event(&base).expect("base should expand");
    assert_eq!(series.len(), 5);

    let detached = detach_occurrence(&series[1], date("2025-03-31"));
    assert_eq!(detached.id, "monthly-1-2-single-edit-2025-03-31");
    assert_eq!(detached.repeat.repeat_type, RepeatType::None);
    assert_eq!(detached.repeat.interval, 1);
    assert_eq!(detached.repeat.end_date, None);
}

#[test_log::test]
fn grouping_a_mixed_calendar() {
    let mut calendar = weekly_series();
    calendar.push(single_event("s-1", "2025-01-08"));
    calendar.extend(
        expand_event(&recurring_event("d", "2025-01-01", RepeatType::Daily, 1, "2025-01-03"))
            .expect("base should expand"),
    );
    calendar.push(recurring_event("y", "2025-03-01", RepeatType::Yearly, 1, "2030-03-01"));
    calendar.push(single_event("s-2", "2025-01-09"));

    let groups = group_by_type(&calendar);

    assert_eq!(groups.len(), calendar.len());
    assert_eq!(groups.get(RepeatType::Weekly).len(), 5);
    assert_eq!(groups.get(RepeatType::Daily).len(), 3);
    assert_eq!(groups.get(RepeatType::Yearly).len(), 1);
    assert!(groups.get(RepeatType::Monthly).is_empty());
    let singles: Vec<&str> = groups
        .get(RepeatType::None)
        .iter()
        .map(|record| record.id.as_str())
        .collect();
    assert_eq!(singles, ["s-1", "s-2"]);

    let mut regrouped: Vec<EventRecord> = groups
        .into_map()
        .into_values()
        .flatten()
        .collect();
    let mut original = calendar.clone();
    regrouped.sort_by(|a, b| a.id.cmp(&b.id));
    original.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(regrouped, original);
}

#[test]
fn converting_between_single_and_repeating() {
    let single = single_event("s-1", "2025-01-08");
    let repeating = convert_to_repeating(&single, RepeatType::Monthly, 2);
    assert_eq!(describe_repeat(&repeating).display_text, "2월마다");

    let bounded = update_repeat(
        &repeating,
        cadence_test::component::event::RepeatInfo::new(
            RepeatType::Monthly,
            2,
            Some(date("2025-05-08")),
        ),
    );
    assert_eq!(
        dates_of(&expand_event(&bounded).expect("bounded event should expand")),
        ["2025-01-08", "2025-03-08", "2025-05-08"]
    );

    assert_eq!(convert_to_single(&bounded).repeat, single.repeat);
}
