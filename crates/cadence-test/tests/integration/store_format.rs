//! The JSON shapes exchanged with event storage.

use cadence_test::component::event::EventRecord;
use cadence_test::component::series::expand_event;
use cadence_test::component::types::RepeatType;
use cadence_test::component::{RuleInput, generate_strings};

const STORED_EVENTS: &str = r#"[
    {
        "id": "1",
        "title": "팀 회의",
        "date": "2025-01-06",
        "startTime": "09:00",
        "endTime": "10:00",
        "description": "주간 팀 회의",
        "location": "회의실 A",
        "category": "업무",
        "repeat": { "type": "weekly", "interval": 1, "endDate": "2025-01-27" },
        "notificationTime": 10
    },
    {
        "id": "2",
        "title": "점심 약속",
        "date": "2025-01-07",
        "startTime": "12:00",
        "endTime": "13:00",
        "description": "",
        "location": "",
        "category": "개인",
        "repeat": { "type": "none", "interval": 1 },
        "notificationTime": 1
    }
]"#;

#[test_log::test]
fn stored_events_round_trip() {
    let events: Vec<EventRecord> = serde_json::from_str(STORED_EVENTS).expect("valid store");
    assert_eq!(events[0].repeat.repeat_type, RepeatType::Weekly);
    assert_eq!(events[1].repeat.end_date, None);

    let value = serde_json::to_value(&events).expect("serialize");
    let expected: serde_json::Value = serde_json::from_str(STORED_EVENTS).expect("valid store");
    assert_eq!(value, expected);
}

#[test]
fn expanded_records_carry_a_series_id() {
    let events: Vec<EventRecord> = serde_json::from_str(STORED_EVENTS).expect("valid store");
    let series = expand_event(&events[0]).expect("weekly event should expand");

    let value = serde_json::to_value(&series).expect("serialize");
    let ids: Vec<&str> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|record| record["seriesId"].as_str().expect("series id"))
        .collect();
    assert_eq!(ids.len(), 4);
    assert!(ids.iter().all(|id| *id == ids[0]));
    assert!(uuid::Uuid::parse_str(ids[0]).is_ok());
}

#[test]
fn malformed_stored_date_is_rejected() {
    let text = STORED_EVENTS.replace("2025-01-06", "2025/01/06");
    assert!(serde_json::from_str::<Vec<EventRecord>>(&text).is_err());
}

#[test]
fn rule_input_from_json() {
    let input: RuleInput = serde_json::from_str(
        r#"{ "date": "2025-01-01", "repeatType": "weekly", "interval": 2, "endDate": "2025-02-26" }"#,
    )
    .expect("valid rule input");

    assert_eq!(
        generate_strings(&input).expect("valid rule"),
        ["2025-01-01", "2025-01-15", "2025-01-29", "2025-02-12", "2025-02-26"]
    );
}
