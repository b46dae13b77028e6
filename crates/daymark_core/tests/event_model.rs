use daymark_core::{CalendarDate, Event, EventTime, EventValidationError};
use uuid::Uuid;

#[test]
fn event_new_trims_text_and_assigns_id() {
    let date = CalendarDate::new(2025, 8, 25).unwrap();
    let event = Event::new(date, EventTime::new(9, 0).unwrap(), "  Demo  ").unwrap();

    assert!(!event.id.is_nil());
    assert_eq!(event.text, "Demo");
    assert_eq!(event.time.to_string(), "09:00");
}

#[test]
fn event_new_rejects_blank_text() {
    let date = CalendarDate::new(2025, 8, 25).unwrap();
    let err = Event::new(date, EventTime::default(), "   ").unwrap_err();
    assert_eq!(err, EventValidationError::EmptyText);
}

#[test]
fn event_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let date = CalendarDate::new(2025, 8, 23).unwrap();
    let event = Event::with_id(id, date, EventTime::new(10, 30).unwrap(), "Earlier").unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["date"]["year"], 2025);
    assert_eq!(json["date"]["month"], 8);
    assert_eq!(json["date"]["day"], 23);
    assert_eq!(json["time"]["hour"], 10);
    assert_eq!(json["time"]["minute"], 30);
    assert_eq!(json["text"], "Earlier");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_impossible_date() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "date": { "year": 2023, "month": 1, "day": 29 },
        "time": { "hour": 9, "minute": 0 },
        "text": "leap day that is not"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("day 29 does not exist"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_out_of_range_time_and_blank_text() {
    let bad_time = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "date": { "year": 2025, "month": 8, "day": 23 },
        "time": { "hour": 24, "minute": 0 },
        "text": "late"
    });
    assert!(serde_json::from_value::<Event>(bad_time).is_err());

    let blank = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "date": { "year": 2025, "month": 8, "day": 23 },
        "time": { "hour": 9, "minute": 0 },
        "text": "   "
    });
    let err = serde_json::from_value::<Event>(blank).unwrap_err();
    assert!(err.to_string().contains("blank"), "unexpected error: {err}");
}
