use super::*;

fn chess_club_json() -> &'static str {
    r#"{
        "Chess Club": {
            "description": "D",
            "schedule": "Mon 3pm",
            "max_participants": 10,
            "participants": ["a@x.com"],
            "category": "Games",
            "time": "15:00"
        }
    }"#
}

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_parses_all_fields() {
    let catalog: Catalog = serde_json::from_str(chess_club_json()).unwrap();
    let (name, activity) = &catalog.0[0];
    assert_eq!(name, "Chess Club");
    assert_eq!(activity.description, "D");
    assert_eq!(activity.schedule, "Mon 3pm");
    assert_eq!(activity.category.as_deref(), Some("Games"));
    assert_eq!(activity.max_participants, 10);
    assert_eq!(activity.participants, vec!["a@x.com".to_owned()]);
    assert_eq!(activity.time.as_deref(), Some("15:00"));
}

#[test]
fn activity_optional_fields_default() {
    let json = r#"{"description": "D", "schedule": "S", "max_participants": 5}"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert!(activity.category.is_none());
    assert!(activity.participants.is_empty());
    assert!(activity.time.is_none());
}

#[test]
fn max_participants_accepts_integer_valued_float() {
    let json = r#"{"description": "D", "schedule": "S", "max_participants": 12.0}"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(activity.max_participants, 12);
}

#[test]
fn max_participants_rejects_fractional_float() {
    let json = r#"{"description": "D", "schedule": "S", "max_participants": 12.5}"#;
    assert!(serde_json::from_str::<Activity>(json).is_err());
}

#[test]
fn max_participants_rejects_non_number() {
    let json = r#"{"description": "D", "schedule": "S", "max_participants": "12"}"#;
    assert!(serde_json::from_str::<Activity>(json).is_err());
}

// =============================================================
// Catalog ordering
// =============================================================

#[test]
fn catalog_preserves_key_order() {
    let json = r#"{
        "Zebra Watching": {"description": "Z", "schedule": "S", "max_participants": 1},
        "Art Class": {"description": "A", "schedule": "S", "max_participants": 1},
        "Math Club": {"description": "M", "schedule": "S", "max_participants": 1}
    }"#;
    let catalog: Catalog = serde_json::from_str(json).unwrap();
    let names: Vec<&str> = catalog.0.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Zebra Watching", "Art Class", "Math Club"]);
}

#[test]
fn catalog_empty_object_is_empty() {
    let catalog: Catalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.0.is_empty());
}

#[test]
fn catalog_rejects_non_object() {
    assert!(serde_json::from_str::<Catalog>("[]").is_err());
}

// =============================================================
// Action reply bodies
// =============================================================

#[test]
fn action_reply_parses_message() {
    let reply: ActionReply = serde_json::from_str(r#"{"message": "Signed up"}"#).unwrap();
    assert_eq!(reply.message, "Signed up");
}

#[test]
fn action_rejection_parses_detail() {
    let rejection: ActionRejection = serde_json::from_str(r#"{"detail": "Not registered"}"#).unwrap();
    assert_eq!(rejection.detail.as_deref(), Some("Not registered"));
}

#[test]
fn action_rejection_detail_defaults_to_none() {
    let rejection: ActionRejection = serde_json::from_str("{}").unwrap();
    assert!(rejection.detail.is_none());
}
