use super::*;

fn activity(max_participants: i32, participants: &[&str]) -> Activity {
    Activity {
        description: "D".to_owned(),
        schedule: "Mon 3pm".to_owned(),
        category: None,
        max_participants,
        participants: participants.iter().map(|email| (*email).to_owned()).collect(),
        time: None,
    }
}

#[test]
fn spots_left_subtracts_participant_count() {
    assert_eq!(spots_left(&activity(10, &["a@x.com"])), 9);
}

#[test]
fn spots_left_of_empty_activity_is_capacity() {
    assert_eq!(spots_left(&activity(12, &[])), 12);
}

#[test]
fn spots_left_goes_negative_when_over_subscribed() {
    assert_eq!(spots_left(&activity(1, &["a@x.com", "b@x.com", "c@x.com"])), -2);
}

#[test]
fn spots_left_is_zero_when_full() {
    assert_eq!(spots_left(&activity(2, &["a@x.com", "b@x.com"])), 0);
}
