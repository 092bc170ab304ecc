//! Activity card with availability and per-participant unregister controls.
//!
//! DESIGN
//! ======
//! The card is prop-driven and stateless; unregister clicks surface through
//! a typed callback carrying the activity name and email, so controls from
//! any render pass are always live.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::net::types::Activity;

/// Spots remaining; negative when the backend reports over-subscription.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn spots_left(activity: &Activity) -> i64 {
    i64::from(activity.max_participants) - activity.participants.len() as i64
}

/// One rendered activity with its participants list.
#[component]
pub fn ActivityCard(
    name: String,
    activity: Activity,
    on_unregister: Callback<(String, String)>,
) -> impl IntoView {
    let spots = spots_left(&activity);
    let participants = activity.participants.clone();
    let card_name = name.clone();

    let participant_rows = participants
        .into_iter()
        .map(|email| {
            let click_activity = card_name.clone();
            let click_email = email.clone();
            view! {
                <li>
                    <span class="participant-email">{email.clone()}</span>
                    <button
                        class="delete-btn"
                        data-activity=card_name.clone()
                        data-email=email
                        on:click=move |_| {
                            on_unregister.run((click_activity.clone(), click_email.clone()));
                        }
                    >
                        "\u{274c}"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{activity.description.clone()}</p>
            <p>
                <strong>"Schedule: "</strong>
                {activity.schedule.clone()}
            </p>
            <p>
                <strong>"Availability: "</strong>
                {format!("{spots} spots left")}
            </p>
            <div class="participants-container">
                {if participant_rows.is_empty() {
                    view! {
                        <p>
                            <em>"No participants yet"</em>
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="participants-section">
                            <h5>"Participants:"</h5>
                            <ul class="participants-list">{participant_rows}</ul>
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
