//! Wire-schema DTOs for the activities backend.
//!
//! DESIGN
//! ======
//! The catalog arrives as one JSON object keyed by activity name, and key
//! order is meaningful to the UI (cards keep backend order until a sort is
//! chosen). Deserialization therefore goes through a map visitor that
//! preserves encounter order instead of a sorted map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single activity as served by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description shown on the card.
    pub description: String,
    /// Human-readable schedule line (e.g. `"Mon 3pm"`).
    pub schedule: String,
    /// Optional grouping used by the category filter.
    #[serde(default)]
    pub category: Option<String>,
    /// Capacity; spots left may go negative when over-subscribed.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub max_participants: i32,
    /// Registered emails in sign-up order. Uniqueness is the backend's
    /// concern, not the client's.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Optional lexically sortable time (e.g. `"15:00"`).
    #[serde(default)]
    pub time: Option<String>,
}

/// The full catalog in backend iteration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog(pub Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a map of activity name to activity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(Catalog(entries))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Success reply body for signup and unregister calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionReply {
    /// Confirmation text shown as the success notice.
    pub message: String,
}

/// Error reply body for signup and unregister calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRejection {
    /// Backend-provided reason, when present.
    #[serde(default)]
    pub detail: Option<String>,
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_i64() {
        return i32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for i32")));
    }
    #[allow(clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= f64::from(i32::MIN)
        && float <= f64::from(i32::MAX)
    {
        return Ok(float as i32);
    }
    Err(D::Error::custom("expected integer-compatible number"))
}
