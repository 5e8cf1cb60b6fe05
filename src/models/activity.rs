use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::ActivityKind;

/// One recent-activity entry shown on the dashboard. The log keeps at
/// most the three newest entries, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityItem {
    pub fn new(kind: ActivityKind, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            kind,
            title: title.into(),
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type_field() {
        let item = ActivityItem::new(ActivityKind::Scan, "Paracetamol 500");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"scan\""));
    }

    #[test]
    fn round_trips_with_timestamp() {
        let item = ActivityItem::new(ActivityKind::Chat, "I have a headache...");
        let json = serde_json::to_string(&item).unwrap();
        let back: ActivityItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
