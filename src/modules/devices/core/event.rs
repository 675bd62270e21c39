use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// An occurrence reported for a device.
///
/// `device_id` is a soft reference: events for ids that were never
/// registered are accepted and stored. `event_data` is an open mapping that
/// is round-tripped as-is and never interpreted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEvent {
    pub event_id: i64,
    pub device_id: i64,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub event_data: Map<String, Json>,
}
