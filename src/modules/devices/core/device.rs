use serde::{Deserialize, Serialize};

/// A registered device. Ids are caller-supplied and never checked for
/// uniqueness: registering the same id twice stores two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub location: String,
}
