use crate::modules::devices::core::device::Device;
use crate::modules::devices::core::event::DeviceEvent;
use async_trait::async_trait;

/// Port for the canonical device and event collections.
///
/// The store is the sole mutator of both collections. None of the
/// operations can fail: appends accept whatever well-typed value they are
/// given and a query for an unknown device id is an empty list, not an
/// error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends a device. No uniqueness check on `device_id`.
    async fn register_device(&self, device: Device);

    /// Appends an event. `device_id` is not checked against the registered
    /// devices.
    async fn add_event(&self, event: DeviceEvent);

    /// All events with the given `device_id`, in the order they were added.
    async fn device_events(&self, device_id: i64) -> Vec<DeviceEvent>;
}

pub mod in_memory;
