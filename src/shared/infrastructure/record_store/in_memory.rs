// In memory implementation of the RecordStore port.
//
// Responsibilities
// - Hold the device and event sequences for the lifetime of the process.
// - Serialize concurrent access so appends never lose an entry and reads
//   never observe a half-applied append.

use crate::modules::devices::core::device::Device;
use crate::modules::devices::core::event::DeviceEvent;
use crate::shared::infrastructure::record_store::RecordStore;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordStore {
    devices: RwLock<Vec<Device>>,
    events: RwLock<Vec<DeviceEvent>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered devices, duplicates included. Test observability.
    pub async fn device_count(&self) -> usize {
        self.devices.read().await.len()
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn register_device(&self, device: Device) {
        self.devices.write().await.push(device);
    }

    async fn add_event(&self, event: DeviceEvent) {
        self.events.write().await.push(event);
    }

    async fn device_events(&self, device_id: i64) -> Vec<DeviceEvent> {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.device_id == device_id)
            .cloned()
            .collect()
    }
}
