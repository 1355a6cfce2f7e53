use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use crate::domain::device::context::OpContext;
use crate::domain::device::models::device::{Device, SerialNumber, StorageError};
use crate::domain::device::ports::DeviceRepository;

/// Map-backed [DeviceRepository] for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemory {
    devices: Arc<Mutex<HashMap<SerialNumber, Device>>>,
    calls: Arc<AtomicUsize>,
    assigned: Option<SerialNumber>,
    unavailable: bool,
}

impl InMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores every created device under `serial_number` instead of its own.
    pub fn assigning(mut self, serial_number: SerialNumber) -> Self {
        self.assigned = Some(serial_number);
        self
    }

    /// Fails every operation with [StorageError::Unknown].
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Number of repository operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            Err(anyhow!("storage unavailable").into())
        } else {
            Ok(())
        }
    }

    fn devices(&self) -> std::sync::MutexGuard<'_, HashMap<SerialNumber, Device>> {
        self.devices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DeviceRepository for InMemory {
    async fn create_device(
        &self,
        ctx: &OpContext,
        device: &Device,
    ) -> Result<SerialNumber, StorageError> {
        ctx.run(async {
            self.enter()?;
            let serial_number = self.assigned.unwrap_or(*device.serial_number());
            self.devices().insert(
                serial_number,
                device.clone().with_serial_number(serial_number),
            );
            Ok::<_, StorageError>(serial_number)
        })
        .await
    }

    async fn update_mesh_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> Result<Device, StorageError> {
        ctx.run(async {
            self.enter()?;
            let mut devices = self.devices();
            let device = devices
                .remove(serial_number)
                .ok_or(StorageError::NotFound)?
                .with_mesh_toggled();
            devices.insert(*serial_number, device.clone());
            Ok::<_, StorageError>(device)
        })
        .await
    }

    async fn read_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> Result<Device, StorageError> {
        ctx.run(async {
            self.enter()?;
            self.devices()
                .get(serial_number)
                .cloned()
                .ok_or(StorageError::NotFound)
        })
        .await
    }
}
