use crate::domain::device::context::OpContext;
use crate::domain::device::models::device::{
    Device, DeviceError, FirmwareVersion, SerialNumber, StorageError,
};
use crate::domain::device::ports::{DeviceRepository, DeviceService};

/// Canonical implementation of the [DeviceService] port, through which the device domain API is
/// consumed.
#[derive(Debug, Clone)]
pub struct Service<R: DeviceRepository> {
    repo: R,
}

impl<R: DeviceRepository> Service<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: DeviceRepository> DeviceService for Service<R> {
    async fn register_device(
        &self,
        ctx: &OpContext,
        serial_number: i64,
        firmware_version: i64,
    ) -> Result<Device, DeviceError> {
        let serial_number = SerialNumber::new(serial_number)?;
        let firmware_version = FirmwareVersion::new(firmware_version)?;
        let device = Device::registered(serial_number, firmware_version);

        let stored_serial_number = self
            .repo
            .create_device(ctx, &device)
            .await
            .inspect_err(|e| {
                tracing::warn!(%serial_number, error = %e, "failed to create device");
            })?;

        tracing::debug!(serial_number = %stored_serial_number, "device registered");

        Ok(device.with_serial_number(stored_serial_number))
    }

    async fn toggle_mesh(
        &self,
        ctx: &OpContext,
        serial_number: i64,
    ) -> Result<Device, DeviceError> {
        let serial_number = SerialNumber::new(serial_number)?;

        let device = self
            .repo
            .update_mesh_by_serial(ctx, &serial_number)
            .await
            .map_err(|e| translate_not_found(e, serial_number))?;

        tracing::debug!(%serial_number, mesh_enabled = device.mesh_enabled(), "mesh toggled");

        Ok(device)
    }

    async fn retrieve_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: i64,
    ) -> Result<Device, DeviceError> {
        let serial_number = SerialNumber::new(serial_number)?;

        self.repo
            .read_by_serial(ctx, &serial_number)
            .await
            .map_err(|e| translate_not_found(e, serial_number))
    }
}

/// Storage `NotFound` becomes the domain `NotFound`; everything else passes through as is.
fn translate_not_found(err: StorageError, serial_number: SerialNumber) -> DeviceError {
    match err {
        StorageError::NotFound => DeviceError::NotFound { serial_number },
        other => {
            tracing::warn!(%serial_number, error = %other, "storage operation failed");
            DeviceError::Storage(other)
        }
    }
}
