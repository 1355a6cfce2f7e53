use std::future::Future;

use crate::domain::device::context::OpContext;
use crate::domain::device::models::device::{Device, DeviceError, SerialNumber, StorageError};

/// `DeviceService` is the public API for the device domain.
///
/// Inputs arrive unvalidated; every operation checks them before touching storage.
pub trait DeviceService: Clone + Send + Sync + 'static {
    fn register_device(
        &self,
        ctx: &OpContext,
        serial_number: i64,
        firmware_version: i64,
    ) -> impl Future<Output = Result<Device, DeviceError>> + Send;

    fn toggle_mesh(
        &self,
        ctx: &OpContext,
        serial_number: i64,
    ) -> impl Future<Output = Result<Device, DeviceError>> + Send;

    fn retrieve_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: i64,
    ) -> impl Future<Output = Result<Device, DeviceError>> + Send;
}

/// `DeviceRepository` represents a store of device data.
pub trait DeviceRepository: Send + Sync + Clone + 'static {
    /// Persists `device` and returns the serial number the store recorded for it.
    fn create_device(
        &self,
        ctx: &OpContext,
        device: &Device,
    ) -> impl Future<Output = Result<SerialNumber, StorageError>> + Send;

    /// Flips the mesh flag of the matching device in one atomic step and returns the updated
    /// record.
    fn update_mesh_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> impl Future<Output = Result<Device, StorageError>> + Send;

    fn read_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> impl Future<Output = Result<Device, StorageError>> + Send;
}
