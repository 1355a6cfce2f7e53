use derive_more::Display;
use thiserror::Error;

use crate::domain::device::validation::{
    InvalidFirmwareVersionError, InvalidSerialNumberError, validate_firmware_version,
    validate_serial_number,
};

/// Represents always valid device serial number.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SerialNumber(i64);

impl SerialNumber {
    pub fn new(raw: i64) -> Result<Self, InvalidSerialNumberError> {
        validate_serial_number(raw)?;
        Ok(Self(raw))
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// Represents always valid firmware version.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirmwareVersion(i64);

impl FirmwareVersion {
    pub fn new(raw: i64) -> Result<Self, InvalidFirmwareVersionError> {
        validate_firmware_version(raw)?;
        Ok(Self(raw))
    }

    pub fn into_inner(self) -> i64 {
        self.0
    }
}

/// Configuration switches carried by every device. Only `mesh_enabled` changes after
/// registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceConfig {
    pub mesh_enabled: bool,
    pub app_config_enabled: bool,
    pub kc_config_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Device {
    serial_number: SerialNumber,
    firmware_version: FirmwareVersion,
    is_current_firmware: bool,
    config: DeviceConfig,
}

impl Device {
    pub fn new(
        serial_number: SerialNumber,
        firmware_version: FirmwareVersion,
        is_current_firmware: bool,
        config: DeviceConfig,
    ) -> Self {
        Self {
            serial_number,
            firmware_version,
            is_current_firmware,
            config,
        }
    }

    /// A freshly registered device: running the current firmware with every config switch off.
    pub fn registered(serial_number: SerialNumber, firmware_version: FirmwareVersion) -> Self {
        Self::new(
            serial_number,
            firmware_version,
            true,
            DeviceConfig::default(),
        )
    }

    pub fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    pub fn firmware_version(&self) -> &FirmwareVersion {
        &self.firmware_version
    }

    pub fn is_current_firmware(&self) -> bool {
        self.is_current_firmware
    }

    pub fn mesh_enabled(&self) -> bool {
        self.config.mesh_enabled
    }

    pub fn app_config_enabled(&self) -> bool {
        self.config.app_config_enabled
    }

    pub fn kc_config_enabled(&self) -> bool {
        self.config.kc_config_enabled
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn with_serial_number(self, serial_number: SerialNumber) -> Self {
        Self {
            serial_number,
            ..self
        }
    }

    pub fn with_mesh_toggled(self) -> Self {
        let config = DeviceConfig {
            mesh_enabled: !self.config.mesh_enabled,
            ..self.config
        };

        Self { config, ..self }
    }
}

/// Failure reported by a [crate::domain::device::ports::DeviceRepository].
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no matching record in storage")]
    NotFound,
    #[error("storage operation was cancelled")]
    Cancelled,
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// Errors returned by the device domain API.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error(transparent)]
    InvalidSerialNumber(#[from] InvalidSerialNumberError),
    #[error(transparent)]
    InvalidFirmwareVersion(#[from] InvalidFirmwareVersionError),
    #[error("device with serial number {serial_number} not found")]
    NotFound { serial_number: SerialNumber },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod serial_number_tests {
    use super::*;

    #[test]
    fn test_new_success() {
        let result = SerialNumber::new(12345678);
        let expected = Ok(SerialNumber(12345678));

        assert_eq!(result, expected);
    }

    #[test]
    fn test_new_too_short() {
        let result = SerialNumber::new(1234);
        let expected = Err(InvalidSerialNumberError(1234));

        assert_eq!(result, expected);
    }
}
