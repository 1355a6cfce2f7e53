use std::str::FromStr;

use anyhow::{Context, anyhow};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::domain::device::context::OpContext;
use crate::domain::device::models::device::{
    Device, DeviceConfig, FirmwareVersion, SerialNumber, StorageError,
};
use crate::domain::device::ports::DeviceRepository;

const DEVICE_COLUMNS: &str = "serial_number, firmware_version, is_current_firmware, \
     mesh_enabled, app_config_enabled, kc_config_enabled";

#[derive(Debug, Clone)]
pub struct Sqlite {
    pool: SqlitePool,
}

impl Sqlite {
    pub async fn new(path: &str) -> Result<Sqlite, anyhow::Error> {
        let pool = SqlitePool::connect_with(
            SqliteConnectOptions::from_str(path)
                .with_context(|| format!("invalid database path {}", path))?
                .create_if_missing(true),
        )
        .await
        .with_context(|| format!("failed to open database at {}", path))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, bringing its schema up to date first.
    pub async fn from_pool(pool: SqlitePool) -> Result<Sqlite, anyhow::Error> {
        sqlx::migrate!()
            .run(&pool)
            .await
            .context("failed to run database migrations")?;

        Ok(Sqlite { pool })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DeviceRow {
    serial_number: i64,
    firmware_version: i64,
    is_current_firmware: bool,
    mesh_enabled: bool,
    app_config_enabled: bool,
    kc_config_enabled: bool,
}

impl TryFrom<DeviceRow> for Device {
    type Error = anyhow::Error;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        let serial_number = SerialNumber::new(row.serial_number)
            .context("stored device has an invalid serial number")?;
        let firmware_version = FirmwareVersion::new(row.firmware_version)
            .with_context(|| {
                format!("stored device {} has an invalid firmware version", serial_number)
            })?;

        Ok(Device::new(
            serial_number,
            firmware_version,
            row.is_current_firmware,
            DeviceConfig {
                mesh_enabled: row.mesh_enabled,
                app_config_enabled: row.app_config_enabled,
                kc_config_enabled: row.kc_config_enabled,
            },
        ))
    }
}

fn into_device(row: Option<DeviceRow>) -> Result<Device, StorageError> {
    let row = row.ok_or(StorageError::NotFound)?;
    Ok(Device::try_from(row)?)
}

impl DeviceRepository for Sqlite {
    async fn create_device(
        &self,
        ctx: &OpContext,
        device: &Device,
    ) -> Result<SerialNumber, StorageError> {
        let query = format!(
            "INSERT INTO devices ({DEVICE_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING serial_number"
        );

        ctx.run(async {
            let stored: i64 = sqlx::query_scalar(&query)
                .bind(device.serial_number().into_inner())
                .bind(device.firmware_version().into_inner())
                .bind(device.is_current_firmware())
                .bind(device.mesh_enabled())
                .bind(device.app_config_enabled())
                .bind(device.kc_config_enabled())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    anyhow!(e).context(format!(
                        "failed to save device with serial number {}",
                        device.serial_number()
                    ))
                })?;

            let stored = SerialNumber::new(stored)
                .context("store returned an invalid serial number")?;

            Ok::<_, StorageError>(stored)
        })
        .await
    }

    async fn update_mesh_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> Result<Device, StorageError> {
        let query = format!(
            "UPDATE devices SET mesh_enabled = NOT mesh_enabled \
             WHERE serial_number = $1 RETURNING {DEVICE_COLUMNS}"
        );

        ctx.run(async {
            let row = sqlx::query_as::<_, DeviceRow>(&query)
                .bind(serial_number.into_inner())
                .fetch_optional(&self.pool)
                .await
                .with_context(|| {
                    format!("failed to toggle mesh for device {}", serial_number)
                })?;

            into_device(row)
        })
        .await
    }

    async fn read_by_serial(
        &self,
        ctx: &OpContext,
        serial_number: &SerialNumber,
    ) -> Result<Device, StorageError> {
        let query = format!("SELECT {DEVICE_COLUMNS} FROM devices WHERE serial_number = $1");

        ctx.run(async {
            let row = sqlx::query_as::<_, DeviceRow>(&query)
                .bind(serial_number.into_inner())
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("failed to read device {}", serial_number))?;

            into_device(row)
        })
        .await
    }
}
