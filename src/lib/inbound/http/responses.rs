use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::device::models::device::{Device, DeviceError, StorageError};

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1.0 == other.1.0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
}

impl From<DeviceError> for ApiError {
    fn from(e: DeviceError) -> Self {
        match e {
            DeviceError::InvalidSerialNumber(cause) => Self::BadRequest(cause.to_string()),
            DeviceError::InvalidFirmwareVersion(cause) => Self::BadRequest(cause.to_string()),
            e @ DeviceError::NotFound { .. } => Self::NotFound(e.to_string()),
            DeviceError::Storage(StorageError::Unknown(cause)) => {
                tracing::error!("{:?}\n{}", cause, cause.backtrace());
                Self::InternalServerError("Internal server error".to_string())
            }
            DeviceError::Storage(cause) => {
                tracing::warn!("{}", cause);
                Self::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest(format!("invalid request body: {}", e.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::BadRequest("invalid serial number format".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use ApiError::*;

        match self {
            InternalServerError(e) => {
                tracing::error!("{}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponseBody::new_error(
                        "Internal server error".to_string(),
                    )),
                )
                    .into_response()
            }
            BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponseBody::new_error(message)),
            )
                .into_response(),
            NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponseBody::new_error(message)),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(message: String) -> Self {
        Self {
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Wire shape of a [Device].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponseData {
    serial_number: i64,
    firmware_version: i64,
    is_current_firmware: bool,
    mesh_enabled: bool,
    app_config_enabled: bool,
    kc_config_enabled: bool,
}

impl From<&Device> for DeviceResponseData {
    fn from(device: &Device) -> Self {
        Self {
            serial_number: device.serial_number().into_inner(),
            firmware_version: device.firmware_version().into_inner(),
            is_current_firmware: device.is_current_firmware(),
            mesh_enabled: device.mesh_enabled(),
            app_config_enabled: device.app_config_enabled(),
            kc_config_enabled: device.kc_config_enabled(),
        }
    }
}
