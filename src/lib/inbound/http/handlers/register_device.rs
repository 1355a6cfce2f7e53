use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::device::context::OpContext;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::responses::{ApiError, ApiSuccess, DeviceResponseData};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceHttpRequestBody {
    serial_number: i64,
    firmware_version: i64,
}

pub async fn register_device<DS: DeviceService>(
    State(state): State<AppState<DS>>,
    body: Result<Json<RegisterDeviceHttpRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let Json(body) = body?;
    let ctx = OpContext::with_timeout(state.request_timeout);

    state
        .device_service
        .register_device(&ctx, body.serial_number, body.firmware_version)
        .await
        .map_err(ApiError::from)
        .map(|ref device| ApiSuccess::new(StatusCode::CREATED, device.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::models::device::{Device, FirmwareVersion, SerialNumber};
    use crate::inbound::http::tests::state;

    #[tokio::test]
    async fn test_register_device_success() {
        let (state, _) = state();
        let body = RegisterDeviceHttpRequestBody {
            serial_number: 12345678,
            firmware_version: 5,
        };

        let result = register_device(State(state), Ok(Json(body))).await;

        let device = Device::registered(
            SerialNumber::new(12345678).unwrap(),
            FirmwareVersion::new(5).unwrap(),
        );
        let expected = Ok(ApiSuccess::new(StatusCode::CREATED, (&device).into()));

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_register_device_invalid_firmware_version() {
        let (state, repo) = state();
        let body = RegisterDeviceHttpRequestBody {
            serial_number: 12345678,
            firmware_version: 101,
        };

        let result = register_device(State(state), Ok(Json(body))).await;
        let expected = Err(ApiError::BadRequest(
            "firmware version 101 must be between 1 and 100".to_string(),
        ));

        assert_eq!(result, expected);
        assert_eq!(repo.calls(), 0);
    }
}
