use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::device::context::OpContext;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::responses::{ApiError, ApiSuccess, DeviceResponseData};

pub async fn get_device<DS: DeviceService>(
    State(state): State<AppState<DS>>,
    serial_number: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let Path(serial_number) = serial_number?;
    let ctx = OpContext::with_timeout(state.request_timeout);

    state
        .device_service
        .retrieve_by_serial(&ctx, serial_number)
        .await
        .map_err(ApiError::from)
        .map(|ref device| ApiSuccess::new(StatusCode::OK, device.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::tests::state;

    #[tokio::test]
    async fn test_get_device_not_found() {
        let (state, _) = state();

        let result = get_device(State(state), Ok(Path(87654321))).await;
        let expected = Err(ApiError::NotFound(
            "device with serial number 87654321 not found".to_string(),
        ));

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_device_invalid_serial_number() {
        let (state, _) = state();

        let result = get_device(State(state), Ok(Path(42))).await;
        let expected = Err(ApiError::BadRequest(
            "serial number 42 must be exactly 8 digits".to_string(),
        ));

        assert_eq!(result, expected);
    }
}
