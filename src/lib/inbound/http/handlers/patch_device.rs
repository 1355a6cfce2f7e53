use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::domain::device::context::OpContext;
use crate::domain::device::ports::DeviceService;
use crate::inbound::http::AppState;
use crate::inbound::http::responses::{ApiError, ApiSuccess, DeviceResponseData};

/// Flips the mesh flag of a device. The request carries no body.
pub async fn patch_device<DS: DeviceService>(
    State(state): State<AppState<DS>>,
    serial_number: Result<Path<i64>, PathRejection>,
) -> Result<ApiSuccess<DeviceResponseData>, ApiError> {
    let Path(serial_number) = serial_number?;
    let ctx = OpContext::with_timeout(state.request_timeout);

    state
        .device_service
        .toggle_mesh(&ctx, serial_number)
        .await
        .map_err(ApiError::from)
        .map(|ref device| ApiSuccess::new(StatusCode::OK, device.into()))
}
