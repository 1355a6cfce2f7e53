use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net;

use crate::domain::device::ports::DeviceService;
use crate::inbound::http::handlers::{
    get_device::get_device, health::health, patch_device::patch_device,
    register_device::register_device,
};

mod handlers;
mod responses;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
    /// Upper bound on the storage work done for a single request.
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
struct AppState<DS: DeviceService> {
    device_service: Arc<DS>,
    request_timeout: Duration,
}

pub struct HttpServer {
    router: axum::Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(
        device_service: impl DeviceService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let router = router(device_service, config.request_timeout);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self
            .listener
            .local_addr()
            .context("failed to read listener address")?;
        tracing::info!("listening on {}", addr);

        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

fn router(device_service: impl DeviceService, request_timeout: Duration) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let state = AppState {
        device_service: Arc::new(device_service),
        request_timeout,
    };

    axum::Router::new()
        .nest("/api", api_routes())
        .layer(trace_layer)
        .with_state(state)
}

fn api_routes<DS: DeviceService>() -> Router<AppState<DS>> {
    Router::new()
        .route("/health", get(health))
        .route("/devices", post(register_device))
        .route(
            "/devices/{serial_number}",
            get(get_device).patch(patch_device),
        )
}
