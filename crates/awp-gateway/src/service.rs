//! # Gateway Service
//!
//! The axum server: one POST route taking a JSON-RPC body (single call or
//! batch array) plus a health probe. Batch elements are answered in order;
//! one failing call never fails its neighbours.

use crate::config::GatewayConfig;
use crate::error::{ApiError, GatewayError};
use crate::rpc::{route_method, AppState};
use awp_get_ready::GetReadyRouter;
use awp_onboard::OnboardRouter;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The HTTP gateway over the domain routers.
pub struct GatewayService {
    config: GatewayConfig,
    state: ServiceState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

#[derive(Clone)]
struct ServiceState {
    app: AppState,
    max_batch_size: usize,
}

impl GatewayService {
    pub fn new(
        config: GatewayConfig,
        onboard: Arc<OnboardRouter>,
        get_ready: Arc<GetReadyRouter>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        let state = ServiceState {
            app: AppState { onboard, get_ready },
            max_batch_size: config.max_batch_size,
        };
        Ok(Self {
            config,
            state,
            shutdown_tx: None,
        })
    }

    /// Build the axum router. Exposed so tests can drive it without a
    /// socket.
    pub fn router(&self) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        Router::new()
            .route("/", post(handle_json_rpc))
            .route("/health", get(health_check))
            .layer(middleware)
            .with_state(self.state.clone())
    }

    /// Bind and serve until shutdown is triggered.
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let addr = self.config.addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(addr = %addr, "gateway listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle_json_rpc(State(state): State<ServiceState>, body: String) -> impl IntoResponse {
    let request: serde_json::Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            let error = ApiError::parse_error(e.to_string());
            return (StatusCode::BAD_REQUEST, Json(error_body(None, &error)));
        }
    };

    let response = if let Some(requests) = request.as_array() {
        if requests.is_empty() {
            let error = ApiError::invalid_request("empty batch");
            return (StatusCode::BAD_REQUEST, Json(error_body(None, &error)));
        }
        if requests.len() > state.max_batch_size {
            let error = ApiError::limit_exceeded(format!(
                "batch of {} exceeds maximum of {}",
                requests.len(),
                state.max_batch_size
            ));
            return (StatusCode::BAD_REQUEST, Json(error_body(None, &error)));
        }

        let mut responses = Vec::with_capacity(requests.len());
        for req in requests {
            responses.push(process_single_request(&state, req).await);
        }
        serde_json::Value::Array(responses)
    } else {
        process_single_request(&state, &request).await
    };

    (StatusCode::OK, Json(response))
}

async fn process_single_request(
    state: &ServiceState,
    request: &serde_json::Value,
) -> serde_json::Value {
    let id = request.get("id").cloned();

    if !request.is_object() {
        return error_body(id, &ApiError::invalid_request("request must be an object"));
    }

    let Some(method) = request.get("method").and_then(|m| m.as_str()) else {
        return error_body(id, &ApiError::invalid_request("missing method"));
    };
    let params = request.get("params");

    match route_method(&state.app, method, params).await {
        Ok(value) => serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": value
        }),
        Err(error) => error_body(id, &error),
    }
}

fn error_body(id: Option<serde_json::Value>, error: &ApiError) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": error
    })
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "awp-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
