use axum::{Json, extract::State};

use crate::{
    message::{HealthResponse, ServiceInfo},
    state::SharedState,
};

pub const SERVICE_NAME: &str = "Student Assistant ML Service";

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.config.backend_base.clone(),
    })
}

pub async fn info_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
