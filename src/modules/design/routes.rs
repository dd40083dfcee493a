use axum::{
    routing::{get, post},
    Router,
};

use crate::modules::design::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/design/validate", post(controller::validate_design))
        .route("/health", get(controller::health))
}
