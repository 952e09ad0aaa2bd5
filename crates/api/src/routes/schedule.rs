use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/schedule/parse",
            post(handlers::schedule::parse_schedule),
        )
        .route(
            "/api/schedule/merge",
            post(handlers::schedule::merge_schedule),
        )
}
