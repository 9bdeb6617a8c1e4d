use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability",
            get(handlers::availability::get_selectable_dates),
        )
        .route(
            "/api/availability/:date",
            get(handlers::availability::get_day_slots),
        )
}
