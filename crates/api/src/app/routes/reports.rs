use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;

pub async fn get_reorder_report(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let report = services.reorder_report();
    tracing::debug!(
        total_items = report.total_items,
        total_cost = report.total_cost,
        "reorder report built"
    );
    (StatusCode::OK, Json(report)).into_response()
}
