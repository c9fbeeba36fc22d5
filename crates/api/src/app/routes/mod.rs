use axum::{
    routing::{get, post},
    Router,
};

pub mod products;
pub mod reports;
pub mod simulate;
pub mod system;

/// Router for the inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .route("/reorder-report", get(reports::get_reorder_report))
        .route("/simulate", post(simulate::simulate_spike))
}
