use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router with all portal endpoints.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/v1/health", get(handlers::health_handler))
        .route("/v1/info", get(handlers::info_handler))
        .route("/v1/roles/:tag", get(handlers::resolve_role_handler))
        // Admin
        .route("/v1/admin/hotels", post(handlers::add_hotel_handler))
        .route("/v1/admin/orders", get(handlers::list_orders_handler))
        // Hotel owner
        .route("/v1/owner/menu", post(handlers::add_menu_item_handler))
        .route("/v1/owner/orders", get(handlers::owner_orders_handler))
        .route(
            "/v1/owner/orders/:order_id/confirm",
            post(handlers::confirm_order_handler),
        )
        // Customer
        .route("/v1/customer/register", post(handlers::register_handler))
        .route("/v1/customer/hotels", get(handlers::browse_hotels_handler))
        .route(
            "/v1/customer/hotels/:hotel_id/menu",
            get(handlers::browse_menu_handler),
        )
        .route("/v1/customer/orders", post(handlers::place_order_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
