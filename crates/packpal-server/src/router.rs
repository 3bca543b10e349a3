use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all PackPal endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .route(
            "/v1/trips",
            get(handler::list_trips).post(handler::create_trip),
        )
        .route(
            "/v1/trips/:id",
            get(handler::get_trip)
                .patch(handler::rename_trip)
                .delete(handler::delete_trip),
        )
        .route(
            "/v1/trips/:id/items",
            get(handler::list_items).post(handler::add_items),
        )
        .route(
            "/v1/trips/:id/items/:item_id",
            patch(handler::patch_item).delete(handler::delete_item),
        )
        .route("/v1/trips/:id/share", get(handler::share_link))
        .route("/v1/trips/:id/chat", post(handler::chat_import))
        .route(
            "/v1/trips/token/:token",
            get(handler::resolve_share).post(handler::submit_via_share),
        )
        // Share links get opened from anywhere.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
