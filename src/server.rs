use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::MovieRepo;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<dyn MovieRepo>,
}

impl AppState {
    pub fn new(db: Arc<dyn MovieRepo>) -> Self {
        Self { db }
    }
}

pub fn build_router(state: AppState) -> Router {
    let theater_routes = Router::new()
        .route("/theater/movies/", get(crate::theater::list_movies))
        .route(
            "/theater/movies/:movie_id/",
            get(crate::theater::get_movie_by_id),
        );

    Router::new()
        .merge(theater_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // OPTIONS still gets a 200 so CORS preflight works for unmatched paths
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
