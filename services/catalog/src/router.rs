use axum::{
    Router,
    http::HeaderName,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::request_id::PropagateRequestIdLayer;
use tower_http::trace::TraceLayer;

use cinema_core::health::{healthz, readyz};
use cinema_core::middleware::{REQUEST_ID_HEADER, request_id_layer};

use crate::handlers::{
    actor::{get_actor, get_actors},
    movie::{get_movie, get_movies},
    rating::create_rating,
    review::create_review,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Movies
        .route("/movies", get(get_movies))
        .route("/movies/{id}", get(get_movie))
        // Actors
        .route("/actors", get(get_actors))
        .route("/actors/{id}", get(get_actor))
        // Reviews & ratings
        .route("/reviews", post(create_review))
        .route("/ratings", post(create_rating))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID_HEADER,
                ))),
        )
        .with_state(state)
}
