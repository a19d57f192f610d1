use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use cinema_core::client_ip::ClientIp;

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::rating::{RateMovieInput, RateMovieUseCase};

// ── POST /ratings ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RateMovieRequest {
    pub star: i16,
    pub movie: i32,
}

#[derive(Serialize)]
pub struct RatingResponse {
    pub star: i16,
    pub movie: i32,
}

/// The rating is keyed by the caller's address, one per movie.
pub async fn create_rating(
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RateMovieRequest>, CatalogServiceError>,
) -> Result<(StatusCode, Json<RatingResponse>), CatalogServiceError> {
    let usecase = RateMovieUseCase {
        ratings: state.rating_repo(),
        movies: state.movie_repo(),
    };
    let rating = usecase
        .execute(
            &client_ip.to_string(),
            RateMovieInput {
                star: body.star,
                movie_id: body.movie,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RatingResponse {
            star: rating.star.value(),
            movie: rating.movie_id,
        }),
    ))
}
