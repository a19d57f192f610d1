use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::review::{CreateReviewInput, CreateReviewUseCase};

// ── POST /reviews ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub email: String,
    pub name: String,
    pub text: String,
    pub movie: i32,
    #[serde(default)]
    pub parent: Option<i32>,
}

#[derive(Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub text: String,
    pub movie: i32,
    pub parent: Option<i32>,
    #[serde(serialize_with = "cinema_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn create_review(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateReviewRequest>, CatalogServiceError>,
) -> Result<(StatusCode, Json<ReviewResponse>), CatalogServiceError> {
    let usecase = CreateReviewUseCase {
        reviews: state.review_repo(),
        movies: state.movie_repo(),
    };
    let review = usecase
        .execute(CreateReviewInput {
            email: body.email,
            name: body.name,
            text: body.text,
            movie_id: body.movie,
            parent_id: body.parent,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            id: review.id,
            email: review.email,
            name: review.name,
            text: review.text,
            movie: review.movie_id,
            parent: review.parent_id,
            created_at: review.created_at,
        }),
    ))
}
