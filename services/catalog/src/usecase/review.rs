use chrono::Utc;

use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::types::{
    NewReview, REVIEW_NAME_MAX, REVIEW_TEXT_MAX, Review, is_valid_email,
};
use crate::error::CatalogServiceError;

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub email: String,
    pub name: String,
    pub text: String,
    pub movie_id: i32,
    pub parent_id: Option<i32>,
}

pub struct CreateReviewUseCase<V: ReviewRepository, M: MovieRepository> {
    pub reviews: V,
    pub movies: M,
}

impl<V: ReviewRepository, M: MovieRepository> CreateReviewUseCase<V, M> {
    pub async fn execute(&self, input: CreateReviewInput) -> Result<Review, CatalogServiceError> {
        validate_length("name", &input.name, REVIEW_NAME_MAX)?;
        validate_length("text", &input.text, REVIEW_TEXT_MAX)?;
        if !is_valid_email(&input.email) {
            return Err(CatalogServiceError::invalid(
                "email",
                "enter a valid email address",
            ));
        }

        if self.movies.find_published(input.movie_id).await?.is_none() {
            return Err(CatalogServiceError::invalid("movie", "movie does not exist"));
        }

        // Replies may only hang off a review of the same movie, which keeps
        // every thread a tree rooted in that movie.
        if let Some(parent_id) = input.parent_id {
            let parent = self
                .reviews
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| CatalogServiceError::invalid("parent", "review does not exist"))?;
            if parent.movie_id != input.movie_id {
                return Err(CatalogServiceError::invalid(
                    "parent",
                    "review belongs to another movie",
                ));
            }
        }

        let review = self
            .reviews
            .create(&NewReview {
                email: input.email,
                name: input.name,
                text: input.text,
                parent_id: input.parent_id,
                movie_id: input.movie_id,
                created_at: Utc::now(),
            })
            .await?;
        tracing::info!(
            review_id = review.id,
            movie_id = review.movie_id,
            parent_id = ?review.parent_id,
            "review created"
        );
        Ok(review)
    }
}

fn validate_length(field: &'static str, value: &str, max: usize) -> Result<(), CatalogServiceError> {
    if value.trim().is_empty() {
        return Err(CatalogServiceError::invalid(field, "may not be blank"));
    }
    if value.chars().count() > max {
        return Err(CatalogServiceError::invalid(
            field,
            format!("at most {max} characters"),
        ));
    }
    Ok(())
}
