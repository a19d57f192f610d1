use chrono::Utc;

use cinema_domain::rating::Star;

use crate::domain::repository::{MovieRepository, RatingRepository};
use crate::domain::types::{Rating, RatingUpsert};
use crate::error::CatalogServiceError;

// ── RateMovie ────────────────────────────────────────────────────────────────

pub struct RateMovieInput {
    pub star: i16,
    pub movie_id: i32,
}

pub struct RateMovieUseCase<R: RatingRepository, M: MovieRepository> {
    pub ratings: R,
    pub movies: M,
}

impl<R: RatingRepository, M: MovieRepository> RateMovieUseCase<R, M> {
    /// Record `client_ip`'s star for the movie, replacing any earlier one.
    pub async fn execute(
        &self,
        client_ip: &str,
        input: RateMovieInput,
    ) -> Result<Rating, CatalogServiceError> {
        let star = Star::new(input.star)
            .map_err(|e| CatalogServiceError::invalid("star", e.to_string()))?;

        if self.movies.find_published(input.movie_id).await?.is_none() {
            return Err(CatalogServiceError::invalid("movie", "movie does not exist"));
        }

        let rating = self
            .ratings
            .upsert(&RatingUpsert {
                ip: client_ip.to_owned(),
                star,
                movie_id: input.movie_id,
                updated_at: Utc::now(),
            })
            .await?;
        tracing::info!(
            rating_id = rating.id,
            movie_id = rating.movie_id,
            star = %rating.star,
            "rating upserted"
        );
        Ok(rating)
    }
}
