#![allow(async_fn_in_trait)]

use cinema_domain::pagination::PageRequest;

use crate::domain::types::{
    Actor, ActorSummary, CreditRole, Movie, MovieFilter, MovieSummary, NewReview, Rating,
    RatingStats, RatingUpsert, Review,
};
use crate::error::CatalogServiceError;

/// Read access to published movies and their relations.
pub trait MovieRepository: Send + Sync {
    /// Published movies matching `filter`, ascending id.
    async fn list_published(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
    ) -> Result<Vec<MovieSummary>, CatalogServiceError>;

    /// Rating aggregates for the given movies relative to `client_ip`.
    /// Movies without ratings may be absent from the result.
    async fn rating_stats(
        &self,
        movie_ids: &[i32],
        client_ip: &str,
    ) -> Result<Vec<RatingStats>, CatalogServiceError>;

    async fn find_published(&self, id: i32) -> Result<Option<Movie>, CatalogServiceError>;

    async fn category_name(
        &self,
        category_id: i32,
    ) -> Result<Option<String>, CatalogServiceError>;

    /// People credited on the movie in `role`, ascending id.
    async fn credits(
        &self,
        movie_id: i32,
        role: CreditRole,
    ) -> Result<Vec<ActorSummary>, CatalogServiceError>;

    /// Genre names on the movie, ascending genre id.
    async fn genre_names(&self, movie_id: i32) -> Result<Vec<String>, CatalogServiceError>;
}

/// Repository for actors and directors.
pub trait ActorRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<ActorSummary>, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, CatalogServiceError>;
}

/// Repository for movie reviews.
pub trait ReviewRepository: Send + Sync {
    /// Every review on the movie, replies included, in no particular order.
    async fn list_by_movie(&self, movie_id: i32) -> Result<Vec<Review>, CatalogServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, CatalogServiceError>;
    async fn create(&self, review: &NewReview) -> Result<Review, CatalogServiceError>;
}

/// Repository for per-client star ratings.
pub trait RatingRepository: Send + Sync {
    /// Insert or overwrite the rating for `(ip, movie_id)` in one statement.
    async fn upsert(&self, rating: &RatingUpsert) -> Result<Rating, CatalogServiceError>;
}
