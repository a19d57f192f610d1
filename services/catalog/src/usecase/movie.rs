use std::collections::HashMap;

use cinema_domain::pagination::PageRequest;

use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::review_tree::build_review_tree;
use crate::domain::types::{CreditRole, MovieDetail, MovieFilter, MovieListItem, RatingStats};
use crate::error::CatalogServiceError;

// ── ListMovies ───────────────────────────────────────────────────────────────

pub struct ListMoviesUseCase<R: MovieRepository> {
    pub repo: R,
}

impl<R: MovieRepository> ListMoviesUseCase<R> {
    /// Published movies annotated with `rating_user` / `middle_star` for `client_ip`.
    pub async fn execute(
        &self,
        filter: &MovieFilter,
        page: PageRequest,
        client_ip: &str,
    ) -> Result<Vec<MovieListItem>, CatalogServiceError> {
        let movies = self.repo.list_published(filter, page).await?;
        if movies.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<i32> = movies.iter().map(|m| m.id).collect();
        let mut stats: HashMap<i32, RatingStats> = self
            .repo
            .rating_stats(&ids, client_ip)
            .await?
            .into_iter()
            .map(|s| (s.movie_id, s))
            .collect();

        let items = movies
            .into_iter()
            .map(|movie| {
                let stats = stats
                    .remove(&movie.id)
                    .unwrap_or_else(|| RatingStats::unrated(movie.id));
                MovieListItem {
                    movie,
                    rating_user: stats.rated_by_client(),
                    middle_star: stats.middle_star(),
                }
            })
            .collect();
        Ok(items)
    }
}

// ── GetMovie ─────────────────────────────────────────────────────────────────

pub struct GetMovieUseCase<M: MovieRepository, V: ReviewRepository> {
    pub movies: M,
    pub reviews: V,
}

impl<M: MovieRepository, V: ReviewRepository> GetMovieUseCase<M, V> {
    pub async fn execute(&self, id: i32) -> Result<MovieDetail, CatalogServiceError> {
        let movie = self
            .movies
            .find_published(id)
            .await?
            .ok_or(CatalogServiceError::MovieNotFound)?;

        let category = match movie.category_id {
            Some(category_id) => self.movies.category_name(category_id).await?,
            None => None,
        };
        let directors = self.movies.credits(id, CreditRole::Director).await?;
        let actors = self.movies.credits(id, CreditRole::Actor).await?;
        let genres = self.movies.genre_names(id).await?;
        let reviews = build_review_tree(self.reviews.list_by_movie(id).await?);

        Ok(MovieDetail {
            movie,
            category,
            directors,
            actors,
            genres,
            reviews,
        })
    }
}
