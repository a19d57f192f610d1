//! In-memory repositories for usecase tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

use cinema_domain::pagination::PageRequest;

use crate::domain::repository::{
    ActorRepository, MovieRepository, RatingRepository, ReviewRepository,
};
use crate::domain::types::{
    Actor, ActorSummary, CreditRole, Movie, MovieFilter, MovieSummary, NewReview, Rating,
    RatingStats, RatingUpsert, Review,
};
use crate::error::CatalogServiceError;

pub fn movie(id: i32) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        tagline: format!("Tagline {id}"),
        description: String::new(),
        poster: format!("movies/{id}.jpg"),
        year: 2000 + id,
        country: "USA".into(),
        world_premiere: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        budget: 0,
        fees_in_usa: 0,
        fees_in_world: 0,
        url: format!("movie-{id}"),
        category_id: Some(1),
    }
}

pub fn person(id: i32) -> ActorSummary {
    ActorSummary {
        id,
        name: format!("Person {id}"),
        image: format!("actors/{id}.jpg"),
    }
}

pub fn review(id: i32, movie_id: i32, parent_id: Option<i32>) -> Review {
    Review {
        id,
        email: "viewer@example.com".into(),
        name: format!("viewer {id}"),
        text: format!("review {id}"),
        parent_id,
        movie_id,
        created_at: Utc::now(),
    }
}

// ── Movies ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockMovieRepo {
    /// Published movies only.
    pub movies: Vec<Movie>,
    pub stats: Vec<RatingStats>,
    pub categories: HashMap<i32, String>,
    pub actors: Vec<ActorSummary>,
    pub directors: Vec<ActorSummary>,
    pub genres: Vec<String>,
    pub seen_filter: Mutex<Option<MovieFilter>>,
    pub seen_client_ip: Mutex<Option<String>>,
}

impl MovieRepository for MockMovieRepo {
    async fn list_published(
        &self,
        filter: &MovieFilter,
        _page: PageRequest,
    ) -> Result<Vec<MovieSummary>, CatalogServiceError> {
        *self.seen_filter.lock().unwrap() = Some(filter.clone());
        Ok(self
            .movies
            .iter()
            .map(|m| MovieSummary {
                id: m.id,
                title: m.title.clone(),
                tagline: m.tagline.clone(),
                category_id: m.category_id,
            })
            .collect())
    }

    async fn rating_stats(
        &self,
        movie_ids: &[i32],
        client_ip: &str,
    ) -> Result<Vec<RatingStats>, CatalogServiceError> {
        *self.seen_client_ip.lock().unwrap() = Some(client_ip.to_owned());
        Ok(self
            .stats
            .iter()
            .filter(|s| movie_ids.contains(&s.movie_id))
            .copied()
            .collect())
    }

    async fn find_published(&self, id: i32) -> Result<Option<Movie>, CatalogServiceError> {
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn category_name(
        &self,
        category_id: i32,
    ) -> Result<Option<String>, CatalogServiceError> {
        Ok(self.categories.get(&category_id).cloned())
    }

    async fn credits(
        &self,
        _movie_id: i32,
        role: CreditRole,
    ) -> Result<Vec<ActorSummary>, CatalogServiceError> {
        Ok(match role {
            CreditRole::Actor => self.actors.clone(),
            CreditRole::Director => self.directors.clone(),
        })
    }

    async fn genre_names(&self, _movie_id: i32) -> Result<Vec<String>, CatalogServiceError> {
        Ok(self.genres.clone())
    }
}

// ── Actors ───────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockActorRepo {
    pub actors: Vec<Actor>,
}

impl ActorRepository for MockActorRepo {
    async fn list(&self, page: PageRequest) -> Result<Vec<ActorSummary>, CatalogServiceError> {
        Ok(self
            .actors
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|a| ActorSummary {
                id: a.id,
                name: a.name.clone(),
                image: a.image.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Actor>, CatalogServiceError> {
        Ok(self.actors.iter().find(|a| a.id == id).cloned())
    }
}

// ── Reviews ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockReviewRepo {
    pub reviews: Mutex<Vec<Review>>,
}

impl MockReviewRepo {
    pub fn with(reviews: Vec<Review>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
        }
    }
}

impl ReviewRepository for MockReviewRepo {
    async fn list_by_movie(&self, movie_id: i32) -> Result<Vec<Review>, CatalogServiceError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, CatalogServiceError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create(&self, review: &NewReview) -> Result<Review, CatalogServiceError> {
        let mut reviews = self.reviews.lock().unwrap();
        let id = reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created = Review {
            id,
            email: review.email.clone(),
            name: review.name.clone(),
            text: review.text.clone(),
            parent_id: review.parent_id,
            movie_id: review.movie_id,
            created_at: review.created_at,
        };
        reviews.push(created.clone());
        Ok(created)
    }
}

// ── Ratings ──────────────────────────────────────────────────────────────────

/// Keyed by `(ip, movie_id)` like the unique index it stands in for.
#[derive(Default)]
pub struct MockRatingRepo {
    pub rows: Mutex<Vec<Rating>>,
}

impl RatingRepository for MockRatingRepo {
    async fn upsert(&self, rating: &RatingUpsert) -> Result<Rating, CatalogServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|r| r.ip == rating.ip && r.movie_id == rating.movie_id)
        {
            row.star = rating.star;
            row.updated_at = rating.updated_at;
            return Ok(row.clone());
        }
        let row = Rating {
            id: rows.len() as i32 + 1,
            ip: rating.ip.clone(),
            star: rating.star,
            movie_id: rating.movie_id,
            updated_at: rating.updated_at,
        };
        rows.push(row.clone());
        Ok(row)
    }
}
