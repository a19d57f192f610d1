use chrono::{DateTime, NaiveDate, Utc};

use cinema_domain::rating::Star;

use crate::domain::review_tree::ReviewNode;

/// Published movie as shown in the list endpoint, before annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub category_id: Option<i32>,
}

/// Filters accepted by the movie list endpoint. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    /// Match movies tagged with any of these genre names.
    pub genres: Vec<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub category_id: Option<i32>,
}

/// Per-movie rating aggregate, relative to one requesting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStats {
    pub movie_id: i32,
    pub star_count: i64,
    pub star_sum: i64,
    /// Ratings on this movie left by the requesting client (0 or 1).
    pub client_count: i64,
}

impl RatingStats {
    /// Stats for a movie nobody has rated.
    pub fn unrated(movie_id: i32) -> Self {
        Self {
            movie_id,
            star_count: 0,
            star_sum: 0,
            client_count: 0,
        }
    }

    /// Mean star value, `None` when there are no ratings.
    pub fn middle_star(&self) -> Option<f64> {
        (self.star_count > 0).then(|| self.star_sum as f64 / self.star_count as f64)
    }

    pub fn rated_by_client(&self) -> bool {
        self.client_count > 0
    }
}

/// A list row with the per-request annotations applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListItem {
    pub movie: MovieSummary,
    pub rating_user: bool,
    pub middle_star: Option<f64>,
}

/// Published movie record. Drafts never make it into this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i32,
    pub country: String,
    pub world_premiere: NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub url: String,
    pub category_id: Option<i32>,
}

/// Which junction links a person to a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditRole {
    Actor,
    Director,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorSummary {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
}

/// Everything the movie detail endpoint renders.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: Movie,
    pub category: Option<String>,
    pub directors: Vec<ActorSummary>,
    pub actors: Vec<ActorSummary>,
    pub genres: Vec<String>,
    pub reviews: Vec<ReviewNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub text: String,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
    pub created_at: DateTime<Utc>,
}

/// A review about to be inserted; the id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub email: String,
    pub name: String,
    pub text: String,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id: i32,
    pub ip: String,
    pub star: Star,
    pub movie_id: i32,
    pub updated_at: DateTime<Utc>,
}

/// Desired state of the rating for `(ip, movie_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingUpsert {
    pub ip: String,
    pub star: Star,
    pub movie_id: i32,
    pub updated_at: DateTime<Utc>,
}

pub const REVIEW_NAME_MAX: usize = 100;
pub const REVIEW_TEXT_MAX: usize = 5000;
pub const REVIEW_EMAIL_MAX: usize = 254;

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > REVIEW_EMAIL_MAX || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}
