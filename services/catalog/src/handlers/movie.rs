use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::{Deserialize, Serialize};

use cinema_auth_types::identity::IdentityHeaders;
use cinema_core::client_ip::ClientIp;
use cinema_domain::pagination::PageRequest;

use crate::domain::review_tree::ReviewNode;
use crate::domain::types::{ActorSummary, MovieFilter};
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::movie::{GetMovieUseCase, ListMoviesUseCase};

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct MovieListQuery {
    /// Comma separated genre names.
    pub genres: Option<String>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub category: Option<i32>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl MovieListQuery {
    fn filter(&self) -> MovieFilter {
        let genres = self
            .genres
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        MovieFilter {
            genres,
            year_min: self.year_min,
            year_max: self.year_max,
            category_id: self.category,
        }
    }

    fn page(&self) -> PageRequest {
        PageRequest {
            per_page: self.per_page.unwrap_or(25),
            page: self.page.unwrap_or(1),
        }
        .clamped()
    }
}

// ── GET /movies ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MovieListResponse {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub category: Option<i32>,
    pub rating_user: bool,
    pub middle_star: Option<f64>,
}

pub async fn get_movies(
    _identity: IdentityHeaders,
    ClientIp(client_ip): ClientIp,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<MovieListResponse>>, CatalogServiceError> {
    let query: MovieListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| CatalogServiceError::InvalidQuery)?
        .unwrap_or_default();

    let usecase = ListMoviesUseCase {
        repo: state.movie_repo(),
    };
    let movies = usecase
        .execute(&query.filter(), query.page(), &client_ip.to_string())
        .await?;
    let items = movies
        .into_iter()
        .map(|item| MovieListResponse {
            id: item.movie.id,
            title: item.movie.title,
            tagline: item.movie.tagline,
            category: item.movie.category_id,
            rating_user: item.rating_user,
            middle_star: item.middle_star,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /movies/{id} ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
}

impl From<ActorSummary> for PersonResponse {
    fn from(person: ActorSummary) -> Self {
        Self {
            id: person.id,
            name: person.name,
            image: person.image,
        }
    }
}

#[derive(Serialize)]
pub struct ReviewNodeResponse {
    pub name: String,
    pub text: String,
    pub children: Vec<ReviewNodeResponse>,
}

impl From<ReviewNode> for ReviewNodeResponse {
    fn from(node: ReviewNode) -> Self {
        Self {
            name: node.name,
            text: node.text,
            children: node.children.into_iter().map(Self::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i32,
    pub country: String,
    pub world_premiere: chrono::NaiveDate,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub url: String,
    pub category: Option<String>,
    pub directors: Vec<PersonResponse>,
    pub actors: Vec<PersonResponse>,
    pub genres: Vec<String>,
    pub reviews: Vec<ReviewNodeResponse>,
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MovieDetailResponse>, CatalogServiceError> {
    let usecase = GetMovieUseCase {
        movies: state.movie_repo(),
        reviews: state.review_repo(),
    };
    let detail = usecase.execute(id).await?;
    let movie = detail.movie;
    Ok(Json(MovieDetailResponse {
        id: movie.id,
        title: movie.title,
        tagline: movie.tagline,
        description: movie.description,
        poster: movie.poster,
        year: movie.year,
        country: movie.country,
        world_premiere: movie.world_premiere,
        budget: movie.budget,
        fees_in_usa: movie.fees_in_usa,
        fees_in_world: movie.fees_in_world,
        url: movie.url,
        category: detail.category,
        directors: detail.directors.into_iter().map(Into::into).collect(),
        actors: detail.actors.into_iter().map(Into::into).collect(),
        genres: detail.genres,
        reviews: detail.reviews.into_iter().map(Into::into).collect(),
    }))
}
