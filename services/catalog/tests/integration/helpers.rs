use std::net::SocketAddr;

use axum_test::{TestRequest, TestServer};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use cinema_catalog::router::build_router;
use cinema_catalog::state::AppState;
use cinema_catalog_migration::Migrator;
use cinema_catalog_schema::{
    actors, categories, genres, movie_actors, movie_directors, movie_genres, movies, ratings,
    reviews,
};
use cinema_testing::auth::MockAuth;
use cinema_testing::client::forwarded_for;

// ── App setup ────────────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with every migration applied.
///
/// One pooled connection, since each SQLite memory connection is its own database.
pub async fn database() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Router on the in-process transport. No peer address is recorded.
pub fn server(db: &DatabaseConnection) -> TestServer {
    TestServer::new(build_router(AppState { db: db.clone() })).unwrap()
}

/// Router behind a real socket, so handlers see the loopback peer address.
pub fn http_server(db: &DatabaseConnection) -> TestServer {
    let app = build_router(AppState { db: db.clone() })
        .into_make_service_with_connect_info::<SocketAddr>();
    TestServer::builder().http_transport().build(app).unwrap()
}

/// Attach gateway identity headers.
pub fn authed(request: TestRequest) -> TestRequest {
    MockAuth::user()
        .headers()
        .into_iter()
        .fold(request, |req, (name, value)| req.add_header(name, value))
}

/// Attach an `X-Forwarded-For` naming `ip`.
pub fn from_ip(request: TestRequest, ip: &str) -> TestRequest {
    let (name, value) = forwarded_for(ip);
    request.add_header(name, value)
}

// ── Seeding ──────────────────────────────────────────────────────────────────

pub async fn seed_category(db: &DatabaseConnection, id: i32, name: &str) {
    categories::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        description: Set(String::new()),
        url: Set(name.to_lowercase().replace(' ', "-")),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_genre(db: &DatabaseConnection, id: i32, name: &str) {
    genres::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        description: Set(String::new()),
        url: Set(name.to_lowercase()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_actor(db: &DatabaseConnection, id: i32, name: &str) {
    actors::ActiveModel {
        id: Set(id),
        name: Set(name.to_owned()),
        age: Set(50),
        description: Set(format!("About {name}")),
        image: Set(format!("actors/{id}.jpg")),
    }
    .insert(db)
    .await
    .unwrap();
}

pub struct MovieSeed {
    pub id: i32,
    pub year: i32,
    pub category_id: Option<i32>,
    pub draft: bool,
}

impl MovieSeed {
    pub fn published(id: i32) -> Self {
        Self {
            id,
            year: 2000 + id,
            category_id: None,
            draft: false,
        }
    }

    pub fn draft(id: i32) -> Self {
        Self {
            draft: true,
            ..Self::published(id)
        }
    }
}

pub async fn seed_movie(db: &DatabaseConnection, seed: MovieSeed) {
    movies::ActiveModel {
        id: Set(seed.id),
        title: Set(format!("Movie {}", seed.id)),
        tagline: Set(format!("Tagline {}", seed.id)),
        description: Set("A story.".to_owned()),
        poster: Set(format!("movies/{}.jpg", seed.id)),
        year: Set(seed.year),
        country: Set("USA".to_owned()),
        world_premiere: Set(NaiveDate::from_ymd_opt(seed.year, 5, 1).unwrap()),
        budget: Set(1_000_000),
        fees_in_usa: Set(2_000_000),
        fees_in_world: Set(5_000_000),
        category_id: Set(seed.category_id),
        url: Set(format!("movie-{}", seed.id)),
        draft: Set(seed.draft),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn link_genre(db: &DatabaseConnection, movie_id: i32, genre_id: i32) {
    movie_genres::ActiveModel {
        movie_id: Set(movie_id),
        genre_id: Set(genre_id),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn link_actor(db: &DatabaseConnection, movie_id: i32, actor_id: i32) {
    movie_actors::ActiveModel {
        movie_id: Set(movie_id),
        actor_id: Set(actor_id),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn link_director(db: &DatabaseConnection, movie_id: i32, actor_id: i32) {
    movie_directors::ActiveModel {
        movie_id: Set(movie_id),
        actor_id: Set(actor_id),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_review(db: &DatabaseConnection, id: i32, movie_id: i32, parent_id: Option<i32>) {
    reviews::ActiveModel {
        id: Set(id),
        email: Set("viewer@example.com".to_owned()),
        name: Set(format!("viewer {id}")),
        text: Set(format!("review {id}")),
        parent_id: Set(parent_id),
        movie_id: Set(movie_id),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_rating(db: &DatabaseConnection, ip: &str, movie_id: i32, star: i16) {
    ratings::ActiveModel {
        ip: Set(ip.to_owned()),
        star: Set(star),
        movie_id: Set(movie_id),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}
