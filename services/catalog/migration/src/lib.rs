use sea_orm_migration::prelude::*;

mod m20250601_000001_create_categories;
mod m20250601_000002_create_genres;
mod m20250601_000003_create_actors;
mod m20250601_000004_create_movies;
mod m20250601_000005_create_movie_credits;
mod m20250601_000006_create_reviews;
mod m20250601_000007_create_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_categories::Migration),
            Box::new(m20250601_000002_create_genres::Migration),
            Box::new(m20250601_000003_create_actors::Migration),
            Box::new(m20250601_000004_create_movies::Migration),
            Box::new(m20250601_000005_create_movie_credits::Migration),
            Box::new(m20250601_000006_create_reviews::Migration),
            Box::new(m20250601_000007_create_ratings::Migration),
        ]
    }
}
