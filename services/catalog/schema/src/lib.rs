//! sea-orm entities for the catalog service.

pub mod actors;
pub mod categories;
pub mod genres;
pub mod movie_actors;
pub mod movie_directors;
pub mod movie_genres;
pub mod movies;
pub mod ratings;
pub mod reviews;
