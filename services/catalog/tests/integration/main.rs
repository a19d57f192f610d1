mod helpers;

mod actors_test;
mod ratings_test;
mod reviews_test;
