pub mod repository;
pub mod review_tree;
pub mod types;
