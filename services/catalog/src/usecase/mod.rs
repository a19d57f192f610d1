pub mod actor;
pub mod movie;
pub mod rating;
pub mod review;

#[cfg(test)]
pub(crate) mod mock;
