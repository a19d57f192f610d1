//! Domain types shared across cinema services.
//!
//! Pure types only, no framework dependencies. Import in `usecase/` and
//! `domain/` layers.

pub mod pagination;
pub mod rating;
