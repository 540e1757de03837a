//! # Pokedex
//!
//! Catalog data for the guessing game - items, their attribute groups, the
//! schema that says which groups become questions, and the on-disk cache of
//! PokeAPI documents. This crate holds data only and does not contain any
//! guessing logic.

pub mod catalog;
pub mod items;
pub mod schema;

pub use catalog::*;
pub use items::*;
pub use schema::*;
