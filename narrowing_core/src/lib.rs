//! # Narrowing Core
//!
//! The guessing engine. This crate turns a `pokedex` catalog into per-group
//! boolean attribute matrices, picks the yes/no question that splits the
//! remaining candidates most evenly, and narrows the candidate set from the
//! player's answers.
//!
//! ## Core Components
//!
//! - **model**: Read-only attribute matrices built once per catalog
//! - **engine**: The game state machine (`generate_question` / `resolve_answer`)
//! - **error**: Caller-contract violations and catalog failures
//!
//! ## Design Philosophy
//!
//! - **No I/O**: Engine calls are synchronous computations over in-memory arrays
//! - **Deterministic**: The same catalog and answers always produce the same questions
//! - **Shareable**: One `AttributeModel` can back any number of independent games

pub mod engine;
pub mod error;
pub mod model;

pub use engine::*;
pub use error::*;
pub use model::*;
