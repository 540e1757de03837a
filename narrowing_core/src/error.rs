//! Engine errors.

use pokedex::CatalogError;

/// Errors raised by the narrowing engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The catalog can never produce a guess.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// `resolve_answer` was called with no question outstanding.
    #[error("no question is pending; call generate_question first")]
    NoPendingQuestion,

    /// Information was requested over an empty viable set.
    #[error("cannot split an empty candidate set")]
    DegenerateSplit,

    #[error("unrecognized answer `{0}`")]
    UnrecognizedAnswer(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
