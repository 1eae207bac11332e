use super::ends::EndType;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Invalid nucleotide '{found}' at position {position}")]
    InvalidBase { position: usize, found: char },

    #[error("A sequence batch must contain at least one sequence")]
    EmptyBatch,

    #[error("Sequence {index} has length {found}, expected {expected} like the rest of the batch")]
    RaggedBatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sequences must be at least {minimum} bases long, got {found}")]
    TooShort { minimum: usize, found: usize },

    #[error("Cannot broadcast a batch of {rows} sequences; only single sequences can be repeated")]
    NotBroadcastable { rows: usize },

    #[error("Shapes {left:?} and {right:?} differ")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Cannot pair {left} ends with {right} ends")]
    MixedEndTypes { left: EndType, right: EndType },

    #[error("End {index} is not fully complementary to its partner")]
    NotComplementary { index: usize },
}
