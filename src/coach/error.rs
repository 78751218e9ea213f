use super::tables::Dimension;

/// Client-side input problems. None of these are fatal; each becomes a 400 reply.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoachError {
    #[error("Please provide a mode.")]
    MissingMode,
    #[error("Invalid mode '{0}'. Expected one of quiz, calculate, product, challenge.")]
    UnknownMode(String),
    #[error("Please provide all answers (missing {dimension}).")]
    MissingAnswer { dimension: Dimension },
    #[error("Invalid {dimension} option '{label}'.")]
    InvalidChoice { dimension: Dimension, label: String },
    #[error("Please provide a product.")]
    MissingProduct,
    #[error("Product text is too long (at most {limit} characters).")]
    ProductTooLong { limit: usize },
    #[error("Quantity must be a whole number of at least 1.")]
    InvalidQuantity,
    #[error("Please provide both scores.")]
    MissingScores,
    #[error("{field} must be a finite, non-negative number.")]
    InvalidScore { field: &'static str },
}
