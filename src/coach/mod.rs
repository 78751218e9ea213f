//! Carbon coach core: product-category resolution and footprint scoring.
//!
//! Lookup data lives in [`CoachTables`], built once and shared by `Arc`. The
//! [`CoachService`] validates requests at the boundary, resolves free-text
//! products through [`CategoryResolver`], and scores through
//! [`FootprintEvaluator`]. Random choices go through an injectable [`Picker`].

pub mod error;
pub mod footprint;
pub mod picker;
pub mod quiz;
pub mod request;
pub mod resolver;
pub mod router;
pub mod service;
pub mod similarity;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::CoachError;
pub use footprint::{
    Answers, ChallengeOutcome, ChallengeResult, FootprintEvaluator, ProductResult, ScoreResult,
    Tier,
};
pub use picker::{FirstPicker, Picker, ThreadRngPicker};
pub use quiz::{QuizQuestion, QuizView};
pub use request::{CoachPayload, CoachRequest, MAX_PRODUCT_CHARS};
pub use resolver::{CategoryMatch, CategoryResolver, MATCH_THRESHOLD};
pub use router::coach_router;
pub use service::{CoachReply, CoachService, ProductView};
pub use tables::{
    Alternative, CategoryKeywordTable, CoachTables, CoverageGap, Dimension, EmissionTable,
    ProductCatalog, TipTable,
};
