//! EcoFit carbon coach: footprint quiz scoring, fuzzy product lookup, and
//! friendly challenges served over JSON.

pub mod auth;
pub mod coach;
pub mod config;
pub mod error;
pub mod telemetry;
